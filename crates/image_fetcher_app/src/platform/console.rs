use std::io::{self, BufRead, Write};

use image_fetcher_core::{outcome_lines, Outcome, CLOSING_MESSAGE, PROMPT, WELCOME_LINES};
use image_fetcher_engine::OutcomeSink;

/// Prints each outcome to stdout as it arrives.
pub(crate) struct ConsoleSink;

impl OutcomeSink for ConsoleSink {
    fn emit(&self, outcome: &Outcome) {
        for line in outcome_lines(outcome) {
            println!("{line}");
        }
    }
}

pub(crate) fn print_banner() {
    for line in WELCOME_LINES {
        println!("{line}");
    }
    println!();
}

pub(crate) fn print_closing() {
    println!();
    println!("{CLOSING_MESSAGE}");
}

/// Shows the prompt and reads one line. End of input counts as an empty line.
pub(crate) fn prompt_for_urls(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<String> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
