//! Console wording for a fetch run.

use crate::{FailureClass, Outcome};

/// Printed once before the prompt, followed by a blank line.
pub const WELCOME_LINES: [&str; 2] = [
    "Welcome to the Ubuntu Image Fetcher",
    "A tool for mindfully collecting images from the web",
];

pub const PROMPT: &str = "Please enter one or more image URLs, separated by a comma: ";

/// Printed after the last URL, preceded by a blank line.
pub const CLOSING_MESSAGE: &str = "Connection strengthened. Community enriched.";

/// Lines to print for a single processed URL.
pub fn outcome_lines(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Saved { filename, path, .. } => vec![
            format!("✓ Successfully fetched: {filename}"),
            format!("✓ Image saved to {}", path.display()),
        ],
        Outcome::Duplicate { url, .. } => {
            vec![format!("✗ Duplicate image detected, skipping: {url}")]
        }
        Outcome::Failed {
            url,
            class: FailureClass::Connection,
            message,
        } => vec![format!("✗ Connection error for {url}: {message}")],
        Outcome::Failed {
            url,
            class: FailureClass::Other,
            message,
        } => vec![format!("✗ An error occurred for {url}: {message}")],
    }
}
