use image_fetcher_core::parse_url_list;
use pretty_assertions::assert_eq;

#[test]
fn splits_on_commas_and_trims() {
    let urls = parse_url_list(" https://a.example.com/x.png ,https://b.example.com/y.jpg\n");
    assert_eq!(
        urls,
        vec![
            "https://a.example.com/x.png".to_string(),
            "https://b.example.com/y.jpg".to_string(),
        ]
    );
}

#[test]
fn empty_entries_are_dropped() {
    assert_eq!(
        parse_url_list(",, https://a.example.com/x.png , ,"),
        vec!["https://a.example.com/x.png".to_string()]
    );
}

#[test]
fn empty_line_yields_nothing() {
    assert!(parse_url_list("").is_empty());
    assert!(parse_url_list("   \n").is_empty());
}

#[test]
fn repeated_urls_are_kept_in_order() {
    assert_eq!(
        parse_url_list("https://example.com/a.png, https://example.com/a.png"),
        vec![
            "https://example.com/a.png".to_string(),
            "https://example.com/a.png".to_string(),
        ]
    );
}
