/// Splits one line of comma-separated URLs into trimmed, non-empty entries.
///
/// Order is preserved and repeated URLs are kept; deduplication happens on
/// fetched content, not on the URL text.
pub fn parse_url_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
