use image_fetcher_core::{resolve_filename, DEFAULT_EXTENSION};
use pretty_assertions::assert_eq;

#[test]
fn last_path_segment_is_used_verbatim() {
    assert_eq!(
        resolve_filename("https://example.com/images/a.png", Some("image/jpeg")),
        "a.png"
    );
    assert_eq!(resolve_filename("https://example.com/photo", None), "photo");
}

#[test]
fn segment_keeps_spaces_and_non_ascii_as_typed() {
    assert_eq!(
        resolve_filename("https://example.com/photos/my image.png", None),
        "my image.png"
    );
    assert_eq!(
        resolve_filename("https://example.com/café.png?w=200#top", Some("image/png")),
        "café.png"
    );
    assert_eq!(
        resolve_filename("https://example.com/already%20encoded.gif", None),
        "already%20encoded.gif"
    );
}

#[test]
fn empty_path_synthesizes_md5_name_from_content_type() {
    // md5("https://example.com")
    assert_eq!(
        resolve_filename("https://example.com", Some("image/png")),
        "c984d06aafbecf6bc55569f964148ea3.png"
    );
}

#[test]
fn empty_path_defaults_to_jpg() {
    let expected = format!("182ccedb33a9e03fbf1079b209da1a31.{DEFAULT_EXTENSION}");
    assert_eq!(resolve_filename("https://example.com/", None), expected);
    assert_eq!(
        resolve_filename("https://example.com/", Some("garbage")),
        expected
    );
}

#[test]
fn synthetic_name_is_stable_per_url() {
    let first = resolve_filename("https://example.com/dir/", Some("image/webp"));
    let second = resolve_filename("https://example.com/dir/", Some("image/webp"));
    let other = resolve_filename("https://example.org/dir/", Some("image/webp"));
    assert_eq!(first, second);
    assert_ne!(first, other);
    assert!(first.ends_with(".webp"));
}

#[test]
fn unparsable_url_still_gets_a_name() {
    let name = resolve_filename("not a url", None);
    assert!(name.ends_with(".jpg"));
    assert_eq!(name.len(), 32 + ".jpg".len());
}
