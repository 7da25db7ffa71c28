use md5::{Digest, Md5};
use url::Url;

use crate::digest::to_hex;

/// Extension used for synthesized names when the content type gives none.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Picks the on-disk name for a downloaded image.
///
/// The last path segment of `url` wins when it is non-empty. Otherwise the
/// name is `{md5(url)}.{ext}`, where `ext` is the subtype of `content_type`
/// (`image/png` gives `png`) or [`DEFAULT_EXTENSION`] when the content type
/// is missing or malformed.
pub fn resolve_filename(url: &str, content_type: Option<&str>) -> String {
    match last_path_segment(url) {
        Some(segment) => segment,
        None => synthetic_filename(url, content_type),
    }
}

/// Last `/`-separated piece of the path, exactly as typed: no percent
/// re-encoding, query and fragment cut off.
fn last_path_segment(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    if parsed.cannot_be_a_base() {
        return None;
    }

    let without_fragment = url.split('#').next()?;
    let without_query = without_fragment.split('?').next()?;
    let (_, after_scheme) = without_query.split_once("://")?;
    let (_, path) = after_scheme.split_once('/')?;
    match path.rsplit('/').next()? {
        "" | "." | ".." => None,
        segment => Some(segment.to_string()),
    }
}

fn synthetic_filename(url: &str, content_type: Option<&str>) -> String {
    let stem = to_hex(&Md5::digest(url.as_bytes()));
    let ext = extension_from_content_type(content_type)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    format!("{stem}.{ext}")
}

fn extension_from_content_type(content_type: Option<&str>) -> Option<String> {
    let essence = content_type?.split(';').next()?.trim();
    let (_, subtype) = essence.rsplit_once('/')?;
    let subtype = subtype.trim();
    if subtype.is_empty() {
        None
    } else {
        Some(subtype.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_strips_parameters() {
        assert_eq!(
            extension_from_content_type(Some("image/png; charset=binary")).as_deref(),
            Some("png")
        );
    }

    #[test]
    fn extension_keeps_structured_suffix() {
        assert_eq!(
            extension_from_content_type(Some("image/svg+xml")).as_deref(),
            Some("svg+xml")
        );
    }

    #[test]
    fn extension_rejects_malformed_values() {
        assert_eq!(extension_from_content_type(None), None);
        assert_eq!(extension_from_content_type(Some("png")), None);
        assert_eq!(extension_from_content_type(Some("image/")), None);
        assert_eq!(extension_from_content_type(Some("")), None);
    }

    #[test]
    fn segment_ignores_query_and_fragment() {
        assert_eq!(
            last_path_segment("https://example.com/img/cat.gif?size=large#top").as_deref(),
            Some("cat.gif")
        );
    }

    #[test]
    fn dot_segments_are_not_filenames() {
        assert_eq!(last_path_segment("https://example.com/img/.."), None);
        assert_eq!(last_path_segment("https://example.com/img/."), None);
    }

    #[test]
    fn extension_keeps_subtype_case() {
        assert_eq!(
            extension_from_content_type(Some("image/PNG")).as_deref(),
            Some("PNG")
        );
    }

    #[test]
    fn trailing_slash_has_no_segment() {
        assert_eq!(last_path_segment("https://example.com/gallery/"), None);
        assert_eq!(last_path_segment("https://example.com"), None);
    }
}
