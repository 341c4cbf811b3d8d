//! Mime shortcut table
//!
//! Maps short aliases such as `html` or `jpg` to canonical mime types and
//! back. Both directions are built once on first use and never mutated.

mod mapping;

use std::collections::BTreeMap;
use std::sync::LazyLock;

static TABLE: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(mapping::build_mime_types);

static REVERSE_TABLE: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(build_reverse_mime_types);

fn build_reverse_mime_types() -> BTreeMap<&'static str, &'static str> {
    let mut reversed: BTreeMap<&'static str, &'static str> =
        TABLE.iter().map(|(suffix, mime)| (*mime, *suffix)).collect();
    reversed.extend(mapping::preferred_suffixes());
    reversed
}

/// Lookup helpers over the static alias table.
pub struct Mime;

impl Mime {
    /// Canonical mime type for an alias, if the alias is known.
    pub fn get(alias: &str) -> Option<&'static str> {
        TABLE.get(alias).copied()
    }

    /// Canonical mime type for an alias, or the input itself when unknown.
    pub fn get_or_fallback(alias: &str) -> &str {
        Self::get(alias).unwrap_or(alias)
    }

    /// Look up the file suffix for a canonical mime type.
    pub fn get_suffix(mime: &str) -> Option<&'static str> {
        REVERSE_TABLE.get(mime).copied()
    }

    /// Suffix of the temp page for a full mime type or a shortcut.
    ///
    /// A known shortcut is its own suffix (`svgz` stays `svgz`), a full mime
    /// type maps to its preferred shortcut, and unmapped strings are used
    /// verbatim.
    pub fn suffix_for(mime_or_alias: &str) -> String {
        if Self::get(mime_or_alias).is_some() {
            return mime_or_alias.to_string();
        }
        Self::get_suffix(mime_or_alias)
            .unwrap_or(mime_or_alias)
            .to_string()
    }

    /// Whether the input needs html page framing (charset, base href).
    pub fn is_html(mime_or_alias: &str) -> bool {
        mime_or_alias.contains("html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_extensions() {
        assert_eq!(Mime::get("html"), Some("text/html"));
        assert_eq!(Mime::get("css"), Some("text/css"));
        assert_eq!(Mime::get("js"), Some("application/javascript"));
        assert_eq!(Mime::get("json"), Some("application/json"));
        assert_eq!(Mime::get("pdf"), Some("application/pdf"));
        assert_eq!(Mime::get("png"), Some("image/png"));
        assert_eq!(Mime::get("jpg"), Some("image/jpeg"));
        assert_eq!(Mime::get("svg"), Some("image/svg+xml"));
        assert_eq!(Mime::get("mp4"), Some("video/mp4"));
        assert_eq!(Mime::get("mp3"), Some("audio/mpeg"));
    }

    #[test]
    fn test_get_unknown_extension() {
        assert_eq!(Mime::get("unknown"), None);
        assert_eq!(Mime::get("xyz123"), None);
    }

    #[test]
    fn test_get_or_fallback() {
        assert_eq!(Mime::get_or_fallback("html"), "text/html");
        assert_eq!(Mime::get_or_fallback("unknown"), "unknown");
        assert_eq!(Mime::get_or_fallback("text/html"), "text/html");
    }

    #[test]
    fn test_get_suffix_prefers_canonical_alias() {
        assert_eq!(Mime::get_suffix("text/html"), Some("html"));
        assert_eq!(Mime::get_suffix("image/jpeg"), Some("jpg"));
        assert_eq!(Mime::get_suffix("image/svg+xml"), Some("svg"));
        assert_eq!(Mime::get_suffix("text/plain"), Some("txt"));
        assert_eq!(Mime::get_suffix("unknown/type"), None);
    }

    #[test]
    fn test_suffix_for_alias_mime_and_unmapped() {
        assert_eq!(Mime::suffix_for("html"), "html");
        assert_eq!(Mime::suffix_for("svg"), "svg");
        assert_eq!(Mime::suffix_for("text/html"), "html");
        assert_eq!(Mime::suffix_for("image/svg+xml"), "svg");
        assert_eq!(Mime::suffix_for("custom"), "custom");
        assert_eq!(Mime::suffix_for("custom/mime"), "custom/mime");
    }

    #[test]
    fn test_known_alias_keeps_itself() {
        for alias in ["htm", "shtml", "jpeg", "svgz", "bin", "tif"] {
            assert_eq!(Mime::suffix_for(alias), alias);
        }
        // the full mime type still resolves to the preferred alias
        assert_eq!(Mime::suffix_for("image/jpeg"), "jpg");
        assert_eq!(Mime::suffix_for("application/octet-stream"), "");
    }

    #[test]
    fn test_case_sensitivity() {
        assert_eq!(Mime::get("HTML"), None);
        assert_eq!(Mime::suffix_for("HTML"), "HTML");
    }

    #[test]
    fn test_empty_alias() {
        assert_eq!(Mime::get(""), Some("application/octet-stream"));
        assert_eq!(Mime::get_suffix("application/octet-stream"), Some(""));
    }

    #[test]
    fn test_is_html() {
        assert!(Mime::is_html("html"));
        assert!(Mime::is_html("text/html"));
        assert!(Mime::is_html("application/xhtml+xml"));
        assert!(!Mime::is_html("image/svg+xml"));
        assert!(!Mime::is_html("svg"));
    }

    #[test]
    fn test_reverse_lookup_consistency() {
        for (ext, mime) in [
            ("html", "text/html"),
            ("css", "text/css"),
            ("js", "application/javascript"),
            ("json", "application/json"),
            ("png", "image/png"),
        ] {
            assert_eq!(Mime::get(ext), Some(mime));
            assert_eq!(Mime::get_suffix(mime), Some(ext));
        }
    }
}
