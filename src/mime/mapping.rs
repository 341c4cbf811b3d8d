use std::collections::BTreeMap;

/// File suffix (or shortcut) to canonical mime type.
pub(super) fn build_mime_types() -> BTreeMap<&'static str, &'static str> {
    [
        ("", "application/octet-stream"),
        ("bin", "application/octet-stream"),
        // markup
        ("htm", "text/html"),
        ("html", "text/html"),
        ("shtml", "text/html"),
        ("xhtml", "application/xhtml+xml"),
        ("xht", "application/xhtml+xml"),
        ("xml", "application/xml"),
        ("xsl", "application/xml"),
        ("svg", "image/svg+xml"),
        ("svgz", "image/svg+xml"),
        ("mml", "text/mathml"),
        // text
        ("txt", "text/plain"),
        ("text", "text/plain"),
        ("css", "text/css"),
        ("csv", "text/csv"),
        ("md", "text/markdown"),
        ("js", "application/javascript"),
        ("mjs", "application/javascript"),
        ("json", "application/json"),
        // documents
        ("pdf", "application/pdf"),
        // images
        ("png", "image/png"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("jpe", "image/jpeg"),
        ("gif", "image/gif"),
        ("bmp", "image/bmp"),
        ("ico", "image/x-icon"),
        ("tif", "image/tiff"),
        ("tiff", "image/tiff"),
        ("webp", "image/webp"),
        ("avif", "image/avif"),
        // audio / video
        ("mp3", "audio/mpeg"),
        ("ogg", "audio/ogg"),
        ("wav", "audio/wav"),
        ("mp4", "video/mp4"),
        ("webm", "video/webm"),
    ]
    .into_iter()
    .collect()
}

/// Preferred suffix for mime types that several suffixes map to.
///
/// Applied on top of the naive inversion of `build_mime_types`, which would
/// otherwise keep whichever suffix sorts last.
pub(super) fn preferred_suffixes() -> [(&'static str, &'static str); 9] {
    [
        ("application/octet-stream", ""),
        ("text/html", "html"),
        ("application/xhtml+xml", "xhtml"),
        ("application/xml", "xml"),
        ("image/svg+xml", "svg"),
        ("text/plain", "txt"),
        ("application/javascript", "js"),
        ("image/jpeg", "jpg"),
        ("image/tiff", "tiff"),
    ]
}
