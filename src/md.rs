//! Markdown to html, for feeding markdown documents into the renderer.

use crate::{Error, Result};

/// Convert GitHub flavored markdown (tables, task lists, strikethrough,
/// autolinks, footnotes) to an html fragment.
pub fn to_html(markdown_src: &str) -> Result<String> {
    markdown::to_html_with_options(markdown_src, &markdown::Options::gfm())
        .map_err(|e| Error::Other(format!("markdown conversion failed: {}", e)))
}
