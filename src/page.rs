//! Page framing: the file chrome is pointed at.
//!
//! Chrome does not honor a `<base>` tag inside a data uri, so the content is
//! always written to a real file in the render workspace.

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::{Error, Mime, Result};

/// Forces utf-8 decoding of html pages regardless of chrome's sniffing.
pub const CHARSET_META: &str = r#"<meta http-equiv="Content-Type" content="text/html; charset=utf-8"/>"#;

/// Stem of the page file inside the workspace.
pub const PAGE_STEM: &str = "input";

/// Frame the input for chrome.
///
/// Html input is prefixed with a `<base href>` (when `asset_base` is given)
/// followed by the charset meta. Anything else is returned unchanged.
pub fn prepare_page(mime: &str, input: &[u8], asset_base: Option<&Path>) -> Result<Vec<u8>> {
    if !Mime::is_html(mime) {
        return Ok(input.to_vec());
    }

    let mut page = Vec::with_capacity(input.len() + CHARSET_META.len() + 64);
    if let Some(base) = asset_base {
        page.extend_from_slice(base_href(base)?.as_bytes());
    }
    page.extend_from_slice(CHARSET_META.as_bytes());
    page.extend_from_slice(input);
    Ok(page)
}

/// `<base href="file:///dir/">` for an asset directory.
pub fn base_href(asset_base: &Path) -> Result<String> {
    let abs = std::path::absolute(asset_base)?;
    let url = Url::from_directory_path(&abs).map_err(|_| {
        Error::Config(format!(
            "asset base {} cannot be expressed as a file url",
            asset_base.display()
        ))
    })?;
    Ok(format!(r#"<base href="{}">"#, url))
}

/// Write the framed page into `dir` as `input.<suffix>`.
pub fn write_page(dir: &Path, mime: &str, page: &[u8]) -> Result<PathBuf> {
    let path = dir.join(format!("{}.{}", PAGE_STEM, Mime::suffix_for(mime)));
    fs::write(&path, page)?;
    log::debug!("wrote {} bytes to {}", page.len(), path.display());
    Ok(path)
}
