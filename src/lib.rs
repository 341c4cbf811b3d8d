//! RFox Render
//!
//! Renders browser-renderable content (HTML, SVG, images) into a raster image.
//! The content is written into a scoped temp directory, screenshotted with a
//! headless Chrome/Chromium process and then trimmed (and, for non-png output,
//! flattened onto white) by ImageMagick's `convert`.
//!
//! # Requirements
//!
//! - Chrome or Chromium, either on `PATH` or configured explicitly
//! - ImageMagick (`convert`)
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let png = rfrender::render("html", "<p>hi</p>", "png", None, None, None)?;
//! assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub mod browser;
pub mod convert;
pub mod error;
pub mod md;
pub mod mime;
pub mod page;
pub mod render;

pub use error::{Error, Result};
pub use mime::Mime;
pub use render::{RenderRequest, Renderer};

// Async-friendly entry point running the pipeline on tokio's blocking pool
#[cfg(feature = "async")]
pub mod async_api;

#[cfg(feature = "async")]
pub use async_api::render_async;

/// Environment variable overriding the browser executable
pub const BROWSER_ENV: &str = "RFRENDER_BROWSER";

/// Environment variable overriding the image conversion executable
pub const CONVERTER_ENV: &str = "RFRENDER_CONVERTER";

/// Configuration for a [`Renderer`]
///
/// Defaults match the command line tool: a 1000x2000 window, a browser
/// located automatically and ImageMagick's `convert` from `PATH`.
///
/// # Examples
///
/// ```
/// let cfg = rfrender::RenderConfig::default();
/// assert_eq!(cfg.viewport.width, 1000);
/// assert!(cfg.browser.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Window size used when a request does not set its own
    pub viewport: Viewport,
    /// Explicit browser executable; located on the system when `None`
    pub browser: Option<PathBuf>,
    /// Image conversion executable
    pub converter: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            browser: None,
            converter: PathBuf::from(convert::DEFAULT_CONVERTER),
        }
    }
}

impl RenderConfig {
    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Apply `RFRENDER_BROWSER` / `RFRENDER_CONVERTER` when they are set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var_os(key))
    }

    fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<std::ffi::OsString>,
    {
        if let Some(browser) = lookup(BROWSER_ENV).filter(|v| !v.is_empty()) {
            self.browser = Some(PathBuf::from(browser));
        }
        if let Some(converter) = lookup(CONVERTER_ENV).filter(|v| !v.is_empty()) {
            self.converter = PathBuf::from(converter);
        }
        self
    }
}

/// Browser window dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 2000,
        }
    }
}

impl Viewport {
    /// Viewport from optional dimensions, falling back to the defaults.
    pub fn or_default(width: Option<u32>, height: Option<u32>) -> Self {
        let d = Self::default();
        Self {
            width: width.unwrap_or(d.width),
            height: height.unwrap_or(d.height),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "viewport must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Render content that is renderable in chrome (html, svg etc) to an image.
///
/// * `mime` - a full mime type such as "text/html" or a shortcut such as "html"
/// * `input` - the content, e.g. html source or svg data
/// * `output_type` - output image type understood by ImageMagick, e.g. "png", "jpg"
/// * `width`, `height` - window size, default 1000x2000
/// * `asset_base` - directory that relative asset urls in html resolve against
///
/// Uses [`RenderConfig::default`] with env overrides applied.
pub fn render(
    mime: &str,
    input: impl AsRef<[u8]>,
    output_type: &str,
    width: Option<u32>,
    height: Option<u32>,
    asset_base: Option<&Path>,
) -> Result<Vec<u8>> {
    let mut request = RenderRequest::new(mime, input.as_ref(), output_type)
        .viewport(Viewport::or_default(width, height));
    if let Some(base) = asset_base {
        request = request.asset_base(base);
    }
    Renderer::new(RenderConfig::default().with_env_overrides()).render(&request)
}
