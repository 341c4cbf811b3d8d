//! The render pipeline: frame page, screenshot with chrome, trim with convert.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::{browser, convert, page, RenderConfig, Result, Viewport};

/// A single render job
///
/// ```
/// use rfrender::{RenderRequest, Viewport};
///
/// let req = RenderRequest::new("html", "<p>hi</p>", "jpg")
///     .viewport(Viewport { width: 640, height: 480 });
/// assert_eq!(req.output_type, "jpg");
/// ```
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Full mime type ("text/html") or shortcut ("html")
    pub mime: String,
    /// Raw content to render
    pub input: Vec<u8>,
    /// ImageMagick output format, e.g. "png", "jpg"
    pub output_type: String,
    /// Window size; the renderer's configured viewport when `None`
    pub viewport: Option<Viewport>,
    /// Directory relative asset urls in html resolve against
    pub asset_base: Option<PathBuf>,
}

impl RenderRequest {
    pub fn new(mime: &str, input: impl Into<Vec<u8>>, output_type: &str) -> Self {
        Self {
            mime: mime.to_string(),
            input: input.into(),
            output_type: output_type.to_string(),
            viewport: None,
            asset_base: None,
        }
    }

    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn asset_base(mut self, dir: impl AsRef<Path>) -> Self {
        self.asset_base = Some(dir.as_ref().to_path_buf());
        self
    }
}

/// Renders requests using external chrome and ImageMagick processes.
///
/// Holds no process state; each call launches both tools afresh in its own
/// temp directory, so a `Renderer` can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render the request and return the bytes of the final image.
    ///
    /// The temp directory and everything in it is removed before this
    /// returns, whether or not a tool failed.
    pub fn render(&self, request: &RenderRequest) -> Result<Vec<u8>> {
        let viewport = request.viewport.unwrap_or(self.config.viewport);
        viewport.validate()?;

        let browser = browser::locate_browser(&self.config)?;
        let content = page::prepare_page(&request.mime, &request.input, request.asset_base.as_deref())?;

        let workspace = TempDir::with_prefix("rfrender-")?;
        let cwd = workspace.path();
        log::trace!("created workspace {}", cwd.display());

        let page_path = page::write_page(cwd, &request.mime, &content)?;
        let screenshot = browser::take_screenshot(&browser, &page_path, viewport, cwd)?;
        let image = convert::trim_image(&self.config.converter, &screenshot, &request.output_type)?;

        log::info!(
            "rendered {} ({}x{}) to {} bytes of {}",
            request.mime,
            viewport.width,
            viewport.height,
            image.len(),
            request.output_type
        );
        Ok(image)
    }
}
