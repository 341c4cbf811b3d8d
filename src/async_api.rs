use crate::{Error, RenderConfig, RenderRequest, Renderer, Result};

/// Render from async code without blocking the runtime.
///
/// The pipeline waits on two child processes, so it runs on tokio's blocking
/// pool. Dropping the returned future does not stop a render already running.
pub async fn render_async(config: RenderConfig, request: RenderRequest) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || Renderer::new(config).render(&request))
        .await
        .map_err(|e| Error::Other(format!("render task failed: {}", e)))?
}
