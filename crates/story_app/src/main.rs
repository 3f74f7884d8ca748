//! Terminal binding for the story page controller.
//!
//! Prints each render pass as HTML to stdout and reads delete confirmations
//! from stdin. A browser binding would wire the same `PageEvent`s to real
//! DOM events; the controller does not care which one drives it.

mod surface;

use std::sync::Arc;

use anyhow::Context;
use story_api::{ClientSettings, HttpStoryApi};
use story_page::{PageController, PageEvent};

use crate::surface::TerminalSurface;

fn main() -> anyhow::Result<()> {
    app_logging::initialize(app_logging::LogDestination::Terminal);

    let mut settings = ClientSettings::default();
    if let Ok(base_url) = std::env::var("STORYBOARD_API_URL") {
        settings.base_url = base_url;
    }
    log::info!("story service at {}", settings.base_url);

    let api = HttpStoryApi::new(settings).context("building API client")?;
    let mut controller = PageController::new(Arc::new(api));
    let mut surface = TerminalSurface::new();

    let runtime = tokio::runtime::Runtime::new().context("tokio runtime")?;
    runtime
        .block_on(controller.handle(&mut surface, PageEvent::StoriesRequested))
        .context("loading stories")?;
    Ok(())
}
