use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use art_logging::{art_info, art_warn};
use emoji_art_app::{config, DocumentSession};
use emoji_art_core::{extract_redirected_image_url, Background, FetchStatus};
use url::Url;

const FETCH_WAIT: Duration = Duration::from_secs(60);

/// Headless driver: loads one background (URL or local path) into a fresh
/// document and reports what the view-model ends up showing.
fn main() -> anyhow::Result<()> {
    let config_path = config::default_config_path();
    let config = config::load_config(&config_path)?;
    art_logging::initialize(config.log.destination(), config.log.level_filter());

    let mut session =
        DocumentSession::new(config.fetch.settings()).context("starting fetch engine")?;

    if let Some(arg) = std::env::args().nth(1) {
        let url = background_url(&arg)?;
        art_info!("Loading background {}", url);
        session.set_background(Background::Url(url));
        if !session.wait_until_idle(FETCH_WAIT) {
            art_warn!("Background still loading after {:?}", FETCH_WAIT);
        }
    }

    let view = session.view();
    match (&view.background_image, view.fetch_status) {
        (Some(image), _) => art_info!("Background ready: {}x{}", image.width, image.height),
        (None, FetchStatus::Fetching) => art_info!("Background still fetching"),
        (None, FetchStatus::Idle) => art_info!("No background image"),
    }
    Ok(())
}

fn background_url(arg: &str) -> anyhow::Result<Url> {
    if let Ok(url) = Url::parse(arg) {
        return Ok(extract_redirected_image_url(&url));
    }
    let path = Path::new(arg)
        .canonicalize()
        .with_context(|| format!("background {arg:?} is neither a url nor a readable path"))?;
    Url::from_file_path(&path).map_err(|()| anyhow::anyhow!("cannot turn {path:?} into a file url"))
}
