use art_logging::{art_info, art_warn};
use emoji_art_core::{BackgroundImage, Effect, Msg};
use emoji_art_engine::{decode_image, DecodedImage, EngineEvent, EngineHandle};

/// Executes core effects against the engine and translates engine events
/// back into core messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &EngineHandle {
        &self.engine
    }

    /// Runs `effects`, returning messages that must be applied before the
    /// current intent completes.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut immediate = Vec::new();
        for effect in effects {
            match effect {
                Effect::FetchBackground { url } => {
                    art_info!("FetchBackground url={}", url);
                    if !self.engine.fetch_background(url.clone()) {
                        immediate.push(Msg::BackgroundFetched { url, image: None });
                    }
                }
                Effect::DecodeBackground { bytes } => {
                    let image = match decode_image(&bytes) {
                        Ok(image) => Some(map_image(image)),
                        Err(err) => {
                            art_warn!("Background image bytes ({}) not decodable: {}", bytes.len(), err);
                            None
                        }
                    };
                    immediate.push(Msg::BackgroundDecoded { image });
                }
            }
        }
        immediate
    }
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::BackgroundFetched { url, result } => {
            let image = match result {
                Ok(image) => Some(map_image(image)),
                Err(failure_kind) => {
                    art_warn!("Background fetch {} failed: {}", url, failure_kind);
                    None
                }
            };
            Msg::BackgroundFetched { url, image }
        }
    }
}

fn map_image(image: DecodedImage) -> BackgroundImage {
    BackgroundImage {
        width: image.width,
        height: image.height,
        rgba: image.rgba.into(),
    }
}
