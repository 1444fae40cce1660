use art_logging::{art_debug, art_info};

use crate::{Background, DocumentState, Effect, FetchStatus, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: DocumentState, msg: Msg) -> (DocumentState, Vec<Effect>) {
    let effects = match msg {
        Msg::SetBackground(background) => set_background(&mut state, background),
        Msg::AddEmoji { text, at, size } => {
            let id = state.document_mut().add_emoji(text, at, size as i32);
            art_debug!("AddEmoji id={} at={:?}", id, at);
            state.mark_dirty();
            Vec::new()
        }
        Msg::MoveEmoji { emoji, offset } => {
            match state.document_mut().emoji_matching_mut(&emoji) {
                Some(stored) => {
                    stored.x = stored.x.saturating_add(offset.width as i32);
                    stored.y = stored.y.saturating_add(offset.height as i32);
                    state.mark_dirty();
                }
                None => art_debug!("MoveEmoji ignored, no emoji with id={}", emoji.id),
            }
            Vec::new()
        }
        Msg::ScaleEmoji { emoji, factor } => {
            match state.document_mut().emoji_matching_mut(&emoji) {
                Some(stored) => {
                    stored.size = (f64::from(stored.size) * factor).round() as i32;
                    state.mark_dirty();
                }
                None => art_debug!("ScaleEmoji ignored, no emoji with id={}", emoji.id),
            }
            Vec::new()
        }
        Msg::BackgroundDecoded { image } => {
            // Decoding runs before the intent returns, so only a bytes
            // background can be current here.
            if matches!(state.background(), Background::ImageBytes(_)) {
                state.set_background_image(image);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::BackgroundFetched { url, image } => {
            state.set_fetch_status(FetchStatus::Idle);
            state.mark_dirty();
            if state.background().url() == Some(&url) {
                state.set_background_image(image);
            } else {
                art_info!("Discarding stale background fetch for {}", url);
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn set_background(state: &mut DocumentState, background: Background) -> Vec<Effect> {
    if !state.document_mut().set_background(background) {
        return Vec::new();
    }
    state.set_background_image(None);
    state.mark_dirty();

    let effect = match state.background() {
        Background::Blank => None,
        Background::Url(url) => Some(Effect::FetchBackground { url: url.clone() }),
        Background::ImageBytes(bytes) => Some(Effect::DecodeBackground {
            bytes: bytes.clone(),
        }),
    };

    match &effect {
        None => state.set_fetch_status(FetchStatus::Idle),
        Some(Effect::FetchBackground { url }) => {
            art_debug!("Background set to {}", url);
            state.set_fetch_status(FetchStatus::Fetching);
        }
        Some(Effect::DecodeBackground { bytes }) => {
            art_debug!("Background set to {} image bytes", bytes.len());
        }
    }

    effect.into_iter().collect()
}
