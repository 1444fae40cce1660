use url::Url;

use crate::{Background, BackgroundImage, Emoji, Size};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User picked a new background.
    SetBackground(Background),
    /// User dropped an emoji onto the document.
    AddEmoji {
        text: String,
        at: (i32, i32),
        size: f64,
    },
    /// User dragged an emoji.
    MoveEmoji { emoji: Emoji, offset: Size },
    /// User pinched an emoji.
    ScaleEmoji { emoji: Emoji, factor: f64 },
    /// Synchronous decode of `Background::ImageBytes` finished.
    BackgroundDecoded { image: Option<BackgroundImage> },
    /// Engine completion for a background fetch.
    BackgroundFetched {
        url: Url,
        image: Option<BackgroundImage>,
    },
}
