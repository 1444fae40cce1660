use std::fmt;
use std::sync::Arc;

use crate::{Background, Emoji};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Fetching,
}

/// A decoded background, RGBA8 and row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct BackgroundImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Arc<[u8]>,
}

impl fmt::Debug for BackgroundImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackgroundImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rgba_len", &self.rgba.len())
            .finish()
    }
}

/// Snapshot handed to observers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentView {
    pub emojis: Vec<Emoji>,
    pub background: Background,
    pub background_image: Option<BackgroundImage>,
    pub fetch_status: FetchStatus,
}
