use crate::view_model::DocumentView;
use crate::{Background, BackgroundImage, Document, Emoji, FetchStatus};

/// View-model state: the owned document plus what was derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentState {
    document: Document,
    background_image: Option<BackgroundImage>,
    fetch_status: FetchStatus,
    dirty: bool,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> DocumentView {
        DocumentView {
            emojis: self.document.emojis().to_vec(),
            background: self.document.background().clone(),
            background_image: self.background_image.clone(),
            fetch_status: self.fetch_status,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn emojis(&self) -> &[Emoji] {
        self.document.emojis()
    }

    pub fn background(&self) -> &Background {
        self.document.background()
    }

    pub fn background_image(&self) -> Option<&BackgroundImage> {
        self.background_image.as_ref()
    }

    pub fn fetch_status(&self) -> FetchStatus {
        self.fetch_status
    }

    /// Returns whether anything observable changed since the last call, and
    /// clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub(crate) fn set_background_image(&mut self, image: Option<BackgroundImage>) {
        self.background_image = image;
    }

    pub(crate) fn set_fetch_status(&mut self, status: FetchStatus) {
        self.fetch_status = status;
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
