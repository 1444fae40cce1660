use std::sync::Arc;

use url::Url;

use crate::identity::{Identifiable, IdentifiedCollection};

pub type EmojiId = u64;

/// The document's backdrop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Background {
    #[default]
    Blank,
    Url(Url),
    ImageBytes(Arc<[u8]>),
}

impl Background {
    pub fn url(&self) -> Option<&Url> {
        match self {
            Background::Url(url) => Some(url),
            _ => None,
        }
    }

    pub fn image_bytes(&self) -> Option<&Arc<[u8]>> {
        match self {
            Background::ImageBytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// A glyph placed on the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    pub id: EmojiId,
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub size: i32,
}

impl Identifiable for Emoji {
    type Id = EmojiId;

    fn id(&self) -> EmojiId {
        self.id
    }
}

/// Emoji placed over a background. Later emoji draw on top of earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    background: Background,
    emojis: Vec<Emoji>,
    next_emoji_id: EmojiId,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            background: Background::Blank,
            emojis: Vec::new(),
            next_emoji_id: 1,
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn emojis(&self) -> &[Emoji] {
        &self.emojis
    }

    pub fn emoji(&self, id: EmojiId) -> Option<&Emoji> {
        self.emojis.iter().find(|emoji| emoji.id == id)
    }

    /// Appends an emoji under a fresh id. Neither text nor size is validated.
    pub fn add_emoji(&mut self, text: impl Into<String>, at: (i32, i32), size: i32) -> EmojiId {
        let id = self.next_emoji_id;
        self.next_emoji_id += 1;
        self.emojis.push(Emoji {
            id,
            text: text.into(),
            x: at.0,
            y: at.1,
            size,
        });
        id
    }

    /// Replaces the background. Returns `false` when the new value equals the
    /// current one, in which case nothing changes.
    pub fn set_background(&mut self, background: Background) -> bool {
        if self.background == background {
            return false;
        }
        self.background = background;
        true
    }

    pub(crate) fn emoji_matching_mut(&mut self, emoji: &Emoji) -> Option<&mut Emoji> {
        let index = self.emojis.index_matching(emoji)?;
        self.emojis.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::{Background, Document};
    use url::Url;

    #[test]
    fn ids_increase_in_insertion_order() {
        let mut doc = Document::new();
        let ids: Vec<_> = (0..5).map(|i| doc.add_emoji("😀", (i, i), 40)).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        let stored: Vec<_> = doc.emojis().iter().map(|e| e.id).collect();
        assert_eq!(stored, ids);
    }

    #[test]
    fn set_background_reports_changes_only() {
        let mut doc = Document::new();
        assert!(!doc.set_background(Background::Blank));

        let url = Url::parse("https://example.com/a.png").unwrap();
        assert!(doc.set_background(Background::Url(url.clone())));
        assert!(!doc.set_background(Background::Url(url)));
        assert!(doc.set_background(Background::ImageBytes(vec![1, 2, 3].into())));
        assert!(!doc.set_background(Background::ImageBytes(vec![1, 2, 3].into())));
    }

    #[test]
    fn emoji_lookup_by_id() {
        let mut doc = Document::new();
        let id = doc.add_emoji("🐶", (10, 20), 30);
        assert_eq!(doc.emoji(id).map(|e| e.text.as_str()), Some("🐶"));
        assert!(doc.emoji(id + 1).is_none());
    }
}
