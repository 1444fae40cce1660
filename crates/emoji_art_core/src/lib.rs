//! Emoji art core: document model, pure view-model state machine and the
//! geometry/collection helpers it relies on.
mod document;
mod effect;
mod emoji;
mod geometry;
mod identity;
mod msg;
mod redirect;
mod state;
mod update;
mod view_model;

pub use document::{Background, Document, Emoji, EmojiId};
pub use effect::Effect;
pub use emoji::{emoji_graphemes, is_emoji_grapheme};
pub use geometry::{Point, Rect, Size};
pub use identity::{Identifiable, IdentifiedCollection, IdentifiedVec};
pub use msg::Msg;
pub use redirect::{extract_redirected_image_url, extract_redirected_image_url_with_base};
pub use state::DocumentState;
pub use update::update;
pub use view_model::{BackgroundImage, DocumentView, FetchStatus};
