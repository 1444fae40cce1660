use std::sync::Arc;

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Retrieve and decode the resource off the owner's thread.
    FetchBackground { url: Url },
    /// Decode in place, before the triggering intent returns.
    DecodeBackground { bytes: Arc<[u8]> },
}
