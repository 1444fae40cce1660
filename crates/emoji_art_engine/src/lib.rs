//! Emoji art engine: background fetching, image decoding and the worker that
//! runs them off the owner's thread.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_image, DecodeError, DecodedImage};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput};
