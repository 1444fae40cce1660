//! Emoji art app: the single owner that wires the core state machine to the
//! engine and publishes state to observers.
pub mod config;
pub mod effects;
pub mod session;

pub use config::{load_config, AppConfig, ConfigError};
pub use effects::EffectRunner;
pub use session::DocumentSession;
