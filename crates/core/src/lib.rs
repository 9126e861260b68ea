pub mod config;
pub mod error;
pub mod types;

pub use config::ThemeConfig;
pub use error::{StorefrontError, StorefrontResult};
