use thiserror::Error;

pub type StorefrontResult<T> = Result<T, StorefrontError>;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Unknown widget id: {0}")]
    UnknownWidget(String),

    #[error("Markup write error: {0}")]
    Markup(#[from] std::fmt::Error),

    #[error("Settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
