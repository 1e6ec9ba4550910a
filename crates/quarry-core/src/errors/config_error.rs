/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed TOML config: {reason}")]
    Toml { reason: String },

    #[error("invalid value for {key}: {value:?}")]
    InvalidEnv { key: String, value: String },
}
