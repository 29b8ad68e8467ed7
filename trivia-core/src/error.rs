/// Structured error types for trivia-core.
///
/// Uses `thiserror` so the server and CLI can compose these into their own
/// error types; the CLI wraps them with `anyhow` context.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for trivia-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading a config file failed
    #[error("failed to read config file {path:?}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    /// Config file is not valid TOML for `Settings`
    #[error("invalid config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A setting has a value outside its allowed range
    #[error("invalid setting '{key}': {reason}")]
    InvalidSetting { key: &'static str, reason: String },
}

/// Result type alias using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_setting_display() {
        let err = CoreError::InvalidSetting {
            key: "questions_per_page",
            reason: "must be at least 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid setting 'questions_per_page': must be at least 1"
        );
    }
}
