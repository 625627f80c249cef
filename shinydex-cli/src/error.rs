use thiserror::Error;

use shinydex_collection::CollectionError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Collection file could not be read or written
    #[error(transparent)]
    Collection(#[from] CollectionError),

    /// No game given and no default configured
    #[error("No game given and no default set (try `shinydex config set-game <game>`)")]
    NoGame,

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
