//! Error types for the admin shell

use thiserror::Error;

/// Errors raised while wiring the sidebar controller to a host.
///
/// The toggle and resize operations themselves never fail; only setup does.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("No global `window` available")]
    NoWindow,

    #[error("Window has no `document`")]
    NoDocument,

    #[error("Failed to register `{0}` listener")]
    Listener(String),

    #[error("Malformed sidebar config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid sidebar config: {0}")]
    InvalidConfig(String),

    #[error("Could not read sidebar config from page: {0}")]
    JsConfig(String),
}

/// Result type for shell setup
pub type ShellResult<T> = Result<T, ShellError>;
