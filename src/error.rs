//! Error handling module for the user editor
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Library code returns these; the binary and file helpers wrap them in anyhow.

use thiserror::Error;

/// Main error type for the user editor
#[derive(Error, Debug)]
pub enum UserEditorError {
    /// IO errors (terminal, files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Validation errors (usernames, users file contents)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The prompt facility answered with a result kind the current step does not accept
    #[error("Unhandled result type: {0}")]
    UnhandledResult(String),

    /// Scripted prompter ran dry or was fed a response that does not fit the prompt
    #[error("Script error: {0}")]
    Script(String),

    /// Message catalog errors
    #[error("Translation error: {0}")]
    Translation(String),
}

/// Result type alias for user editor operations
pub type Result<T> = std::result::Result<T, UserEditorError>;

// Convenient error constructors
impl UserEditorError {
    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an unhandled prompt result error
    pub fn unhandled_result(msg: impl Into<String>) -> Self {
        Self::UnhandledResult(msg.into())
    }

    /// Create a script error
    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }

    /// Create a translation error
    pub fn translation(msg: impl Into<String>) -> Self {
        Self::Translation(msg.into())
    }
}
