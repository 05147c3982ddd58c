use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutomationError {
    /// A window's text could not be read, or the window could not be focused.
    #[error("Window access failed: {0}")]
    WindowAccess(String),

    #[error("Controller not found: {0}")]
    ControllerNotFound(String),

    #[error("Platform-specific error: {0}")]
    PlatformError(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// A window matched a recognized tag but its sub-key could not be extracted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed window title '{title}': {reason}")]
pub struct TitleParseError {
    pub title: String,
    pub reason: String,
}

impl TitleParseError {
    pub(crate) fn new(title: &str, reason: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            reason: reason.into(),
        }
    }
}
