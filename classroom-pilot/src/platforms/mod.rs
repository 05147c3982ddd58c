use crate::{AutomationError, Coordinate, Window};
use std::sync::Arc;

/// The common trait that all platform-specific engines must implement
pub trait AutomationEngine: Send + Sync {
    /// All live top-level windows, in the order the platform reports them
    fn enumerate_windows(&self) -> Result<Vec<Window>, AutomationError>;

    /// Move the pointer to an absolute screen position
    fn move_pointer(&self, at: Coordinate) -> Result<(), AutomationError>;

    /// Left-click at an absolute screen position
    fn click(&self, at: Coordinate) -> Result<(), AutomationError>;
}

#[cfg(target_os = "windows")]
pub mod windows;

/// Create the appropriate engine for the current platform
pub fn create_engine() -> Result<Arc<dyn AutomationEngine>, AutomationError> {
    #[cfg(target_os = "windows")]
    {
        Ok(Arc::new(windows::WindowsEngine::new()?))
    }
    #[cfg(not(target_os = "windows"))]
    {
        Err(AutomationError::UnsupportedPlatform(
            "the classroom client only runs on Windows".to_string(),
        ))
    }
}
