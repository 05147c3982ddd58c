use crate::errors::AutomationError;
use std::fmt::Debug;

/// Platform-specific behaviour behind a [`Window`] handle.
pub trait WindowImpl: Send + Sync + Debug {
    /// The window's displayed title text.
    fn read_text(&self) -> Result<String, AutomationError>;
    fn focus(&self) -> Result<(), AutomationError>;
    fn maximize(&self) -> Result<(), AutomationError>;

    /// Text of the window's descendants, joined by newlines.
    fn read_content(&self) -> Result<String, AutomationError>;
    fn type_text(&self, text: &str) -> Result<(), AutomationError>;
    fn press_key(&self, key: &str) -> Result<(), AutomationError>;

    fn clone_box(&self) -> Box<dyn WindowImpl>;
}

/// A non-owning handle to a live top-level window.
///
/// The window itself belongs to the target application and may disappear at
/// any time; handles are re-acquired by scanning rather than kept around.
#[derive(Debug)]
pub struct Window {
    inner: Box<dyn WindowImpl>,
}

impl Window {
    pub fn new(impl_: Box<dyn WindowImpl>) -> Self {
        Self { inner: impl_ }
    }

    /// Reads the displayed text, reporting any failure as a window access error.
    pub fn text(&self) -> Result<String, AutomationError> {
        self.inner.read_text().map_err(|e| match e {
            AutomationError::WindowAccess(_) => e,
            other => AutomationError::WindowAccess(other.to_string()),
        })
    }

    pub fn focus(&self) -> Result<(), AutomationError> {
        self.inner.focus()
    }

    pub fn maximize(&self) -> Result<(), AutomationError> {
        self.inner.maximize()
    }

    pub fn content(&self) -> Result<String, AutomationError> {
        self.inner.read_content()
    }

    pub fn type_text(&self, text: &str) -> Result<(), AutomationError> {
        self.inner.type_text(text)
    }

    pub fn press_key(&self, key: &str) -> Result<(), AutomationError> {
        self.inner.press_key(key)
    }
}

impl Clone for Window {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_box(),
        }
    }
}
