//! Windows platform implementation for window discovery and input
//!
//! This module talks to the Windows UI Automation API through the
//! uiautomation crate.

use crate::platforms::AutomationEngine;
use crate::{AutomationError, Coordinate, Window, WindowImpl};
use std::sync::Arc;
use tracing::debug;
use uiautomation::controls::ControlType;
use uiautomation::inputs::Mouse;
use uiautomation::patterns;
use uiautomation::types::{Point, TreeScope, UIProperty, WindowVisualState};
use uiautomation::variants::Variant;
use uiautomation::UIAutomation;

// typing interval between keystrokes, in milliseconds
const KEY_INTERVAL_MS: u64 = 10;

// thread-safety
#[derive(Clone)]
pub struct ThreadSafeWinUIAutomation(pub Arc<UIAutomation>);

// Safety: UIAutomation is thread-safe after proper COM initialization
unsafe impl Send for ThreadSafeWinUIAutomation {}
unsafe impl Sync for ThreadSafeWinUIAutomation {}

/// Thread-safe wrapper for UIElement
#[derive(Clone)]
pub(crate) struct ThreadSafeWinUIElement(pub(crate) Arc<uiautomation::UIElement>);

// Safety: UIElement is thread-safe when wrapped properly
unsafe impl Send for ThreadSafeWinUIElement {}
unsafe impl Sync for ThreadSafeWinUIElement {}

impl From<uiautomation::Error> for AutomationError {
    fn from(error: uiautomation::Error) -> Self {
        AutomationError::PlatformError(format!("UIAutomation error: {error}"))
    }
}

pub struct WindowsEngine {
    automation: ThreadSafeWinUIAutomation,
}

impl WindowsEngine {
    pub fn new() -> Result<Self, AutomationError> {
        // UIAutomation::new initializes COM for the calling thread
        let automation = UIAutomation::new()
            .map_err(|e| AutomationError::PlatformError(format!("Failed to initialize COM: {e}")))?;
        Ok(Self {
            automation: ThreadSafeWinUIAutomation(Arc::new(automation)),
        })
    }
}

impl AutomationEngine for WindowsEngine {
    fn enumerate_windows(&self) -> Result<Vec<Window>, AutomationError> {
        let root = self.automation.0.get_root_element()?;
        let condition = self.automation.0.create_property_condition(
            UIProperty::ControlType,
            Variant::from(ControlType::Window as i32),
            None,
        )?;

        let elements = root.find_all(TreeScope::Children, &condition)?;
        debug!("Found '{}' top-level windows", elements.len());

        Ok(elements
            .into_iter()
            .map(|ele| {
                Window::new(Box::new(WindowsWindow {
                    element: ThreadSafeWinUIElement(Arc::new(ele)),
                    automation: self.automation.clone(),
                }))
            })
            .collect())
    }

    fn move_pointer(&self, at: Coordinate) -> Result<(), AutomationError> {
        debug!("moving pointer to ({}, {})", at.x, at.y);
        Mouse::default()
            .move_to(Point::new(at.x, at.y))
            .map_err(|e| AutomationError::PlatformError(format!("Failed to move pointer: {e}")))
    }

    fn click(&self, at: Coordinate) -> Result<(), AutomationError> {
        debug!("clicking at ({}, {})", at.x, at.y);
        Mouse::default()
            .click(Point::new(at.x, at.y))
            .map_err(|e| AutomationError::PlatformError(format!("Failed to click: {e}")))
    }
}

pub struct WindowsWindow {
    element: ThreadSafeWinUIElement,
    automation: ThreadSafeWinUIAutomation,
}

impl std::fmt::Debug for WindowsWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowsWindow")
            .field("name", &self.element.0.get_name().unwrap_or_default())
            .finish()
    }
}

impl WindowImpl for WindowsWindow {
    fn read_text(&self) -> Result<String, AutomationError> {
        self.element
            .0
            .get_name()
            .map_err(|e| AutomationError::WindowAccess(e.to_string()))
    }

    fn focus(&self) -> Result<(), AutomationError> {
        self.element
            .0
            .set_focus()
            .map_err(|e| AutomationError::WindowAccess(format!("Failed to focus window: {e}")))
    }

    fn maximize(&self) -> Result<(), AutomationError> {
        let window_pattern = self
            .element
            .0
            .get_pattern::<patterns::UIWindowPattern>()
            .map_err(|e| {
                AutomationError::PlatformError(format!("Window does not support WindowPattern: {e}"))
            })?;
        window_pattern
            .set_window_visual_state(WindowVisualState::Maximized)
            .map_err(|e| AutomationError::PlatformError(format!("Failed to maximize window: {e}")))
    }

    fn read_content(&self) -> Result<String, AutomationError> {
        let condition = self.automation.0.create_true_condition()?;
        let descendants = self
            .element
            .0
            .find_all(TreeScope::Descendants, &condition)
            .map_err(|e| AutomationError::WindowAccess(e.to_string()))?;

        let mut lines = Vec::new();
        for element in descendants {
            // prefer the value of editable controls over their label
            let value = element
                .get_property_value(UIProperty::ValueValue)
                .ok()
                .and_then(|v| v.get_string().ok())
                .filter(|s| !s.is_empty());
            if let Some(value) = value {
                lines.push(value);
                continue;
            }
            if let Ok(name) = element.get_name() {
                if !name.is_empty() {
                    lines.push(name);
                }
            }
        }

        debug!("read {} text nodes from window", lines.len());
        Ok(lines.join("\n"))
    }

    fn type_text(&self, text: &str) -> Result<(), AutomationError> {
        self.element
            .0
            .send_text(text, KEY_INTERVAL_MS)
            .map_err(|e| AutomationError::PlatformError(e.to_string()))
    }

    fn press_key(&self, key: &str) -> Result<(), AutomationError> {
        self.element
            .0
            .send_keys(key, KEY_INTERVAL_MS)
            .map_err(|e| AutomationError::PlatformError(format!("Failed to press key: {e:?}")))
    }

    fn clone_box(&self) -> Box<dyn WindowImpl> {
        Box::new(WindowsWindow {
            element: self.element.clone(),
            automation: self.automation.clone(),
        })
    }
}
