//! Construction-time options: who the tutor is, where the classroom's
//! controls sit on screen, and how long to wait between actions.

use crate::AutomationError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// An absolute screen position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorProfile {
    pub first_name: String,
    pub last_initial: String,
}

impl TutorProfile {
    /// The name the classroom shows for the tutor, e.g. `"Jamie R."`.
    pub fn display_name(&self) -> String {
        format!("{} {}.", self.first_name.trim(), self.last_initial.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentCoordinates {
    pub public_chat_pop_out: Coordinate,
    pub public_chat_text_box: Coordinate,
    pub end_session_button: Coordinate,
    pub confirm_end_session_button: Coordinate,
    /// Four clicks that add a new code editor to the classroom. Empty when
    /// the feature is not configured.
    #[serde(default)]
    pub insert_code_editor_path: Vec<Coordinate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingOptions {
    /// Consecutive unchanged scans needed before the window set counts as stable.
    pub stall_threshold: u32,
    /// Pause after clicking the pop-out button.
    pub open_settle_ms: u64,
    /// Pause between pointer moves and clicks in multi-step sequences.
    pub action_settle_ms: u64,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            stall_threshold: 2,
            open_settle_ms: 500,
            action_settle_ms: 1000,
        }
    }
}

impl TimingOptions {
    pub fn open_settle(&self) -> Duration {
        Duration::from_millis(self.open_settle_ms)
    }

    pub fn action_settle(&self) -> Duration {
        Duration::from_millis(self.action_settle_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerOptions {
    pub tutor_profile: TutorProfile,
    pub coords: ComponentCoordinates,
    #[serde(default)]
    pub timing: TimingOptions,
}

impl ControllerOptions {
    pub fn validate(&self) -> Result<(), AutomationError> {
        if self.tutor_profile.first_name.trim().is_empty() {
            return Err(AutomationError::InvalidArgument(
                "tutor_profile.first_name must not be empty".to_string(),
            ));
        }
        if self.tutor_profile.last_initial.trim().chars().count() != 1 {
            return Err(AutomationError::InvalidArgument(format!(
                "tutor_profile.last_initial must be a single character, got '{}'",
                self.tutor_profile.last_initial
            )));
        }
        let path_len = self.coords.insert_code_editor_path.len();
        if path_len != 0 && path_len != 4 {
            return Err(AutomationError::InvalidArgument(format!(
                "coords.insert_code_editor_path must have 4 coordinates, got {path_len}"
            )));
        }
        Ok(())
    }
}
