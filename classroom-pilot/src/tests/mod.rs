mod config_tests;
mod identity_tests;

use crate::{
    AutomationEngine, AutomationError, ComponentCoordinates, ControllerOptions, Coordinate,
    TimingOptions, TutorProfile, Window, WindowImpl,
};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex};

// Initialize tracing for tests
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with_target(true)
        .with_test_writer()
        .try_init();
}

pub const POP_OUT: Coordinate = Coordinate::new(1890, 40);
pub const CHAT_BOX: Coordinate = Coordinate::new(1700, 980);
pub const END_SESSION: Coordinate = Coordinate::new(60, 20);
pub const CONFIRM_END: Coordinate = Coordinate::new(960, 600);

pub fn test_options() -> ControllerOptions {
    ControllerOptions {
        tutor_profile: TutorProfile {
            first_name: "Jamie".to_string(),
            last_initial: "R".to_string(),
        },
        coords: ComponentCoordinates {
            public_chat_pop_out: POP_OUT,
            public_chat_text_box: CHAT_BOX,
            end_session_button: END_SESSION,
            confirm_end_session_button: CONFIRM_END,
            insert_code_editor_path: vec![],
        },
        timing: TimingOptions {
            stall_threshold: 2,
            open_settle_ms: 0,
            action_settle_ms: 0,
        },
    }
}

/// Everything the mock desktop was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Focus(String),
    Maximize(String),
    Typed(String, String),
    Key(String, String),
    Move(Coordinate),
    Click(Coordinate),
}

#[derive(Default)]
struct DesktopState {
    open: Vec<String>,
    pending: VecDeque<Vec<String>>,
    content: HashMap<String, String>,
    unreadable: HashSet<String>,
    unfocusable: HashSet<String>,
    // reads still allowed before a window's next read fails once
    read_budget: HashMap<String, usize>,
}

/// In-memory desktop. Each click reveals the next pending batch of windows,
/// standing in for the classroom's pop-out button.
#[derive(Clone, Default)]
pub struct MockDesktop {
    state: Arc<Mutex<DesktopState>>,
    events: Arc<Mutex<Vec<Event>>>,
}

impl MockDesktop {
    pub fn new(titles: &[&str]) -> Self {
        let desktop = Self::default();
        desktop.state.lock().unwrap().open = titles.iter().map(|t| t.to_string()).collect();
        desktop
    }

    pub fn with_pending(self, batches: &[&[&str]]) -> Self {
        self.state.lock().unwrap().pending = batches
            .iter()
            .map(|b| b.iter().map(|t| t.to_string()).collect())
            .collect();
        self
    }

    pub fn set_content(&self, title: &str, content: &str) {
        self.state
            .lock()
            .unwrap()
            .content
            .insert(title.to_string(), content.to_string());
    }

    pub fn fail_reads_of(&self, title: &str) {
        self.state.lock().unwrap().unreadable.insert(title.to_string());
    }

    pub fn fail_focus_of(&self, title: &str) {
        self.state.lock().unwrap().unfocusable.insert(title.to_string());
    }

    /// Lets `title` be read `reads` more times, then fails its next read once.
    pub fn fail_read_after(&self, title: &str, reads: usize) {
        self.state
            .lock()
            .unwrap()
            .read_budget
            .insert(title.to_string(), reads);
    }

    pub fn open_window(&self, title: &str) {
        self.state.lock().unwrap().open.push(title.to_string());
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn clicks(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Click(_)))
            .count()
    }

    pub fn maximized(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Maximize(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    pub fn engine(&self) -> Arc<dyn AutomationEngine> {
        Arc::new(self.clone())
    }
}

impl AutomationEngine for MockDesktop {
    fn enumerate_windows(&self) -> Result<Vec<Window>, AutomationError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .open
            .iter()
            .map(|title| {
                Window::new(Box::new(MockWindow {
                    title: title.clone(),
                    desktop: self.state.clone(),
                    events: self.events.clone(),
                }))
            })
            .collect())
    }

    fn move_pointer(&self, at: Coordinate) -> Result<(), AutomationError> {
        self.events.lock().unwrap().push(Event::Move(at));
        Ok(())
    }

    fn click(&self, at: Coordinate) -> Result<(), AutomationError> {
        self.events.lock().unwrap().push(Event::Click(at));
        let mut state = self.state.lock().unwrap();
        if let Some(batch) = state.pending.pop_front() {
            state.open.extend(batch);
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct MockWindow {
    title: String,
    desktop: Arc<Mutex<DesktopState>>,
    events: Arc<Mutex<Vec<Event>>>,
}

impl std::fmt::Debug for MockWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockWindow").field("title", &self.title).finish()
    }
}

impl MockWindow {
    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl WindowImpl for MockWindow {
    fn read_text(&self) -> Result<String, AutomationError> {
        let mut state = self.desktop.lock().unwrap();
        let budget_spent = match state.read_budget.get_mut(&self.title) {
            Some(0) => true,
            Some(left) => {
                *left -= 1;
                false
            }
            None => false,
        };
        if budget_spent {
            state.read_budget.remove(&self.title);
        }
        if budget_spent || state.unreadable.contains(&self.title) {
            return Err(AutomationError::PlatformError(format!(
                "element for '{}' is no longer available",
                self.title
            )));
        }
        Ok(self.title.clone())
    }

    fn focus(&self) -> Result<(), AutomationError> {
        if self.desktop.lock().unwrap().unfocusable.contains(&self.title) {
            return Err(AutomationError::PlatformError(format!(
                "'{}' refused focus",
                self.title
            )));
        }
        self.record(Event::Focus(self.title.clone()));
        Ok(())
    }

    fn maximize(&self) -> Result<(), AutomationError> {
        self.record(Event::Maximize(self.title.clone()));
        Ok(())
    }

    fn read_content(&self) -> Result<String, AutomationError> {
        Ok(self
            .desktop
            .lock()
            .unwrap()
            .content
            .get(&self.title)
            .cloned()
            .unwrap_or_default())
    }

    fn type_text(&self, text: &str) -> Result<(), AutomationError> {
        self.record(Event::Typed(self.title.clone(), text.to_string()));
        Ok(())
    }

    fn press_key(&self, key: &str) -> Result<(), AutomationError> {
        self.record(Event::Key(self.title.clone(), key.to_string()));
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn WindowImpl> {
        Box::new(self.clone())
    }
}

/// A detached window handle for building controllers directly.
pub fn mock_window(title: &str) -> Window {
    Window::new(Box::new(MockWindow {
        title: title.to_string(),
        desktop: Arc::new(Mutex::new(DesktopState::default())),
        events: Arc::new(Mutex::new(Vec::new())),
    }))
}
