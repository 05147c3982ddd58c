//! Window discovery and controller routing for a multi-window tutoring classroom
//!
//! The classroom client spreads a session over many top-level windows (public
//! chat, code editors, word processors, screenshare). This crate pops all of
//! them out, classifies each by its title, and hands back typed controllers
//! that scrape or type into the window they wrap.
//!
//! ```no_run
//! use classroom_pilot::{create_engine, ControllerOptions, WindowManager};
//! # fn options() -> ControllerOptions { unimplemented!() }
//! let mut manager = WindowManager::new(create_engine()?, options())?;
//! for editor in manager.scrape_code_editors()? {
//!     println!("{} #{}: {}", editor.language, editor.index, editor.content);
//! }
//! # Ok::<(), classroom_pilot::AutomationError>(())
//! ```

pub mod chat;
pub mod config;
pub mod controller;
pub mod errors;
pub mod identity;
pub mod manager;
pub mod platforms;
pub mod registry;
pub mod scanner;
pub mod stabilizer;
#[cfg(test)]
mod tests;
pub mod title;
pub mod window;

pub use chat::{ChatMessage, ChatRole, ChatTranscript};
pub use config::{ComponentCoordinates, ControllerOptions, Coordinate, TimingOptions, TutorProfile};
pub use controller::{
    ChatController, CodeEditorController, CodeEditorState, ControllerFactory,
    ScreenshareController, ScreenshareState, WindowController, WindowMapping,
    WordProcessorController, WordProcessorState,
};
pub use errors::{AutomationError, TitleParseError};
pub use identity::{classify, ControllerIdentity, ControllerKind};
pub use manager::WindowManager;
pub use platforms::{create_engine, AutomationEngine};
pub use registry::ControllerRegistry;
pub use scanner::{first_window, scan_windows};
pub use stabilizer::{StabilizationState, Stabilizer, WindowOpener};
pub use title::{WindowTitle, DEFAULT_WINDOW_TITLES};
pub use window::{Window, WindowImpl};
