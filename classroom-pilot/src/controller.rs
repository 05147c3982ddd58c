//! Per-kind window controllers and the factory that maps windows onto them.

use crate::chat::ChatTranscript;
use crate::config::{Coordinate, TutorProfile};
use crate::errors::TitleParseError;
use crate::identity::{classify, ControllerIdentity, ControllerKind};
use crate::platforms::AutomationEngine;
use crate::{AutomationError, Window};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const ENTER_KEY: &str = "{enter}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEditorState {
    pub language: String,
    pub index: u32,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordProcessorState {
    pub index: u32,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenshareState {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct ChatController {
    window: Window,
    tutor: TutorProfile,
}

impl ChatController {
    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn scrape(&self) -> Result<ChatTranscript, AutomationError> {
        let content = self.window.content()?;
        Ok(ChatTranscript::parse(&content, &self.tutor))
    }

    /// Types `message` into the chat box at `text_box` and submits it.
    #[instrument(level = "debug", skip(self, engine, message))]
    pub fn send_message(
        &self,
        engine: &dyn AutomationEngine,
        text_box: Coordinate,
        message: &str,
    ) -> Result<(), AutomationError> {
        self.window.focus()?;
        engine.move_pointer(text_box)?;
        engine.click(text_box)?;
        self.window.type_text(message)?;
        self.window.press_key(ENTER_KEY)
    }
}

#[derive(Debug, Clone)]
pub struct CodeEditorController {
    window: Window,
    language: String,
    index: u32,
}

impl CodeEditorController {
    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn scrape(&self) -> Result<CodeEditorState, AutomationError> {
        Ok(CodeEditorState {
            language: self.language.clone(),
            index: self.index,
            content: self.window.content()?,
        })
    }

    pub fn send_text(&self, text: &str) -> Result<(), AutomationError> {
        self.window.focus()?;
        self.window.type_text(text)
    }
}

#[derive(Debug, Clone)]
pub struct ScreenshareController {
    window: Window,
}

impl ScreenshareController {
    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn scrape(&self) -> Result<ScreenshareState, AutomationError> {
        Ok(ScreenshareState {
            title: self.window.text()?,
            content: self.window.content()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct WordProcessorController {
    window: Window,
    index: u32,
}

impl WordProcessorController {
    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn scrape(&self) -> Result<WordProcessorState, AutomationError> {
        Ok(WordProcessorState {
            index: self.index,
            content: self.window.content()?,
        })
    }
}

#[derive(Debug, Clone)]
pub enum WindowController {
    Chat(ChatController),
    CodeEditor(CodeEditorController),
    Screenshare(ScreenshareController),
    WordProcessor(WordProcessorController),
}

impl WindowController {
    pub fn identity(&self) -> ControllerIdentity {
        match self {
            WindowController::Chat(_) => ControllerIdentity::Chat,
            WindowController::CodeEditor(c) => ControllerIdentity::CodeEditor {
                language: c.language.clone(),
                index: c.index,
            },
            WindowController::Screenshare(_) => ControllerIdentity::Screenshare,
            WindowController::WordProcessor(c) => ControllerIdentity::WordProcessor { index: c.index },
        }
    }

    pub fn kind(&self) -> ControllerKind {
        match self {
            WindowController::Chat(_) => ControllerKind::Chat,
            WindowController::CodeEditor(_) => ControllerKind::CodeEditor,
            WindowController::Screenshare(_) => ControllerKind::Screenshare,
            WindowController::WordProcessor(_) => ControllerKind::WordProcessor,
        }
    }

    pub fn window(&self) -> &Window {
        match self {
            WindowController::Chat(c) => c.window(),
            WindowController::CodeEditor(c) => c.window(),
            WindowController::Screenshare(c) => c.window(),
            WindowController::WordProcessor(c) => c.window(),
        }
    }

    pub fn maximize_window(&self) -> Result<(), AutomationError> {
        self.window().maximize()
    }
}

/// Outcome of mapping one live window.
#[derive(Debug)]
pub enum WindowMapping {
    Controller(WindowController),
    /// No dispatch tag matched; not every window is ours.
    Unmapped { text: String },
    /// A tag matched but the title's sub-key was malformed.
    Malformed { text: String, error: TitleParseError },
}

#[derive(Debug, Clone)]
pub struct ControllerFactory {
    tutor: TutorProfile,
}

impl ControllerFactory {
    pub fn new(tutor: TutorProfile) -> Self {
        Self { tutor }
    }

    /// Reads the window's text and picks a controller for it. Only a failed
    /// read is an error; unknown and malformed titles are reported as such.
    pub fn map_window(&self, window: Window) -> Result<WindowMapping, AutomationError> {
        let text = window.text()?;
        let mapping = match classify(&text) {
            Ok(Some(identity)) => {
                debug!("window '{}' classified as {:?}", text, identity);
                WindowMapping::Controller(self.build(identity, window))
            }
            Ok(None) => WindowMapping::Unmapped { text },
            Err(error) => WindowMapping::Malformed { text, error },
        };
        Ok(mapping)
    }

    pub fn build(&self, identity: ControllerIdentity, window: Window) -> WindowController {
        match identity {
            ControllerIdentity::Chat => WindowController::Chat(ChatController {
                window,
                tutor: self.tutor.clone(),
            }),
            ControllerIdentity::CodeEditor { language, index } => {
                WindowController::CodeEditor(CodeEditorController {
                    window,
                    language,
                    index,
                })
            }
            ControllerIdentity::Screenshare => {
                WindowController::Screenshare(ScreenshareController { window })
            }
            ControllerIdentity::WordProcessor { index } => {
                WindowController::WordProcessor(WordProcessorController { window, index })
            }
        }
    }
}
