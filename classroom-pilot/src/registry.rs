use crate::controller::{
    ChatController, CodeEditorController, ScreenshareController, WindowController,
    WordProcessorController,
};
use crate::identity::{ControllerIdentity, ControllerKind};

/// Controllers in discovery order, at most one per identity.
#[derive(Debug, Clone, Default)]
pub struct ControllerRegistry {
    controllers: Vec<WindowController>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `controller` unless one with the same identity is already
    /// registered. Returns whether it was added.
    pub fn insert(&mut self, controller: WindowController) -> bool {
        if self.contains(&controller.identity()) {
            return false;
        }
        self.controllers.push(controller);
        true
    }

    pub fn contains(&self, identity: &ControllerIdentity) -> bool {
        self.controllers.iter().any(|c| &c.identity() == identity)
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowController> {
        self.controllers.iter()
    }

    pub fn identities(&self) -> Vec<ControllerIdentity> {
        self.controllers.iter().map(|c| c.identity()).collect()
    }

    pub fn controllers_of_kind(&self, kind: ControllerKind) -> Vec<&WindowController> {
        self.controllers.iter().filter(|c| c.kind() == kind).collect()
    }

    pub fn chat(&self) -> Option<&ChatController> {
        self.controllers.iter().find_map(|c| match c {
            WindowController::Chat(chat) => Some(chat),
            _ => None,
        })
    }

    pub fn screenshare(&self) -> Option<&ScreenshareController> {
        self.controllers.iter().find_map(|c| match c {
            WindowController::Screenshare(screenshare) => Some(screenshare),
            _ => None,
        })
    }

    pub fn code_editors(&self) -> impl Iterator<Item = &CodeEditorController> {
        self.controllers.iter().filter_map(|c| match c {
            WindowController::CodeEditor(editor) => Some(editor),
            _ => None,
        })
    }

    pub fn code_editor(&self, language: &str, index: u32) -> Option<&CodeEditorController> {
        self.code_editors()
            .find(|e| e.language() == language && e.index() == index)
    }

    pub fn word_processors(&self) -> impl Iterator<Item = &WordProcessorController> {
        self.controllers.iter().filter_map(|c| match c {
            WindowController::WordProcessor(processor) => Some(processor),
            _ => None,
        })
    }

    pub fn word_processor(&self, index: u32) -> Option<&WordProcessorController> {
        self.word_processors().find(|p| p.index() == index)
    }
}
