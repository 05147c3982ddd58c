//! Session-level facade over discovery, classification and the registry.
//!
//! Every lookup re-runs the full open cycle first. Window handles belong to
//! the classroom client and go stale as soon as a window closes, so nothing
//! is cached between calls.

use crate::chat::ChatTranscript;
use crate::config::{ControllerOptions, Coordinate};
use crate::controller::{
    ChatController, CodeEditorController, CodeEditorState, ControllerFactory,
    ScreenshareController, ScreenshareState, WindowMapping, WordProcessorController,
    WordProcessorState,
};
use crate::platforms::AutomationEngine;
use crate::registry::ControllerRegistry;
use crate::scanner::first_window;
use crate::stabilizer::WindowOpener;
use crate::title::{WindowTitle, DEFAULT_WINDOW_TITLES};
use crate::AutomationError;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

pub struct WindowManager {
    engine: Arc<dyn AutomationEngine>,
    options: ControllerOptions,
    factory: ControllerFactory,
    registry: ControllerRegistry,
}

impl WindowManager {
    pub fn new(
        engine: Arc<dyn AutomationEngine>,
        options: ControllerOptions,
    ) -> Result<Self, AutomationError> {
        options.validate()?;
        let factory = ControllerFactory::new(options.tutor_profile.clone());
        Ok(Self {
            engine,
            options,
            factory,
            registry: ControllerRegistry::new(),
        })
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Controllers found by the most recent successful open cycle.
    pub fn registry(&self) -> &ControllerRegistry {
        &self.registry
    }

    /// Opens every secondary window and rebuilds the controller registry.
    ///
    /// The new registry only replaces the old one once the whole cycle has
    /// succeeded, so a window access failure leaves the previous registry
    /// untouched. Windows with unknown or malformed titles are logged and
    /// skipped.
    #[instrument(level = "debug", skip(self))]
    pub fn open_all_windows(&mut self) -> Result<(), AutomationError> {
        let start = Instant::now();
        info!("Started opening all windows");

        let windows = WindowOpener::new(
            self.engine.as_ref(),
            self.options.coords.public_chat_pop_out,
            &self.options.timing,
            DEFAULT_WINDOW_TITLES,
        )
        .open_all_windows()?;

        let mut refreshed = ControllerRegistry::new();
        let mut discovered = Vec::new();
        for window in windows {
            match self.factory.map_window(window)? {
                WindowMapping::Controller(controller) => {
                    let identity = controller.identity();
                    if refreshed.contains(&identity) {
                        debug!("skipping duplicate window for {}", identity);
                        continue;
                    }
                    if !self.registry.contains(&identity) {
                        discovered.push(identity);
                    }
                    refreshed.insert(controller);
                }
                WindowMapping::Unmapped { text } => {
                    warn!("No controller exists for Window: '{}'", text);
                }
                WindowMapping::Malformed { text, error } => {
                    warn!("No controller mapped for Window: '{}' ({})", text, error);
                }
            }
        }

        self.registry = refreshed;

        // after the swap, so a failed cycle maximizes nothing
        for controller in self.registry.iter() {
            let identity = controller.identity();
            if !discovered.contains(&identity) {
                continue;
            }
            if let Err(e) = controller.maximize_window() {
                warn!("Failed to maximize window for {}: {}", identity, e);
            }
        }

        info!(
            controllers = self.registry.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Finished opening all windows"
        );
        Ok(())
    }

    pub fn find_public_chat_window_controller(
        &mut self,
    ) -> Result<Option<&ChatController>, AutomationError> {
        self.open_all_windows()?;
        Ok(self.registry.chat())
    }

    pub fn find_screenshare_window_controller(
        &mut self,
    ) -> Result<Option<&ScreenshareController>, AutomationError> {
        self.open_all_windows()?;
        Ok(self.registry.screenshare())
    }

    pub fn find_code_editor_window_controller(
        &mut self,
        language: &str,
        index: u32,
    ) -> Result<Option<&CodeEditorController>, AutomationError> {
        self.open_all_windows()?;
        Ok(self.registry.code_editor(language, index))
    }

    pub fn find_word_processor_window_controller(
        &mut self,
        index: u32,
    ) -> Result<Option<&WordProcessorController>, AutomationError> {
        self.open_all_windows()?;
        Ok(self.registry.word_processor(index))
    }

    #[instrument(skip(self))]
    pub fn scrape_public_chat(&mut self) -> Result<ChatTranscript, AutomationError> {
        self.find_public_chat_window_controller()?
            .ok_or_else(chat_not_found)?
            .scrape()
    }

    #[instrument(skip(self, message))]
    pub fn send_message(&mut self, message: &str) -> Result<(), AutomationError> {
        self.open_all_windows()?;
        let controller = self.registry.chat().ok_or_else(chat_not_found)?;
        controller.send_message(
            self.engine.as_ref(),
            self.options.coords.public_chat_text_box,
            message,
        )
    }

    #[instrument(skip(self))]
    pub fn scrape_code_editors(&mut self) -> Result<Vec<CodeEditorState>, AutomationError> {
        self.open_all_windows()?;
        self.registry.code_editors().map(|e| e.scrape()).collect()
    }

    /// Types `text` into the given editor. Returns `false` when no such
    /// editor is open.
    #[instrument(skip(self, text))]
    pub fn send_text_to_code_editor(
        &mut self,
        language: &str,
        index: u32,
        text: &str,
    ) -> Result<bool, AutomationError> {
        let start = Instant::now();
        let controller = self.find_code_editor_window_controller(language, index)?;
        debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Finished finding code editor window controller"
        );

        match controller {
            Some(controller) => {
                controller.send_text(text)?;
                Ok(true)
            }
            None => {
                warn!("Cannot find code editor window controller for {language} Editor {index}");
                Ok(false)
            }
        }
    }

    #[instrument(skip(self))]
    pub fn scrape_word_processors(&mut self) -> Result<Vec<WordProcessorState>, AutomationError> {
        self.open_all_windows()?;
        self.registry.word_processors().map(|p| p.scrape()).collect()
    }

    #[instrument(skip(self))]
    pub fn scrape_screenshare(&mut self) -> Result<Option<ScreenshareState>, AutomationError> {
        match self.find_screenshare_window_controller()? {
            Some(controller) => controller.scrape().map(Some),
            None => {
                info!("Cannot find {} window", WindowTitle::Screenshare);
                Ok(None)
            }
        }
    }

    pub fn is_screenshare_open(&mut self) -> Result<bool, AutomationError> {
        Ok(self.find_screenshare_window_controller()?.is_some())
    }

    /// Clicks through the classroom's "insert code editor" menu.
    #[instrument(skip(self))]
    pub fn insert_code_editor(&self) -> Result<(), AutomationError> {
        let path = &self.options.coords.insert_code_editor_path;
        if path.is_empty() {
            return Err(AutomationError::InvalidArgument(
                "coords.insert_code_editor_path is not configured".to_string(),
            ));
        }

        self.focus_classroom()?;
        for step in path {
            self.move_and_click(*step)?;
        }
        Ok(())
    }

    /// Presses the end-session button and confirms.
    #[instrument(skip(self))]
    pub fn end_session(&self) -> Result<(), AutomationError> {
        self.focus_classroom()?;
        self.move_and_click(self.options.coords.end_session_button)?;
        self.move_and_click(self.options.coords.confirm_end_session_button)?;
        info!("Session ended");
        Ok(())
    }

    fn focus_classroom(&self) -> Result<(), AutomationError> {
        if let Some(classroom) = first_window(self.engine.as_ref(), WindowTitle::Classroom)? {
            classroom.focus()?;
        }
        Ok(())
    }

    fn move_and_click(&self, at: Coordinate) -> Result<(), AutomationError> {
        let settle = self.options.timing.action_settle();
        self.engine.move_pointer(at)?;
        std::thread::sleep(settle);
        self.engine.click(at)?;
        std::thread::sleep(settle);
        Ok(())
    }
}

fn chat_not_found() -> AutomationError {
    AutomationError::ControllerNotFound(format!("Cannot find {} window", WindowTitle::PublicChat))
}
