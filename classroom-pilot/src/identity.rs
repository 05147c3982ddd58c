//! Turns free-text window titles into typed controller identities.

use crate::errors::TitleParseError;
use crate::title::{WindowTitle, CODE_EDITOR_TITLES};
use serde::{Deserialize, Serialize};
use std::fmt;

const EDITOR_MARKER: &str = "editor";
const WORD_PROCESSOR_PREFIX: &str = "word processor";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerKind {
    Chat,
    CodeEditor,
    Screenshare,
    WordProcessor,
}

/// The registry key of a controller. Two controllers with equal identities
/// refer to the same logical window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerIdentity {
    Chat,
    CodeEditor { language: String, index: u32 },
    Screenshare,
    WordProcessor { index: u32 },
}

impl ControllerIdentity {
    pub fn kind(&self) -> ControllerKind {
        match self {
            ControllerIdentity::Chat => ControllerKind::Chat,
            ControllerIdentity::CodeEditor { .. } => ControllerKind::CodeEditor,
            ControllerIdentity::Screenshare => ControllerKind::Screenshare,
            ControllerIdentity::WordProcessor { .. } => ControllerKind::WordProcessor,
        }
    }
}

impl fmt::Display for ControllerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerIdentity::Chat => write!(f, "{}", WindowTitle::PublicChat),
            ControllerIdentity::CodeEditor { language, index } => {
                write!(f, "{language} Editor {index}")
            }
            ControllerIdentity::Screenshare => write!(f, "{}", WindowTitle::Screenshare),
            ControllerIdentity::WordProcessor { index } => write!(f, "Word Processor {index}"),
        }
    }
}

/// Decides which controller, if any, a window with this text maps to.
///
/// Tags are tried in strict priority order: public chat, then each
/// language-specific editor, then screenshare, then word processor. The first
/// match wins. `Ok(None)` means the window is not one we control.
pub fn classify(window_text: &str) -> Result<Option<ControllerIdentity>, TitleParseError> {
    if WindowTitle::PublicChat.matches(window_text) {
        return Ok(Some(ControllerIdentity::Chat));
    }

    if WindowTitle::first_match(CODE_EDITOR_TITLES, window_text).is_some() {
        let (language, index) = parse_code_editor_title(window_text)?;
        return Ok(Some(ControllerIdentity::CodeEditor { language, index }));
    }

    if WindowTitle::Screenshare.matches(window_text) {
        return Ok(Some(ControllerIdentity::Screenshare));
    }

    if WindowTitle::WordProcessor.matches(window_text) {
        let index = parse_word_processor_title(window_text)?;
        return Ok(Some(ControllerIdentity::WordProcessor { index }));
    }

    Ok(None)
}

/// Splits `"<language> Editor <n> ..."` into the trimmed language label and `n`.
pub fn parse_code_editor_title(window_text: &str) -> Result<(String, u32), TitleParseError> {
    // ASCII lowercasing keeps byte offsets aligned with the original text
    let lowered = window_text.to_ascii_lowercase();
    // the marker belongs to the language tag, not to any earlier "editor" in the title
    let search_from = WindowTitle::first_match(CODE_EDITOR_TITLES, window_text)
        .and_then(|tag| lowered.find(&tag.as_str().to_ascii_lowercase()))
        .unwrap_or(0);
    let marker_at = lowered[search_from..]
        .find(EDITOR_MARKER)
        .map(|at| search_from + at)
        .ok_or_else(|| TitleParseError::new(window_text, "missing 'Editor' marker"))?;

    let language = window_text[..marker_at].trim();
    if language.is_empty() {
        return Err(TitleParseError::new(
            window_text,
            "missing programming language before 'Editor'",
        ));
    }

    let after_marker = &window_text[marker_at + EDITOR_MARKER.len()..];
    let index = parse_leading_index(window_text, after_marker)?;
    Ok((language.to_string(), index))
}

/// Extracts `n` from `"word processor<n>"` or `"Word Processor <n> ..."`.
pub fn parse_word_processor_title(window_text: &str) -> Result<u32, TitleParseError> {
    let trimmed = window_text.trim();
    if !trimmed
        .to_ascii_lowercase()
        .starts_with(WORD_PROCESSOR_PREFIX)
    {
        return Err(TitleParseError::new(
            window_text,
            "expected title to start with 'word processor'",
        ));
    }

    parse_leading_index(window_text, &trimmed[WORD_PROCESSOR_PREFIX.len()..])
}

fn parse_leading_index(window_text: &str, rest: &str) -> Result<u32, TitleParseError> {
    let token = rest
        .split_whitespace()
        .next()
        .ok_or_else(|| TitleParseError::new(window_text, "missing instance number"))?;

    token.parse::<u32>().map_err(|e| {
        TitleParseError::new(
            window_text,
            format!("instance number '{token}' is not an integer: {e}"),
        )
    })
}
