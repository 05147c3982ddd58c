//! The closed catalog of window-title tags the classroom is known to produce.
//!
//! A tag matches a window when the window's displayed text contains the tag,
//! compared case-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowTitle {
    Classroom,
    PublicChat,
    Editor,
    ServerConnectionError,
    Whiteboard,
    GraphingCalculator,
    WordProcessor,
    CLikeEditor,
    CssEditor,
    GoEditor,
    HtmlEditor,
    JavaEditor,
    JavaScriptEditor,
    MathematicaEditor,
    PhpEditor,
    PythonEditor,
    REditor,
    RubyEditor,
    SqlEditor,
    XmlEditor,
    Screenshare,
}

/// Every tag, in the order a default scan checks them.
pub const DEFAULT_WINDOW_TITLES: &[WindowTitle] = &[
    WindowTitle::Classroom,
    WindowTitle::PublicChat,
    WindowTitle::Editor,
    WindowTitle::ServerConnectionError,
    WindowTitle::Whiteboard,
    WindowTitle::GraphingCalculator,
    WindowTitle::WordProcessor,
    WindowTitle::CLikeEditor,
    WindowTitle::CssEditor,
    WindowTitle::GoEditor,
    WindowTitle::HtmlEditor,
    WindowTitle::JavaEditor,
    WindowTitle::JavaScriptEditor,
    WindowTitle::MathematicaEditor,
    WindowTitle::PhpEditor,
    WindowTitle::PythonEditor,
    WindowTitle::REditor,
    WindowTitle::RubyEditor,
    WindowTitle::SqlEditor,
    WindowTitle::XmlEditor,
    WindowTitle::Screenshare,
];

/// Language-specific editor tags, in dispatch order.
pub const CODE_EDITOR_TITLES: &[WindowTitle] = &[
    WindowTitle::CLikeEditor,
    WindowTitle::CssEditor,
    WindowTitle::GoEditor,
    WindowTitle::HtmlEditor,
    WindowTitle::JavaEditor,
    WindowTitle::JavaScriptEditor,
    WindowTitle::MathematicaEditor,
    WindowTitle::PhpEditor,
    WindowTitle::PythonEditor,
    WindowTitle::REditor,
    WindowTitle::RubyEditor,
    WindowTitle::SqlEditor,
    WindowTitle::XmlEditor,
];

impl WindowTitle {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowTitle::Classroom => "Classroom",
            WindowTitle::PublicChat => "Public Chat",
            WindowTitle::Editor => "Editor",
            WindowTitle::ServerConnectionError => "Server Connection Error",
            WindowTitle::Whiteboard => "Whiteboard",
            WindowTitle::GraphingCalculator => "Graphing Calculator",
            WindowTitle::WordProcessor => "word processor",
            WindowTitle::CLikeEditor => "C-Like Editor",
            WindowTitle::CssEditor => "CSS Editor",
            WindowTitle::GoEditor => "Go Editor",
            WindowTitle::HtmlEditor => "HTML Editor",
            WindowTitle::JavaEditor => "Java Editor",
            WindowTitle::JavaScriptEditor => "JavaScript Editor",
            WindowTitle::MathematicaEditor => "Mathematica Editor",
            WindowTitle::PhpEditor => "PHP Editor",
            WindowTitle::PythonEditor => "Python Editor",
            WindowTitle::REditor => "R Editor",
            WindowTitle::RubyEditor => "Ruby Editor",
            WindowTitle::SqlEditor => "SQL Editor",
            WindowTitle::XmlEditor => "XML Editor",
            WindowTitle::Screenshare => "Screenshare",
        }
    }

    /// Case-insensitive substring match against a window's displayed text.
    pub fn matches(&self, window_text: &str) -> bool {
        window_text
            .to_lowercase()
            .contains(&self.as_str().to_lowercase())
    }

    /// Returns the first tag in `titles` that matches `window_text`.
    pub fn first_match(titles: &[WindowTitle], window_text: &str) -> Option<WindowTitle> {
        let lowered = window_text.to_lowercase();
        titles
            .iter()
            .copied()
            .find(|t| lowered.contains(&t.as_str().to_lowercase()))
    }
}

impl fmt::Display for WindowTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
