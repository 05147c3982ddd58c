use crate::platforms::AutomationEngine;
use crate::title::WindowTitle;
use crate::{AutomationError, Window};
use tracing::debug;

/// Returns every live window whose text contains at least one of `titles`.
///
/// Enumeration order is preserved. A window whose text cannot be read aborts
/// the whole scan with [`AutomationError::WindowAccess`].
pub fn scan_windows(
    engine: &dyn AutomationEngine,
    titles: &[WindowTitle],
) -> Result<Vec<Window>, AutomationError> {
    let mut matched = Vec::new();

    for window in engine.enumerate_windows()? {
        let text = window.text()?;
        if let Some(title) = WindowTitle::first_match(titles, &text) {
            debug!("window '{}' matched tag '{}'", text, title);
            matched.push(window);
        }
    }

    Ok(matched)
}

/// The first live window carrying `title`, if any.
pub fn first_window(
    engine: &dyn AutomationEngine,
    title: WindowTitle,
) -> Result<Option<Window>, AutomationError> {
    Ok(scan_windows(engine, &[title])?.into_iter().next())
}
