//! Opens the classroom's secondary windows until the set of open windows
//! stops growing.
//!
//! Windows appear asynchronously and the only thing we can observe is how
//! many matching windows exist, so convergence means "the count did not
//! change for `threshold` consecutive polls". Once everything is open the
//! pop-out click is a no-op and the loop still pays the full threshold.

use crate::config::{Coordinate, TimingOptions};
use crate::platforms::AutomationEngine;
use crate::scanner::{first_window, scan_windows};
use crate::title::WindowTitle;
use crate::{AutomationError, Window};
use std::time::Instant;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StabilizationState {
    /// The last poll saw a different count than the one before it.
    Growing,
    /// This many consecutive polls have seen the same count.
    Stalling(u32),
    Converged,
}

/// Pure convergence tracker over observed window counts.
#[derive(Debug, Clone)]
pub struct Stabilizer {
    threshold: u32,
    last_count: usize,
    state: StabilizationState,
}

impl Stabilizer {
    pub fn new(threshold: u32, initial_count: usize) -> Self {
        let state = if threshold == 0 {
            StabilizationState::Converged
        } else {
            StabilizationState::Growing
        };
        Self {
            threshold,
            last_count: initial_count,
            state,
        }
    }

    pub fn state(&self) -> StabilizationState {
        self.state
    }

    pub fn is_converged(&self) -> bool {
        self.state == StabilizationState::Converged
    }

    /// Feeds one poll result and returns the new state. Converged is terminal.
    pub fn observe(&mut self, count: usize) -> StabilizationState {
        if self.is_converged() {
            return self.state;
        }

        let stalls = if count == self.last_count {
            match self.state {
                StabilizationState::Stalling(n) => n + 1,
                _ => 1,
            }
        } else {
            0
        };
        self.last_count = count;

        self.state = if stalls == 0 {
            StabilizationState::Growing
        } else if stalls >= self.threshold {
            StabilizationState::Converged
        } else {
            StabilizationState::Stalling(stalls)
        };
        self.state
    }
}

/// Drives the pop-out button until the matched window set is stable.
pub struct WindowOpener<'a> {
    engine: &'a dyn AutomationEngine,
    pop_out_button: Coordinate,
    timing: &'a TimingOptions,
    titles: &'a [WindowTitle],
}

impl<'a> WindowOpener<'a> {
    pub fn new(
        engine: &'a dyn AutomationEngine,
        pop_out_button: Coordinate,
        timing: &'a TimingOptions,
        titles: &'a [WindowTitle],
    ) -> Self {
        Self {
            engine,
            pop_out_button,
            timing,
            titles,
        }
    }

    /// Focuses the classroom, then clicks the pop-out button and re-scans
    /// until the count of matched windows converges. Returns the final scan.
    #[instrument(level = "debug", skip(self))]
    pub fn open_all_windows(&self) -> Result<Vec<Window>, AutomationError> {
        let start = Instant::now();

        // pop-out coordinates are only meaningful with the classroom in front
        if let Some(classroom) = first_window(self.engine, WindowTitle::Classroom)? {
            classroom.focus().map_err(|e| {
                AutomationError::WindowAccess(format!("Failed to focus classroom window: {e}"))
            })?;
        }

        let mut windows = scan_windows(self.engine, self.titles)?;
        let mut stabilizer = Stabilizer::new(self.timing.stall_threshold, windows.len());
        let mut triggers = 0u32;

        while !stabilizer.is_converged() {
            self.trigger_next_window()?;
            windows = scan_windows(self.engine, self.titles)?;
            triggers += 1;

            let state = stabilizer.observe(windows.len());
            debug!(count = windows.len(), ?state, "polled open windows");
        }

        info!(
            windows = windows.len(),
            triggers,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "window set converged"
        );
        Ok(windows)
    }

    fn trigger_next_window(&self) -> Result<(), AutomationError> {
        self.engine.move_pointer(self.pop_out_button)?;
        self.engine.click(self.pop_out_button)?;
        std::thread::sleep(self.timing.open_settle());
        Ok(())
    }
}
