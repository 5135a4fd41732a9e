//! Growable prefix window.

use crate::config::BrowseConfig;

/// Observable window state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStatus {
    /// More filtered records exist beyond the window.
    Partial,
    /// The window covers the whole filtered sequence.
    Complete,
}

impl WindowStatus {
    pub fn of<T>(filtered: &[T], page_size: usize) -> Self {
        if has_more(filtered, page_size) {
            Self::Partial
        } else {
            Self::Complete
        }
    }
}

/// Returns the prefix of length `min(page_size, filtered.len())`.
pub fn visible_window<T>(filtered: &[T], page_size: usize) -> &[T] {
    &filtered[..page_size.min(filtered.len())]
}

/// Returns whether records remain beyond the window.
pub fn has_more<T>(filtered: &[T], page_size: usize) -> bool {
    page_size < filtered.len()
}

/// Mutable window size for one browsing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationWindow {
    initial_size: usize,
    step: usize,
    page_size: usize,
}

impl PaginationWindow {
    pub fn new(config: &BrowseConfig) -> Self {
        Self {
            initial_size: config.initial_page_size,
            step: config.load_more_step,
            page_size: config.initial_page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn initial_size(&self) -> usize {
        self.initial_size
    }

    /// Grows the window by one step.
    ///
    /// Growing past the end is allowed; [`visible_window`] clamps it.
    pub fn load_more(&mut self) {
        self.page_size = self.page_size.saturating_add(self.step);
    }

    /// Restores the initial size. Called on every filter change.
    pub fn reset(&mut self) {
        self.page_size = self.initial_size;
    }

    pub fn visible<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        visible_window(filtered, self.page_size)
    }

    pub fn status<T>(&self, filtered: &[T]) -> WindowStatus {
        WindowStatus::of(filtered, self.page_size)
    }
}

impl Default for PaginationWindow {
    fn default() -> Self {
        Self::new(&BrowseConfig::default())
    }
}
