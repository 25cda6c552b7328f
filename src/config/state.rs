// src/config/state.rs
use crate::model::{Filters, SortMode};

/// The one writable view record: criteria and page.
///
/// `draft` is what the sidebar controls edit. Only `committed` drives the
/// pipeline, and it changes only through the transitions below, each of
/// which sends the page back to 1.
#[derive(Clone, Debug)]
pub struct ViewState {
    pub draft: Filters,
    committed: Filters,
    page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            draft: Filters::default(),
            committed: Filters::default(),
            page: 1,
        }
    }
}

impl ViewState {
    pub fn committed(&self) -> &Filters { &self.committed }
    pub fn page(&self) -> usize { self.page }

    /// Draft → committed.
    pub fn apply(&mut self) {
        self.committed = self.draft.clone();
        self.page = 1;
    }

    /// Clear draft and committed together.
    pub fn reset(&mut self) {
        self.draft = Filters::default();
        self.committed = Filters::default();
        self.page = 1;
    }

    /// Sort takes effect immediately, in both copies.
    pub fn set_sort(&mut self, mode: SortMode) {
        if self.committed.sort == mode && self.draft.sort == mode {
            return;
        }
        self.draft.sort = mode;
        self.committed.sort = mode;
        self.page = 1;
    }

    pub fn has_pending_edits(&self) -> bool {
        self.draft != self.committed
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.go_to(self.page + 1, total_pages);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Jump to `page`, clamped into `1..=total_pages`.
    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }
}
