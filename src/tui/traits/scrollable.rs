//! Scrollable trait for components with scrollable content

use crate::tui::scroll::ScrollState;

/// Trait for components with scrollable content
///
/// Components own their `ScrollState` and expose it here; navigation
/// methods delegate to it by default.
pub trait Scrollable {
    fn scroll_state(&self) -> &ScrollState;

    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    fn scroll_up(&mut self) {
        self.scroll_state_mut().scroll_up();
    }

    fn scroll_down(&mut self) {
        self.scroll_state_mut().scroll_down();
    }

    fn scroll_to_top(&mut self) {
        self.scroll_state_mut().scroll_to_top();
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_state_mut().scroll_to_bottom();
    }

    fn page_up(&mut self) {
        self.scroll_state_mut().page_up();
    }

    fn page_down(&mut self) {
        self.scroll_state_mut().page_down();
    }

    /// Get the visible range of items (start_index, end_index)
    fn visible_range(&self) -> (usize, usize) {
        self.scroll_state().visible_range()
    }

    /// Check if scrollbar is needed (content exceeds viewport)
    fn needs_scrollbar(&self) -> bool {
        self.scroll_state().needs_scrollbar()
    }

    fn scroll_offset(&self) -> usize {
        self.scroll_state().offset()
    }

    /// Update content and viewport dimensions
    ///
    /// Call this each render frame with current sizes.
    fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.scroll_state_mut().update_dimensions(total, viewport);
    }
}
