// Scroll state shared by the TUI panels
//
// Each panel owns a ScrollState; App only routes input and renders.
// - Auto-follow keeps streaming content (logs) pinned to the bottom
// - Manual mode leaves the offset alone when content grows (gallery, detail)

/// Scroll state for a single panel
///
/// Units are whatever the panel scrolls by: lines for text, tile rows for
/// the gallery.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Index of the first visible unit
    offset: usize,

    /// Total number of units in content
    total: usize,

    /// Number of units visible in viewport
    viewport: usize,

    /// Keep the view at the bottom as content grows.
    /// Scrolling up disables it; reaching the bottom re-enables it.
    pub auto_follow: bool,
}

impl ScrollState {
    /// Create new scroll state with auto-follow enabled
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
        }
    }

    /// Create scroll state with auto-follow disabled (manual scroll)
    pub fn manual() -> Self {
        Self {
            auto_follow: false,
            ..Self::new()
        }
    }

    /// Update content and viewport dimensions (call each render frame)
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;

        if self.auto_follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    pub fn scroll_up(&mut self) {
        if self.offset > 0 {
            self.offset -= 1;
            self.auto_follow = false;
        }
    }

    pub fn scroll_down(&mut self) {
        if self.offset < self.max_offset() {
            self.offset += 1;
        }
        self.follow_if_at_bottom();
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
        self.auto_follow = false;
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
        self.follow_if_at_bottom();
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_follow = false;
    }

    /// Jump to bottom (and enable auto-follow)
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_follow = true;
    }

    /// Move just enough to bring `index` into view
    pub fn ensure_visible(&mut self, index: usize) {
        if index < self.offset {
            self.offset = index;
        } else if self.viewport > 0 && index >= self.offset + self.viewport {
            self.offset = index + 1 - self.viewport;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Reset to the top with no content (fresh search)
    pub fn reset(&mut self) {
        self.offset = 0;
        self.total = 0;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get visible range (start_index, end_index)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.viewport).min(self.total);
        (start, end)
    }

    /// Units of content below the bottom edge of the viewport
    pub fn remaining_below(&self) -> usize {
        self.total.saturating_sub(self.offset + self.viewport)
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    fn follow_if_at_bottom(&mut self) {
        // Only meaningful once dimensions are known
        if self.total > 0 && self.offset >= self.max_offset() {
            self.auto_follow = true;
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_follow_on_new_content() {
        let mut scroll = ScrollState::new();
        assert!(scroll.auto_follow);

        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 5);

        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 10);
    }

    #[test]
    fn test_scroll_up_disables_auto_follow() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);

        scroll.scroll_up();
        assert!(!scroll.auto_follow);
        assert_eq!(scroll.offset(), 14);
    }

    #[test]
    fn test_manual_scroll_mode_stays_put() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 0);

        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_ensure_visible() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(20, 4);

        scroll.ensure_visible(6);
        assert_eq!(scroll.offset(), 3);
        assert_eq!(scroll.visible_range(), (3, 7));

        scroll.ensure_visible(1);
        assert_eq!(scroll.offset(), 1);

        scroll.ensure_visible(19);
        assert_eq!(scroll.offset(), 16);
    }

    #[test]
    fn test_remaining_below() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(10, 4);
        assert_eq!(scroll.remaining_below(), 6);

        scroll.page_down();
        assert_eq!(scroll.remaining_below(), 2);

        scroll.scroll_to_bottom();
        assert_eq!(scroll.remaining_below(), 0);

        // Content shorter than the viewport
        scroll.update_dimensions(2, 4);
        assert_eq!(scroll.remaining_below(), 0);
    }
}
