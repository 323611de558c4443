//! Scroll state for selection lists
//!
//! Tracks the highlighted row and the first visible row so long option lists
//! can be paged through inside a fixed-height dialog.

/// Selection and viewport position within a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    pub selected_index: usize,
    pub offset: usize,
    pub total_items: usize,
    pub visible_items: usize,
}

impl ScrollState {
    pub fn new(total_items: usize, visible_items: usize) -> Self {
        Self {
            selected_index: 0,
            offset: 0,
            total_items,
            visible_items: visible_items.max(1),
        }
    }

    /// Jump to an index, clamped to the list
    pub fn select(&mut self, index: usize) {
        self.selected_index = index.min(self.total_items.saturating_sub(1));
        self.ensure_visible();
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.ensure_visible();
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.total_items {
            self.selected_index += 1;
            self.ensure_visible();
        }
    }

    pub fn page_up(&mut self) {
        self.select(self.selected_index.saturating_sub(self.visible_items));
    }

    pub fn page_down(&mut self) {
        self.select(self.selected_index + self.visible_items);
    }

    pub fn home(&mut self) {
        self.select(0);
    }

    pub fn end(&mut self) {
        self.select(self.total_items.saturating_sub(1));
    }

    /// Resize the viewport (e.g. after a terminal resize)
    pub fn set_visible_items(&mut self, visible_items: usize) {
        self.visible_items = visible_items.max(1);
        self.ensure_visible();
    }

    /// Half-open range of indices currently on screen
    pub fn visible_range(&self) -> (usize, usize) {
        let end = (self.offset + self.visible_items).min(self.total_items);
        (self.offset, end)
    }

    fn ensure_visible(&mut self) {
        if self.selected_index < self.offset {
            self.offset = self.selected_index;
        } else if self.selected_index >= self.offset + self.visible_items {
            self.offset = self.selected_index + 1 - self.visible_items;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_down_scrolls_viewport() {
        let mut state = ScrollState::new(10, 3);
        for _ in 0..4 {
            state.move_down();
        }
        assert_eq!(state.selected_index, 4);
        assert_eq!(state.visible_range(), (2, 5));
    }

    #[test]
    fn test_bounds_are_clamped() {
        let mut state = ScrollState::new(3, 5);
        state.move_up();
        assert_eq!(state.selected_index, 0);
        state.page_down();
        assert_eq!(state.selected_index, 2);
        state.move_down();
        assert_eq!(state.selected_index, 2);
        assert_eq!(state.visible_range(), (0, 3));
    }

    #[test]
    fn test_home_end() {
        let mut state = ScrollState::new(20, 4);
        state.end();
        assert_eq!(state.selected_index, 19);
        assert_eq!(state.visible_range(), (16, 20));
        state.home();
        assert_eq!(state.visible_range(), (0, 4));
    }

    #[test]
    fn test_empty_list() {
        let mut state = ScrollState::new(0, 4);
        state.move_down();
        state.end();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.visible_range(), (0, 0));
    }
}
