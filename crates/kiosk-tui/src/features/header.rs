//! Header visibility controller.
//!
//! The fixed header bar hides on any scroll away from the top and reappears
//! only when the scroll position returns to exactly 0. Intermediate scroll
//! positions while already hidden do nothing (no continuous parallax).

/// Visibility state of the fixed header bar.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderState {
    hidden: bool,
}

impl HeaderState {
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Reacts to a scroll position change. Returns true if visibility flipped.
    pub fn on_scroll(&mut self, offset: u16) -> bool {
        if offset > 0 && !self.hidden {
            self.hidden = true;
            true
        } else if offset == 0 && self.hidden {
            self.hidden = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hides_exactly_once_while_scrolled() {
        let mut header = HeaderState::default();
        assert!(!header.is_hidden());

        assert!(header.on_scroll(50));
        assert!(header.is_hidden());

        // Further scrolling performs no action
        assert!(!header.on_scroll(80));
        assert!(!header.on_scroll(120));
        assert!(header.is_hidden());
    }

    #[test]
    fn test_shows_only_at_exact_top() {
        let mut header = HeaderState::default();
        header.on_scroll(50);

        // Approaching the top is not enough
        assert!(!header.on_scroll(1));
        assert!(header.is_hidden());

        assert!(header.on_scroll(0));
        assert!(!header.is_hidden());
    }

    #[test]
    fn test_at_top_while_visible_is_noop() {
        let mut header = HeaderState::default();
        assert!(!header.on_scroll(0));
        assert!(!header.is_hidden());
    }
}
