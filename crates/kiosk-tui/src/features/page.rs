//! Page scroll state, including the animated scroll-to-contact.
//!
//! The scroll offset is in page rows. A smooth scroll sets a target; each
//! tick moves the offset a quarter of the remaining distance (at least one
//! row), so the animation eases out and always terminates. Any manual scroll
//! cancels a pending animation.

/// Scroll state of the page.
#[derive(Debug, Default, Clone, Copy)]
pub struct PageState {
    /// Current scroll offset in rows from the top.
    pub scroll: u16,
    /// Largest valid scroll offset for the current layout.
    pub max_scroll: u16,
    target: Option<u16>,
}

impl PageState {
    /// Updates the scroll bound after a layout/viewport change.
    pub fn set_max_scroll(&mut self, max: u16) {
        self.max_scroll = max;
        self.scroll = self.scroll.min(max);
        if let Some(t) = self.target {
            self.target = Some(t.min(max));
        }
    }

    /// Manual scroll by `delta` rows. Cancels any running animation.
    pub fn scroll_by(&mut self, delta: i32) {
        self.target = None;
        let next = i64::from(self.scroll) + i64::from(delta);
        self.scroll = next.clamp(0, i64::from(self.max_scroll)) as u16;
    }

    /// Jumps straight to `offset` (clamped). Cancels any running animation.
    pub fn scroll_to(&mut self, offset: u16) {
        self.target = None;
        self.scroll = offset.min(self.max_scroll);
    }

    /// Starts an animated scroll toward `offset` (clamped).
    pub fn animate_to(&mut self, offset: u16) {
        let clamped = offset.min(self.max_scroll);
        if clamped == self.scroll {
            self.target = None;
        } else {
            self.target = Some(clamped);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Advances the animation by one tick. Returns true if the offset moved.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };

        let distance = i32::from(target) - i32::from(self.scroll);
        let step = (distance / 4).abs().max(1);
        if distance > 0 {
            self.scroll = self.scroll.saturating_add(step as u16).min(target);
        } else {
            self.scroll = self.scroll.saturating_sub(step as u16).max(target);
        }

        if self.scroll == target {
            self.target = None;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(max: u16) -> PageState {
        let mut p = PageState::default();
        p.set_max_scroll(max);
        p
    }

    #[test]
    fn test_animation_reaches_target_and_stops() {
        let mut p = page(200);
        p.animate_to(120);
        assert!(p.is_animating());

        let mut ticks = 0;
        while p.tick() {
            ticks += 1;
            assert!(ticks < 1000, "animation did not terminate");
        }
        assert_eq!(p.scroll, 120);
        assert!(!p.is_animating());
    }

    #[test]
    fn test_animation_eases_toward_target() {
        let mut p = page(200);
        p.animate_to(100);
        p.tick();
        // First step covers a quarter of the distance
        assert_eq!(p.scroll, 25);
    }

    #[test]
    fn test_manual_scroll_cancels_animation() {
        let mut p = page(200);
        p.animate_to(150);
        p.tick();
        p.scroll_by(-3);
        assert!(!p.is_animating());
        assert!(!p.tick());
    }

    #[test]
    fn test_scroll_clamped_to_bounds() {
        let mut p = page(50);
        p.scroll_by(-10);
        assert_eq!(p.scroll, 0);
        p.scroll_by(500);
        assert_eq!(p.scroll, 50);
    }

    #[test]
    fn test_set_max_scroll_clamps_current_state() {
        let mut p = page(200);
        p.scroll_to(180);
        p.animate_to(190);
        p.set_max_scroll(100);
        assert_eq!(p.scroll, 100);
        p.tick();
        assert!(p.scroll <= 100);
    }

    #[test]
    fn test_animate_to_current_position_is_noop() {
        let mut p = page(100);
        p.animate_to(0);
        assert!(!p.is_animating());
    }

    #[test]
    fn test_animation_scrolls_upward_too() {
        let mut p = page(200);
        p.scroll_to(160);
        p.animate_to(0);
        while p.tick() {}
        assert_eq!(p.scroll, 0);
    }
}
