//! Carousel paginator state.
//!
//! The gallery shows a window of [`PAGE_SIZE`] consecutive items; left/right
//! arrows move the window a full page at a time. The window does not wrap
//! within itself: when the item count is not a multiple of the page size, the
//! final window before wraparound is simply short.
//!
//! The paginator cursor is independent from the enlarger's cursor; the two
//! used to be one shared variable, which coupled paging to whatever image the
//! user last enlarged.

use std::ops::Range;

pub use kiosk_core::site::GALLERY_PAGE_SIZE as PAGE_SIZE;

/// Paginated-window state over the gallery items.
#[derive(Debug, Default, Clone, Copy)]
pub struct GalleryState {
    /// First visible item. Invariant: in `[0, len)` whenever `len > 0`.
    pub page_start: usize,
}

impl GalleryState {
    /// The indices currently visible (clipped at the end of the collection).
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        if len == 0 {
            return 0..0;
        }
        self.page_start..(self.page_start + PAGE_SIZE).min(len)
    }

    /// Advances the window by one full page, wrapping modulo `len`.
    pub fn advance(&mut self, len: usize) {
        if len > 0 {
            self.page_start = (self.page_start + PAGE_SIZE) % len;
        }
    }

    /// Retreats the window by one full page, normalized into `[0, len)`.
    pub fn retreat(&mut self, len: usize) {
        if len > 0 {
            self.page_start = (self.page_start + len - PAGE_SIZE % len) % len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_window_shows_first_page() {
        let gallery = GalleryState::default();
        assert_eq!(gallery.visible_range(14), 0..6);
        assert_eq!(gallery.visible_range(3), 0..3);
        assert_eq!(gallery.visible_range(0), 0..0);
    }

    #[test]
    fn test_fourteen_item_walkthrough() {
        // 14 items: full page, full page, short final window of two
        let mut gallery = GalleryState::default();
        assert_eq!(gallery.visible_range(14), 0..6);

        gallery.advance(14);
        assert_eq!(gallery.visible_range(14), 6..12);

        gallery.advance(14);
        assert_eq!(gallery.visible_range(14), 12..14);
    }

    #[test]
    fn test_cyclic_closure_for_page_multiples() {
        for len in [6usize, 12, 18, 30] {
            let mut gallery = GalleryState::default();
            for _ in 0..len.div_ceil(PAGE_SIZE) {
                gallery.advance(len);
            }
            assert_eq!(gallery.page_start, 0, "len={len}");
        }
    }

    #[test]
    fn test_advance_then_retreat_is_identity() {
        for len in [5, 6, 7, 13, 14, 24] {
            for start in 0..len {
                let mut gallery = GalleryState { page_start: start };
                gallery.advance(len);
                gallery.retreat(len);
                assert_eq!(gallery.page_start, start, "len={len} start={start}");

                gallery.retreat(len);
                gallery.advance(len);
                assert_eq!(gallery.page_start, start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_cursor_stays_in_range() {
        for len in [1, 4, 6, 14] {
            let mut gallery = GalleryState::default();
            for _ in 0..50 {
                gallery.advance(len);
                assert!(gallery.page_start < len);
            }
            for _ in 0..50 {
                gallery.retreat(len);
                assert!(gallery.page_start < len);
            }
        }
    }

    #[test]
    fn test_empty_gallery_is_inert() {
        let mut gallery = GalleryState::default();
        gallery.advance(0);
        gallery.retreat(0);
        assert_eq!(gallery.page_start, 0);
    }
}
