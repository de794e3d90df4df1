//! UI event types.
//!
//! Everything the reducer consumes arrives as a `UiEvent`: terminal input,
//! the frame-size sync, ticks, and async results delivered via the inbox.

use kiosk_core::contact::SubmitOutcome;

/// Decoded image pixels at terminal-cell resolution.
///
/// Each cell renders two vertically stacked pixels with the upper half block
/// glyph, so the pixel buffer is `cols` wide and `rows * 2` tall (row-major).
#[derive(Debug, Clone)]
pub struct PixelGrid {
    pub cols: u16,
    pub rows: u16,
    pub pixels: Vec<(u8, u8, u8)>,
}

impl PixelGrid {
    /// Pixel at `(x, y)` in pixel coordinates (y counts half-cells).
    pub fn pixel(&self, x: u16, y: u16) -> (u8, u8, u8) {
        let idx = usize::from(y) * usize::from(self.cols) + usize::from(x);
        self.pixels.get(idx).copied().unwrap_or((0, 0, 0))
    }
}

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick (drives the scroll animation).
    Tick,
    /// Terminal size snapshot, prepended every loop iteration.
    Frame { width: u16, height: u16 },
    /// Raw terminal input (keys, mouse, resize).
    Terminal(crossterm::event::Event),
    /// A contact submission was spawned.
    SubmitStarted,
    /// The contact submission resolved.
    SubmitFinished { outcome: SubmitOutcome },
    /// Enlarger image decode finished.
    ImageLoaded { index: usize, grid: PixelGrid },
    /// Enlarger image decode failed.
    ImageFailed { index: usize, error: String },
}
