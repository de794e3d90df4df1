//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components drawn over the page. Each is
//! self-contained: it owns its state, input handlers, and render function.
//!
//! - `enlarged.rs`: the image enlarger (dimmed backdrop + large rendition)
//! - `service_modal.rs`: the per-service description modal
//! - `render_utils.rs`: shared rendering utilities

pub mod enlarged;
pub mod render_utils;
pub mod service_modal;

use crossterm::event::{KeyEvent, MouseEvent};
pub use enlarged::{Backdrop, EnlargedImageState};
use ratatui::Frame;
use ratatui::layout::Rect;
pub use service_modal::ServiceModalState;

use crate::effects::UiEffect;
use crate::state::TuiState;

/// Transition returned by overlay input handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay input handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

/// The active overlay, if any. At most one is attached at a time.
#[derive(Debug)]
pub enum Overlay {
    Enlarged(EnlargedImageState),
    Service(ServiceModalState),
}

impl Overlay {
    pub fn render(&self, tui: &TuiState, frame: &mut Frame, area: Rect) {
        match self {
            // The enlarger borrows the reused backdrop owned by TuiState
            Overlay::Enlarged(e) => e.render(frame, area, tui.backdrop.as_ref(), &tui.site),
            Overlay::Service(m) => m.render(frame, area),
        }
    }

    /// Keyboard input routing. Only the enlarger consumes keys: the service
    /// modal is mouse-dismissed, and keys (arrows included) pass through to
    /// the page beneath it.
    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> Option<OverlayUpdate> {
        match self {
            Overlay::Enlarged(e) => Some(e.handle_key(tui, key)),
            Overlay::Service(_) => None,
        }
    }

    pub fn handle_mouse(&mut self, area: Rect, mouse: MouseEvent) -> OverlayUpdate {
        match self {
            Overlay::Enlarged(e) => e.handle_mouse(mouse),
            Overlay::Service(m) => m.handle_mouse(area, mouse),
        }
    }
}
