//! Application state composition.
//!
//! State is split between `TuiState` (page state) and `Option<Overlay>`:
//! overlay handlers can take `&mut self` and `&TuiState` simultaneously
//! without borrow conflicts, and "is an overlay attached" is the single
//! source of truth for the navigation mode.

use kiosk_core::config::Config;
use kiosk_core::site::Site;

use crate::features::contact::ContactFormState;
use crate::features::gallery::GalleryState;
use crate::features::header::HeaderState;
use crate::features::page::PageState;
use crate::overlays::{Backdrop, Overlay};

/// Which component the arrow keys drive.
///
/// Paginated mode pages the carousel window; enlarged mode steps the
/// enlarged image ±1. The mode is derived from the attached overlay rather
/// than tracked as a separate flag, so it can never disagree with what is
/// on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    Paginated,
    Enlarged,
}

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: &Config, site: Site) -> Self {
        Self {
            tui: TuiState::new(config, site),
            overlay: None,
        }
    }

    pub fn nav_mode(&self) -> NavMode {
        match self.overlay {
            Some(Overlay::Enlarged(_)) => NavMode::Enlarged,
            _ => NavMode::Paginated,
        }
    }
}

/// Page state (everything except overlays).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The loaded site content. Immutable after load.
    pub site: Site,
    /// Resolved contact form action URL (config override applied).
    pub action: String,
    /// Jump instead of animating the scroll-to-contact.
    pub instant_scroll: bool,
    /// Carousel paginator cursor.
    pub gallery: GalleryState,
    /// Fixed header visibility.
    pub header: HeaderState,
    /// Page scroll offset and animation.
    pub page: PageState,
    /// Contact form fields, focus, and banners.
    pub contact: ContactFormState,
    /// The enlarger's backdrop: created on first open, reused afterwards.
    pub backdrop: Option<Backdrop>,
    /// Terminal size, synced from the Frame event each loop iteration.
    pub viewport: (u16, u16),
}

impl TuiState {
    pub fn new(config: &Config, site: Site) -> Self {
        let action = config
            .action_override
            .clone()
            .unwrap_or_else(|| site.contact.action.clone());

        Self {
            should_quit: false,
            site,
            action,
            instant_scroll: config.instant_scroll,
            gallery: GalleryState::default(),
            header: HeaderState::default(),
            page: PageState::default(),
            contact: ContactFormState::default(),
            backdrop: None,
            viewport: (0, 0),
        }
    }
}
