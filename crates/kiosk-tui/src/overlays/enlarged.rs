//! Image enlarger overlay.
//!
//! Clicking a gallery thumbnail opens a dimmed backdrop with an enlarged
//! rendition of that image, sized to fit 90% of the viewport. While enlarged,
//! left/right arrows step ±1 through the full image set with wraparound;
//! any click closes the overlay.
//!
//! Decoding is async: the overlay opens immediately in a loading state, then
//! a background task decodes and resizes the image and delivers a pixel grid
//! through the inbox. Each step is a fresh load of the new image; the
//! backdrop itself is created once and reused for every enlargement.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::OverlayUpdate;
use super::render_utils::centered_rect;
use crate::effects::UiEffect;
use crate::events::PixelGrid;
use crate::state::TuiState;
use kiosk_core::site::Site;

/// The reused backdrop behind an enlarged image.
///
/// Created on the first open and held by the owning state for the process
/// lifetime; every enlargement reuses the same instance.
#[derive(Debug)]
pub struct Backdrop {
    dim: Modifier,
}

impl Backdrop {
    pub fn new() -> Self {
        Self {
            dim: Modifier::DIM,
        }
    }

    /// Dims everything beneath the overlay, the cell-grid stand-in for a
    /// translucent full-viewport element.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let buf = frame.buffer_mut();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].modifier.insert(self.dim);
            }
        }
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

/// Load state of the enlarged rendition.
#[derive(Debug)]
enum ImageSlot {
    Loading,
    Ready(PixelGrid),
    Failed(String),
}

/// State for the image enlarger overlay.
#[derive(Debug)]
pub struct EnlargedImageState {
    /// Index into the full gallery. Invariant: in `[0, len)`.
    pub index: usize,
    slot: ImageSlot,
}

impl EnlargedImageState {
    /// Opens the enlarger on gallery item `index` in loading state and
    /// returns the decode effect for the runtime to spawn.
    pub fn open(site: &Site, index: usize, viewport: (u16, u16)) -> (Self, Vec<UiEffect>) {
        let state = Self {
            index,
            slot: ImageSlot::Loading,
        };
        let effects = state.load_effect(site, viewport);
        (state, effects)
    }

    /// Steps to the next image, wrapping over the full set.
    pub fn step_next(&mut self, site: &Site, viewport: (u16, u16)) -> Vec<UiEffect> {
        self.step_to((self.index + 1) % site.gallery.len(), site, viewport)
    }

    /// Steps to the previous image, wrapping over the full set.
    pub fn step_prev(&mut self, site: &Site, viewport: (u16, u16)) -> Vec<UiEffect> {
        let len = site.gallery.len();
        self.step_to((self.index + len - 1) % len, site, viewport)
    }

    fn step_to(&mut self, index: usize, site: &Site, viewport: (u16, u16)) -> Vec<UiEffect> {
        self.index = index;
        self.slot = ImageSlot::Loading;
        self.load_effect(site, viewport)
    }

    fn load_effect(&self, site: &Site, viewport: (u16, u16)) -> Vec<UiEffect> {
        let Some(item) = site.gallery.get(self.index) else {
            return Vec::new();
        };
        let inner = image_area(viewport);
        vec![UiEffect::LoadImage {
            index: self.index,
            path: item.image.clone(),
            max_cells: (inner.width, inner.height),
        }]
    }

    /// True while a decode for the current index is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self.slot, ImageSlot::Loading)
    }

    /// Delivers decoded pixels. Stale results (from an index the user has
    /// already stepped past) are dropped.
    pub fn on_loaded(&mut self, index: usize, grid: PixelGrid) {
        if index == self.index {
            self.slot = ImageSlot::Ready(grid);
        }
    }

    pub fn on_failed(&mut self, index: usize, error: String) {
        if index == self.index {
            self.slot = ImageSlot::Failed(error);
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        if tui.site.gallery.is_empty() {
            return OverlayUpdate::close();
        }
        match key.code {
            KeyCode::Right => {
                let effects = self.step_next(&tui.site, tui.viewport);
                OverlayUpdate::stay().with_effects(effects)
            }
            KeyCode::Left => {
                let effects = self.step_prev(&tui.site, tui.viewport);
                OverlayUpdate::stay().with_effects(effects)
            }
            _ => OverlayUpdate::stay(),
        }
    }

    /// A click anywhere (overlay or image alike) closes the enlarger.
    pub fn handle_mouse(&self, mouse: MouseEvent) -> OverlayUpdate {
        match mouse.kind {
            MouseEventKind::Down(_) => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, backdrop: Option<&Backdrop>, site: &Site) {
        if let Some(backdrop) = backdrop {
            backdrop.render(frame, area);
        }

        let popup = centered_rect(90, 90, area);
        frame.render_widget(Clear, popup);

        let title = format!(
            " {} ({}/{}) ",
            site.gallery_title(self.index),
            self.index + 1,
            site.gallery.len()
        );
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title_bottom(" ←/→ navigate · click to close ");
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        match &self.slot {
            ImageSlot::Loading => {
                let loading = Paragraph::new(Line::from("Loading…"))
                    .style(Style::default().fg(Color::DarkGray));
                frame.render_widget(loading, inner);
            }
            ImageSlot::Failed(error) => {
                let error = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
                frame.render_widget(error, inner);
            }
            ImageSlot::Ready(grid) => render_pixels(frame, inner, grid),
        }
    }
}

/// The inner cell area an enlarged image may occupy for a given viewport.
pub fn image_area(viewport: (u16, u16)) -> Rect {
    let popup = centered_rect(90, 90, Rect::new(0, 0, viewport.0, viewport.1));
    Rect {
        x: popup.x + 1,
        y: popup.y + 1,
        width: popup.width.saturating_sub(2),
        height: popup.height.saturating_sub(2),
    }
}

/// Draws a pixel grid centered in `area` using upper-half-block cells
/// (two vertically stacked pixels per cell).
fn render_pixels(frame: &mut Frame, area: Rect, grid: &PixelGrid) {
    let cols = grid.cols.min(area.width);
    let rows = grid.rows.min(area.height);
    let x_off = area.x + (area.width - cols) / 2;
    let y_off = area.y + (area.height - rows) / 2;

    let buf = frame.buffer_mut();
    for row in 0..rows {
        for col in 0..cols {
            let (tr, tg, tb) = grid.pixel(col, row * 2);
            let (br, bg, bb) = grid.pixel(col, row * 2 + 1);
            let cell = &mut buf[(x_off + col, y_off + row)];
            cell.set_symbol("▀");
            cell.set_fg(Color::Rgb(tr, tg, tb));
            cell.set_bg(Color::Rgb(br, bg, bb));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::site::{ContactSection, GalleryItem, Header};

    fn site(n: usize) -> Site {
        Site {
            header: Header {
                title: "t".to_string(),
                tagline: None,
            },
            about: None,
            gallery: (0..n)
                .map(|i| GalleryItem {
                    image: format!("{i}.jpg").into(),
                    title: None,
                })
                .collect(),
            services: Vec::new(),
            contact: ContactSection {
                action: "https://example.com".to_string(),
                heading: None,
            },
        }
    }

    #[test]
    fn test_open_targets_clicked_index_and_requests_decode() {
        let site = site(5);
        let (state, effects) = EnlargedImageState::open(&site, 3, (80, 24));

        assert_eq!(state.index, 3);
        assert!(state.is_loading());
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::LoadImage { index: 3, .. }]
        ));
    }

    #[test]
    fn test_step_next_wraps_over_full_set() {
        let site = site(5);
        let (mut state, _) = EnlargedImageState::open(&site, 0, (80, 24));

        for _ in 0..site.gallery.len() {
            state.step_next(&site, (80, 24));
        }
        assert_eq!(state.index, 0);
    }

    #[test]
    fn test_step_prev_wraps_backward() {
        let site = site(5);
        let (mut state, _) = EnlargedImageState::open(&site, 0, (80, 24));

        state.step_prev(&site, (80, 24));
        assert_eq!(state.index, 4);
    }

    #[test]
    fn test_stale_decode_results_are_dropped() {
        let site = site(5);
        let (mut state, _) = EnlargedImageState::open(&site, 0, (80, 24));
        state.step_next(&site, (80, 24));

        let grid = PixelGrid {
            cols: 1,
            rows: 1,
            pixels: vec![(0, 0, 0); 2],
        };
        state.on_loaded(0, grid.clone());
        assert!(state.is_loading());

        state.on_loaded(1, grid);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_any_click_closes() {
        let site = site(2);
        let (state, _) = EnlargedImageState::open(&site, 0, (80, 24));

        let click = MouseEvent {
            kind: MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        assert!(matches!(
            state.handle_mouse(click).transition,
            super::super::OverlayTransition::Close
        ));
    }

    #[test]
    fn test_image_area_fits_viewport() {
        let area = image_area((80, 24));
        assert!(area.width < 80);
        assert!(area.height < 24);
    }
}
