//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. The reducer never performs I/O.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::layout::{self, PageHit, page_layout};
use crate::overlays::{Backdrop, EnlargedImageState, Overlay, OverlayTransition, OverlayUpdate, ServiceModalState};
use crate::state::{AppState, TuiState};
use crate::features::contact::{FormAction, FormControl};

/// Rows scrolled per mouse wheel notch.
const WHEEL_STEP: i32 = 3;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            if app.tui.page.tick() {
                let offset = app.tui.page.scroll;
                app.tui.header.on_scroll(offset);
            }
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.tui.viewport = (width, height);
            let total = page_layout(&app.tui.site, width).total_height;
            app.tui.page.set_max_scroll(total.saturating_sub(height));
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::SubmitStarted => {
            app.tui.contact.on_submit_started();
            vec![]
        }
        UiEvent::SubmitFinished { outcome } => {
            app.tui.contact.on_submit_finished(outcome.is_ok());
            vec![]
        }
        UiEvent::ImageLoaded { index, grid } => {
            if let Some(Overlay::Enlarged(e)) = app.overlay.as_mut() {
                e.on_loaded(index, grid);
            }
            vec![]
        }
        UiEvent::ImageFailed { index, error } => {
            if let Some(Overlay::Enlarged(e)) = app.overlay.as_mut() {
                e.on_failed(index, error);
            }
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) => {
            if app.overlay.is_none() {
                app.tui.contact.paste(&text);
            }
            vec![]
        }
        // The Frame event prepended next iteration re-syncs the layout
        Event::Resize(_, _) => vec![],
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    // Only the enlarger consumes keys; the service modal lets them through.
    if let Some(overlay) = app.overlay.as_mut()
        && let Some(overlay_update) = overlay.handle_key(&app.tui, key)
    {
        return apply_overlay_update(app, overlay_update);
    }

    if app.tui.contact.focus.is_some() {
        return match app.tui.contact.handle_key(key) {
            FormAction::Submit => submit_effects(&app.tui),
            FormAction::None => vec![],
        };
    }

    match key.code {
        KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Left => {
            app.tui.gallery.retreat(app.tui.site.gallery.len());
            vec![]
        }
        KeyCode::Right => {
            app.tui.gallery.advance(app.tui.site.gallery.len());
            vec![]
        }
        KeyCode::Up => scroll_page(&mut app.tui, -1),
        KeyCode::Down => scroll_page(&mut app.tui, 1),
        KeyCode::PageUp => scroll_page(&mut app.tui, -10),
        KeyCode::PageDown => scroll_page(&mut app.tui, 10),
        KeyCode::Home => {
            app.tui.page.scroll_to(0);
            app.tui.header.on_scroll(app.tui.page.scroll);
            vec![]
        }
        KeyCode::End => {
            app.tui.page.scroll_to(app.tui.page.max_scroll);
            app.tui.header.on_scroll(app.tui.page.scroll);
            vec![]
        }
        KeyCode::Char('c') => {
            scroll_to_contact(&mut app.tui);
            vec![]
        }
        KeyCode::Tab => {
            app.tui.contact.focus_control(FormControl::Name);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    if let Some(overlay) = app.overlay.as_mut() {
        let area = Rect::new(0, 0, app.tui.viewport.0, app.tui.viewport.1);
        let overlay_update = overlay.handle_mouse(area, mouse);
        return apply_overlay_update(app, overlay_update);
    }

    match mouse.kind {
        MouseEventKind::ScrollDown => scroll_page(&mut app.tui, WHEEL_STEP),
        MouseEventKind::ScrollUp => scroll_page(&mut app.tui, -WHEEL_STEP),
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, mouse.column, mouse.row),
        _ => vec![],
    }
}

fn handle_click(app: &mut AppState, column: u16, row: u16) -> Vec<UiEffect> {
    // Clicks on the fixed header bar hit the bar, not the page beneath it
    if !app.tui.header.is_hidden() && row < layout::HEADER_HEIGHT {
        return vec![];
    }

    let page_y = row.saturating_add(app.tui.page.scroll);
    let page = page_layout(&app.tui.site, app.tui.viewport.0);

    match page.hit_test(column, page_y) {
        Some(PageHit::ContactButton) => {
            scroll_to_contact(&mut app.tui);
            vec![]
        }
        Some(PageHit::Thumb(slot)) => open_enlarger(app, slot),
        Some(PageHit::Service(i)) => {
            if let Some(service) = app.tui.site.services.get(i) {
                // Built fresh per open; the old modal (if any) is discarded
                app.overlay = Some(Overlay::Service(ServiceModalState::build(service)));
            }
            vec![]
        }
        Some(PageHit::Form(FormControl::Send)) => {
            app.tui.contact.focus_control(FormControl::Send);
            submit_effects(&app.tui)
        }
        Some(PageHit::Form(control)) => {
            app.tui.contact.focus_control(control);
            vec![]
        }
        None => {
            app.tui.contact.focus = None;
            vec![]
        }
    }
}

/// Opens the enlarger on the item occupying window `slot`.
fn open_enlarger(app: &mut AppState, slot: usize) -> Vec<UiEffect> {
    let len = app.tui.site.gallery.len();
    let visible = app.tui.gallery.visible_range(len);
    let index = app.tui.gallery.page_start + slot;
    if !visible.contains(&index) {
        return vec![];
    }

    // The backdrop is created on the first open and reused forever after
    app.tui.backdrop.get_or_insert_with(Backdrop::new);

    let (state, effects) = EnlargedImageState::open(&app.tui.site, index, app.tui.viewport);
    app.overlay = Some(Overlay::Enlarged(state));
    effects
}

fn apply_overlay_update(app: &mut AppState, overlay_update: OverlayUpdate) -> Vec<UiEffect> {
    match overlay_update.transition {
        OverlayTransition::Stay => {}
        // Detaches backdrop and content together on every close path
        OverlayTransition::Close => app.overlay = None,
    }
    overlay_update.effects
}

fn scroll_page(tui: &mut TuiState, delta: i32) -> Vec<UiEffect> {
    tui.page.scroll_by(delta);
    tui.header.on_scroll(tui.page.scroll);
    vec![]
}

fn scroll_to_contact(tui: &mut TuiState) {
    let target = page_layout(&tui.site, tui.viewport.0).contact_top;
    if tui.instant_scroll {
        tui.page.scroll_to(target);
        tui.header.on_scroll(tui.page.scroll);
    } else {
        tui.page.animate_to(target);
    }
}

fn submit_effects(tui: &TuiState) -> Vec<UiEffect> {
    vec![UiEffect::SubmitContact {
        action: tui.action.clone(),
        fields: tui.contact.fields.clone(),
    }]
}
