//! Pure view/render functions for the TUI.
//!
//! The page is drawn into an off-screen buffer at its full layout height,
//! then the rows under the scroll offset are blitted to the frame. Render and
//! hit-testing share the same [`PageLayout`], so clicks land on what was
//! drawn. Functions here never mutate state or return effects.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

use crate::common::truncate_with_ellipsis;
use crate::features::contact::{Banner, ContactFormState, FormControl};
use crate::features::gallery::PAGE_SIZE;
use crate::layout::{HEADER_HEIGHT, MARGIN, PageLayout, page_layout};
use crate::state::{AppState, TuiState};
use kiosk_core::site::Site;

const HERO_BUTTON_LABEL: &str = "[ Contact Us ]";
const SEND_LABEL: &str = "[ Send ]";
const SUCCESS_TEXT: &str = "Thanks! Your message was sent.";
const ERROR_TEXT: &str = "Something went wrong. Please try again.";

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    let page = page_layout(&state.site, area.width);
    let mut canvas = Buffer::empty(Rect::new(0, 0, page.width, page.total_height));
    render_page(state, &page, &mut canvas);
    blit_visible(&canvas, state.page.scroll, frame, area);

    if !state.header.is_hidden() {
        render_header_bar(&state.site, frame, area);
    }

    if let Some(overlay) = &app.overlay {
        overlay.render(state, frame, area);
    }
}

/// Copies the rows `scroll..scroll + height` of the page canvas to the frame.
fn blit_visible(canvas: &Buffer, scroll: u16, frame: &mut Frame, area: Rect) {
    let buf = frame.buffer_mut();
    for row in 0..area.height {
        let Some(src_y) = scroll.checked_add(row) else {
            break;
        };
        if src_y >= canvas.area.height {
            break;
        }
        for x in 0..area.width.min(canvas.area.width) {
            buf[(area.x + x, area.y + row)] = canvas[(x, src_y)].clone();
        }
    }
}

/// The fixed header bar, drawn over the page while the scroll is at the top.
fn render_header_bar(site: &Site, frame: &mut Frame, area: Rect) {
    let buf = frame.buffer_mut();
    let bar = Style::default().bg(Color::DarkGray).fg(Color::White);
    for y in 0..HEADER_HEIGHT.min(area.height) {
        for x in 0..area.width {
            buf[(x, y)].set_symbol(" ").set_style(bar);
        }
    }
    if area.height > 0 {
        let title = truncate_with_ellipsis(&site.header.title, usize::from(area.width.saturating_sub(MARGIN * 2)));
        buf.set_string(MARGIN, 0, title, bar.add_modifier(Modifier::BOLD));
    }
    if area.height > 1 {
        let hint = "q quit · ←/→ page gallery · c contact";
        let hint = truncate_with_ellipsis(hint, usize::from(area.width.saturating_sub(MARGIN * 2)));
        buf.set_string(MARGIN, 1, hint, bar.fg(Color::Gray));
    }
}

fn render_page(state: &TuiState, page: &PageLayout, buf: &mut Buffer) {
    let site = &state.site;
    let inner = usize::from(page.width.saturating_sub(MARGIN * 2));

    // Hero
    let mut y = 1;
    buf.set_string(
        MARGIN,
        y,
        truncate_with_ellipsis(&site.header.title, inner),
        Style::default().add_modifier(Modifier::BOLD),
    );
    y += 1;
    if let Some(tagline) = &site.header.tagline {
        buf.set_string(
            MARGIN,
            y,
            truncate_with_ellipsis(tagline, inner),
            Style::default().fg(Color::Gray),
        );
    }
    buf.set_string(
        page.hero_button.x,
        page.hero_button.y,
        HERO_BUTTON_LABEL,
        Style::default().fg(Color::Black).bg(Color::Cyan),
    );

    if let Some(top) = page.gallery_top {
        render_gallery(state, page, top, buf);
    }

    if let Some(top) = page.services_top {
        buf.set_string(MARGIN, top, "Services", section_title());
        for (service, rect) in site.services.iter().zip(&page.service_rows) {
            let label = format!("• {}", service.name);
            buf.set_string(
                rect.x,
                rect.y,
                truncate_with_ellipsis(&label, usize::from(rect.width)),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            );
        }
    }

    if let Some(top) = page.about_top {
        buf.set_string(MARGIN, top, "About", section_title());
        for (i, line) in page.about_lines.iter().enumerate() {
            buf.set_string(MARGIN, top + 1 + i as u16, line, Style::default());
        }
    }

    render_contact(state, page, buf);
}

fn render_gallery(state: &TuiState, page: &PageLayout, top: u16, buf: &mut Buffer) {
    let site = &state.site;
    let len = site.gallery.len();
    let visible = state.gallery.visible_range(len);

    buf.set_string(MARGIN, top, "Gallery", section_title());

    for slot in 0..PAGE_SIZE {
        let rect = page.thumbs[slot];
        let Some(index) = visible.clone().nth(slot) else {
            continue;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let text_area = block.inner(rect);
        block.render(rect, buf);

        let title = site.gallery_title(index);
        if text_area.height > 0 {
            let middle = text_area.y + text_area.height / 2;
            buf.set_string(
                text_area.x,
                middle,
                truncate_with_ellipsis(&title, usize::from(text_area.width)),
                Style::default(),
            );
        }
    }

    let first = visible.start + 1;
    let last = visible.end;
    let pager = format!("◀  {first}–{last} of {len}  ▶");
    buf.set_string(MARGIN, page.pager_line, pager, Style::default().fg(Color::Gray));
}

fn render_contact(state: &TuiState, page: &PageLayout, buf: &mut Buffer) {
    let site = &state.site;
    let form = &state.contact;

    let heading = site.contact.heading.as_deref().unwrap_or("Contact");
    buf.set_string(MARGIN, page.contact_top, heading, section_title());

    render_field(buf, page.name_rect, "Name", &form.fields.name, form, FormControl::Name);
    render_field(buf, page.email_rect, "Email", &form.fields.email, form, FormControl::Email);
    render_message(buf, page.message_rect, form);

    let send_style = if form.focus == Some(FormControl::Send) {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Cyan)
    };
    buf.set_string(page.send_button.x, page.send_button.y, SEND_LABEL, send_style);
    if form.submitting {
        buf.set_string(
            page.send_button.right() + 2,
            page.send_button.y,
            "sending…",
            Style::default().fg(Color::Gray),
        );
    }

    match form.banner {
        Banner::None => {}
        Banner::Success => buf.set_string(
            MARGIN,
            page.banner_line,
            SUCCESS_TEXT,
            Style::default().fg(Color::Green),
        ),
        Banner::Error => buf.set_string(
            MARGIN,
            page.banner_line,
            ERROR_TEXT,
            Style::default().fg(Color::Red),
        ),
    }
}

fn render_field(
    buf: &mut Buffer,
    rect: Rect,
    label: &str,
    value: &str,
    form: &ContactFormState,
    control: FormControl,
) {
    // Label sits on the row above the input rect
    buf.set_string(rect.x, rect.y.saturating_sub(1), label, Style::default().fg(Color::Gray));

    let style = field_style(form.focus == Some(control));
    let width = usize::from(rect.width);
    let shown = tail_window(value, width);
    let padded = format!("{shown:<width$}");
    buf.set_string(rect.x, rect.y, padded, style);
}

fn render_message(buf: &mut Buffer, rect: Rect, form: &ContactFormState) {
    buf.set_string(
        rect.x,
        rect.y.saturating_sub(1),
        "Message",
        Style::default().fg(Color::Gray),
    );

    let style = field_style(form.focus == Some(FormControl::Message));
    let width = usize::from(rect.width);
    let mut lines: Vec<&str> = form.fields.message.lines().collect();
    if form.fields.message.ends_with('\n') {
        lines.push("");
    }
    let visible = lines.len().saturating_sub(usize::from(rect.height));
    for row in 0..rect.height {
        let line = lines.get(visible + usize::from(row)).copied().unwrap_or("");
        let shown = tail_window(line, width);
        let padded = format!("{shown:<width$}");
        buf.set_string(rect.x, rect.y + row, padded, style);
    }
}

/// Rightmost slice of `value` that fits in `width` columns, with room for
/// the cursor cell when the field must scroll its tail into view.
fn tail_window(value: &str, width: usize) -> &str {
    if width == 0 {
        return "";
    }
    let max = width - 1;
    let mut start = value.len();
    let mut cols = 0;
    for (i, c) in value.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if cols + w > max {
            break;
        }
        cols += w;
        start = i;
    }
    &value[start..]
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().bg(Color::Rgb(40, 40, 40)).fg(Color::White)
    } else {
        Style::default().bg(Color::Rgb(25, 25, 25)).fg(Color::Gray)
    }
}

fn section_title() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_window_keeps_the_end_of_long_values() {
        assert_eq!(tail_window("hello world", 6), "world");
        assert_eq!(tail_window("abc", 10), "abc");
        assert_eq!(tail_window("abc", 0), "");
    }
}
