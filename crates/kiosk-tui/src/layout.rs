//! Deterministic page layout.
//!
//! The page is laid out in page coordinates (y grows downward from the top
//! of the document, independent of the scroll offset). Render and mouse
//! hit-testing both consume the same [`PageLayout`], so a click always lands
//! on exactly what was drawn.

use ratatui::layout::{Position, Rect};

use crate::features::contact::FormControl;
use crate::features::gallery::PAGE_SIZE;
use kiosk_core::site::Site;

/// Horizontal page margin in cells.
pub const MARGIN: u16 = 2;
/// Rows of the fixed header bar.
pub const HEADER_HEIGHT: u16 = 2;
/// Thumbnail grid shape: 2 rows of 3.
pub const THUMB_COLS: u16 = 3;
pub const THUMB_HEIGHT: u16 = 5;

/// What a click at a page coordinate lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageHit {
    /// The hero's scroll-to-contact button.
    ContactButton,
    /// A thumbnail slot (0-based within the visible window).
    Thumb(usize),
    /// A services-list row.
    Service(usize),
    /// A contact form control.
    Form(FormControl),
}

/// Computed page geometry for a given site and width.
#[derive(Debug)]
pub struct PageLayout {
    pub width: u16,
    pub hero_button: Rect,
    /// Section title row of the gallery, if the site has one.
    pub gallery_top: Option<u16>,
    /// One rect per visible window slot, row-major.
    pub thumbs: [Rect; PAGE_SIZE],
    pub pager_line: u16,
    pub services_top: Option<u16>,
    pub service_rows: Vec<Rect>,
    pub about_top: Option<u16>,
    pub about_lines: Vec<String>,
    /// Top of the contact section; this is the smooth-scroll target.
    pub contact_top: u16,
    pub name_rect: Rect,
    pub email_rect: Rect,
    pub message_rect: Rect,
    pub send_button: Rect,
    pub banner_line: u16,
    pub total_height: u16,
}

impl PageLayout {
    /// Maps a page coordinate to the interactive element under it.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<PageHit> {
        let pos = Position::new(x, y);

        if self.hero_button.contains(pos) {
            return Some(PageHit::ContactButton);
        }
        for (slot, rect) in self.thumbs.iter().enumerate() {
            if rect.contains(pos) {
                return Some(PageHit::Thumb(slot));
            }
        }
        for (i, rect) in self.service_rows.iter().enumerate() {
            if rect.contains(pos) {
                return Some(PageHit::Service(i));
            }
        }
        if self.name_rect.contains(pos) {
            return Some(PageHit::Form(FormControl::Name));
        }
        if self.email_rect.contains(pos) {
            return Some(PageHit::Form(FormControl::Email));
        }
        if self.message_rect.contains(pos) {
            return Some(PageHit::Form(FormControl::Message));
        }
        if self.send_button.contains(pos) {
            return Some(PageHit::Form(FormControl::Send));
        }
        None
    }
}

/// Lays the site out at the given width.
pub fn page_layout(site: &Site, width: u16) -> PageLayout {
    let width = width.max(20);
    let inner = width - 2 * MARGIN;
    let mut y = 1; // top padding

    // Hero: title, optional tagline, contact button
    y += 1; // title
    if site.header.tagline.is_some() {
        y += 1;
    }
    y += 1;
    let hero_button = Rect::new(MARGIN, y, 16, 1);
    y += 2;

    // Gallery: section title + 2x3 thumbnail grid + pager line
    let mut thumbs = [Rect::default(); PAGE_SIZE];
    let gallery_top = (!site.gallery.is_empty()).then_some(y);
    let mut pager_line = y;
    if gallery_top.is_some() {
        y += 1;
        let thumb_w = (inner.saturating_sub(THUMB_COLS - 1)) / THUMB_COLS;
        for (slot, rect) in thumbs.iter_mut().enumerate() {
            let col = (slot as u16) % THUMB_COLS;
            let row = (slot as u16) / THUMB_COLS;
            *rect = Rect::new(
                MARGIN + col * (thumb_w + 1),
                y + row * THUMB_HEIGHT,
                thumb_w,
                THUMB_HEIGHT,
            );
        }
        y += 2 * THUMB_HEIGHT;
        pager_line = y;
        y += 2;
    }

    // Services: section title + one row per item
    let services_top = (!site.services.is_empty()).then_some(y);
    let mut service_rows = Vec::with_capacity(site.services.len());
    if services_top.is_some() {
        y += 1;
        for _ in &site.services {
            service_rows.push(Rect::new(MARGIN, y, inner, 1));
            y += 1;
        }
        y += 1;
    }

    // About: section title + wrapped body
    let about_lines = site
        .about
        .as_deref()
        .map(|text| wrap_lines(text, usize::from(inner)))
        .unwrap_or_default();
    let about_top = (!about_lines.is_empty()).then_some(y);
    if about_top.is_some() {
        y += 1 + about_lines.len() as u16 + 1;
    }

    // Contact: heading, three fields, send button, banner line
    let contact_top = y;
    y += 2;
    let name_rect = Rect::new(MARGIN, y, inner, 1);
    y += 2;
    let email_rect = Rect::new(MARGIN, y, inner, 1);
    y += 2;
    let message_rect = Rect::new(MARGIN, y, inner, 3);
    y += 4;
    let send_button = Rect::new(MARGIN, y, 10, 1);
    y += 2;
    let banner_line = y;
    y += 2;

    PageLayout {
        width,
        hero_button,
        gallery_top,
        thumbs,
        pager_line,
        services_top,
        service_rows,
        about_top,
        about_lines,
        contact_top,
        name_rect,
        email_rect,
        message_rect,
        send_button,
        banner_line,
        total_height: y,
    }
}

/// Greedy word wrap producing at most `width`-column lines.
fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.len() + 1 + word.len() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}
