//! Service description modal.
//!
//! Clicking a services-list row opens a modal built from the row's data
//! (image reference, description, alt text). A new modal is built per open
//! and discarded on close; nothing is reused. Closing happens on the close
//! button or any click outside the content area; clicks inside the content
//! do not close it. There is no keyboard dismissal.

use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::OverlayUpdate;
use super::render_utils::centered_rect;
use kiosk_core::site::ServiceItem;

const CLOSE_LABEL: &str = "[ Close ]";

/// State for one service modal.
#[derive(Debug)]
pub struct ServiceModalState {
    pub name: String,
    pub image: String,
    pub description: String,
    pub alt: String,
}

impl ServiceModalState {
    /// Builds a fresh modal from a service item's data attributes.
    pub fn build(service: &ServiceItem) -> Self {
        Self {
            name: service.name.clone(),
            image: service.image.clone(),
            description: service.description.clone(),
            alt: service.alt.clone(),
        }
    }

    pub fn handle_mouse(&self, area: Rect, mouse: MouseEvent) -> OverlayUpdate {
        let MouseEventKind::Down(_) = mouse.kind else {
            return OverlayUpdate::stay();
        };

        let pos = Position::new(mouse.column, mouse.row);
        let rects = modal_rects(area);
        if rects.close_button.contains(pos) {
            return OverlayUpdate::close();
        }
        if rects.content.contains(pos) {
            // Inside the content area: keep the modal open
            return OverlayUpdate::stay();
        }
        // The click hit the modal root (the backdrop area)
        OverlayUpdate::close()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        // Fresh backdrop per open, unlike the enlarger's reused one
        let buf = frame.buffer_mut();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].modifier.insert(Modifier::DIM);
            }
        }

        let rects = modal_rects(area);
        frame.render_widget(Clear, rects.content);

        let block = Block::default()
            .title(format!(" {} ", self.name))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(rects.content);
        frame.render_widget(block, rects.content);

        let mut lines = vec![
            Line::from(Span::styled(
                format!("[{}: {}]", self.image, self.alt),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
        ];
        lines.extend(self.description.lines().map(Line::from));

        let body = Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        };
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body);

        let close = Paragraph::new(Span::styled(
            CLOSE_LABEL,
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(close, rects.close_button);
    }
}

/// Geometry of the modal for a given viewport.
struct ModalRects {
    content: Rect,
    close_button: Rect,
}

fn modal_rects(area: Rect) -> ModalRects {
    let content = centered_rect(60, 60, area);
    let button_width = CLOSE_LABEL.len() as u16;
    let close_button = Rect::new(
        content.x + (content.width.saturating_sub(button_width)) / 2,
        content.bottom().saturating_sub(2),
        button_width.min(content.width),
        1,
    );
    ModalRects {
        content,
        close_button,
    }
}

#[cfg(test)]
mod tests {
    use super::super::OverlayTransition;
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton};

    fn modal() -> ServiceModalState {
        ServiceModalState::build(&ServiceItem {
            name: "Countertops".to_string(),
            image: "img/counters.jpg".to_string(),
            description: "Custom granite countertops.".to_string(),
            alt: "A polished countertop".to_string(),
        })
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_click_outside_content_closes() {
        let area = Rect::new(0, 0, 100, 40);
        let update = modal().handle_mouse(area, click(0, 0));
        assert!(matches!(update.transition, OverlayTransition::Close));
    }

    #[test]
    fn test_click_inside_content_stays_open() {
        let area = Rect::new(0, 0, 100, 40);
        let content = modal_rects(area).content;
        let update = modal().handle_mouse(area, click(content.x + 2, content.y + 1));
        assert!(matches!(update.transition, OverlayTransition::Stay));
    }

    #[test]
    fn test_close_button_closes() {
        let area = Rect::new(0, 0, 100, 40);
        let button = modal_rects(area).close_button;
        let update = modal().handle_mouse(area, click(button.x + 1, button.y));
        assert!(matches!(update.transition, OverlayTransition::Close));
    }

    #[test]
    fn test_mouse_move_is_ignored() {
        let area = Rect::new(0, 0, 100, 40);
        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        let update = modal().handle_mouse(area, moved);
        assert!(matches!(update.transition, OverlayTransition::Stay));
    }

    #[test]
    fn test_build_copies_data_attributes() {
        let m = modal();
        assert_eq!(m.name, "Countertops");
        assert_eq!(m.image, "img/counters.jpg");
        assert_eq!(m.alt, "A polished countertop");
    }
}
