//! Clickable buttons
//!
//! A `Button` remembers the area it was last laid out in so mouse
//! presses can be hit-tested against it.

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Colour scheme of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    Primary,
    Secondary,
    Correct,
    Wrong,
}

impl ButtonTone {
    fn style(&self, hovered: bool) -> Style {
        let style = match self {
            ButtonTone::Primary => Style::default().fg(Color::White).bg(if hovered {
                Color::Magenta
            } else {
                Color::Blue
            }),
            ButtonTone::Secondary => Style::default()
                .fg(Color::Blue)
                .bg(if hovered { Color::DarkGray } else { Color::Reset }),
            ButtonTone::Correct => Style::default().fg(Color::Black).bg(Color::Green),
            ButtonTone::Wrong => Style::default().fg(Color::White).bg(Color::Red),
        };
        if hovered {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

/// Position of a left mouse-button press
pub fn left_click(event: &Event) -> Option<(u16, u16)> {
    match event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some((*column, *row)),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    area: Rect,
    visible: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            area: Rect::default(),
            visible: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Place the button; called on every layout pass
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hidden buttons are neither drawn nor clickable
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Cell in the middle of the button
    pub fn center(&self) -> (u16, u16) {
        (
            self.area.x + self.area.width / 2,
            self.area.y + self.area.height / 2,
        )
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.visible
            && column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }

    /// Check whether `event` is a left click inside the button
    pub fn clicked(&self, event: &Event) -> bool {
        left_click(event).is_some_and(|(column, row)| self.contains(column, row))
    }

    pub fn render(&self, f: &mut Frame, tone: ButtonTone, pointer: Option<(u16, u16)>) {
        if !self.visible || self.area.area() == 0 {
            return;
        }
        let hovered = pointer.is_some_and(|(column, row)| self.contains(column, row));
        let style = tone.style(hovered);

        let button = Paragraph::new(self.label.as_str())
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            );
        f.render_widget(button, self.area);
    }
}
