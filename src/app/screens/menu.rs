//! Menu screen implementation
//!
//! Title banner with Play, Tutorial and Quit buttons. Buttons respond to
//! mouse clicks as well as arrow keys and Enter.

use crate::app::state::{NavigationAction, ScreenSignal, StateManager};
use crate::app::widgets::{Button, ButtonTone};
use crossterm::event::Event;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Menu entries, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Tutorial,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Play, MenuItem::Tutorial, MenuItem::Quit];

    /// Get display text for the item
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Play => "PLAY",
            MenuItem::Tutorial => "TUTORIAL",
            MenuItem::Quit => "QUIT",
        }
    }

    pub fn signal(&self) -> ScreenSignal {
        match self {
            MenuItem::Play => ScreenSignal::Play,
            MenuItem::Tutorial => ScreenSignal::Tutorial,
            MenuItem::Quit => ScreenSignal::Quit,
        }
    }
}

/// Main menu component
#[derive(Debug)]
pub struct MenuScreen {
    buttons: Vec<Button>,
    selected_index: usize,
}

impl MenuScreen {
    /// Create a new menu screen
    pub fn new() -> Self {
        Self {
            buttons: MenuItem::ALL
                .iter()
                .map(|item| Button::new(item.label()))
                .collect(),
            selected_index: 0,
        }
    }

    /// Get the currently highlighted item
    pub fn selected_item(&self) -> MenuItem {
        MenuItem::ALL[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = MenuItem::ALL.len() - 1;
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % MenuItem::ALL.len();
    }

    pub fn button(&self, item: MenuItem) -> &Button {
        &self.buttons[item as usize]
    }

    /// Handle one input event
    pub fn handle_event(&mut self, event: &Event) -> Option<ScreenSignal> {
        if let Some(index) = self.buttons.iter().position(|b| b.clicked(event)) {
            self.selected_index = index;
            return Some(MenuItem::ALL[index].signal());
        }

        let Event::Key(key) = event else {
            return None;
        };
        match StateManager::key_to_navigation(*key) {
            NavigationAction::Up => self.select_previous(),
            NavigationAction::Down => self.select_next(),
            NavigationAction::Select => return Some(self.selected_item().signal()),
            NavigationAction::Back => return Some(ScreenSignal::Quit),
            _ => {}
        }
        None
    }

    /// Place the buttons inside `area`, returning the title and help areas
    pub fn layout(&mut self, area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(2),    // Top padding
                Constraint::Length(7), // Title and subtitle
                Constraint::Length(9), // Buttons
                Constraint::Min(1),    // Bottom padding
                Constraint::Length(1), // Help text
            ])
            .split(area);

        let column = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(24),
                Constraint::Min(0),
            ])
            .split(chunks[2])[1];

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3); 3])
            .split(column);

        for (button, row) in self.buttons.iter_mut().zip(rows.iter()) {
            button.set_area(*row);
        }

        (chunks[1], chunks[4])
    }

    /// Render the menu
    pub fn render(&mut self, f: &mut Frame, pointer: Option<(u16, u16)>) {
        let (title_area, help_area) = self.layout(f.size());

        let title = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "S E T - Z E R O",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Master set theory",
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(title, title_area);

        for (index, button) in self.buttons.iter().enumerate() {
            let tone = if index == self.selected_index {
                ButtonTone::Primary
            } else {
                ButtonTone::Secondary
            };
            button.render(f, tone, pointer);
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled("↑↓", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" Navigate  "),
            Span::styled("Enter", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" Select  "),
            Span::styled("Q", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" Quit"),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(help, help_area);
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}
