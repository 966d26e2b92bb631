//! Tutorial screen implementation
//!
//! One page per concept with a description and a worked example. Example
//! results are computed with the same set functions the quiz uses.

use crate::app::state::{NavigationAction, ScreenSignal, StateManager};
use crate::app::widgets::{Button, ButtonTone};
use crate::sets::{complement, NumberSet, Operation};
use crossterm::event::Event;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Worked example shown under a concept
#[derive(Debug, Clone, Copy)]
pub enum Example {
    Binary {
        operation: Operation,
        a: &'static [u8],
        b: &'static [u8],
    },
    Complement {
        universe: &'static [u8],
        a: &'static [u8],
    },
}

impl Example {
    pub fn result(&self) -> NumberSet {
        match self {
            Example::Binary { operation, a, b } => {
                operation.apply(&NumberSet::from(*a), &NumberSet::from(*b))
            }
            Example::Complement { universe, a } => {
                complement(&NumberSet::from(*a), &NumberSet::from(*universe))
            }
        }
    }

    /// Operand lines followed by the result line
    pub fn lines(&self) -> [String; 3] {
        match self {
            Example::Binary { operation, a, b } => [
                format!("A = {}", NumberSet::from(*a)),
                format!("B = {}", NumberSet::from(*b)),
                format!("A {} B = {}", operation.symbol(), self.result()),
            ],
            Example::Complement { universe, a } => [
                format!("U = {}", NumberSet::from(*universe)),
                format!("A = {}", NumberSet::from(*a)),
                format!("A' = {}", self.result()),
            ],
        }
    }
}

/// One tutorial page
#[derive(Debug, Clone, Copy)]
pub struct Concept {
    pub name: &'static str,
    pub symbol: &'static str,
    pub description: &'static str,
    pub example: Example,
}

pub static CONCEPTS: [Concept; 5] = [
    Concept {
        name: "Union",
        symbol: "∪",
        description: "The union of two sets contains every element that is in A, in B, or in both.",
        example: Example::Binary {
            operation: Operation::Union,
            a: &[1, 2, 3],
            b: &[3, 4, 5],
        },
    },
    Concept {
        name: "Intersection",
        symbol: "∩",
        description: "The intersection contains only the elements that are in both sets at the same time.",
        example: Example::Binary {
            operation: Operation::Intersection,
            a: &[1, 2, 3],
            b: &[3, 4, 5],
        },
    },
    Concept {
        name: "Difference",
        symbol: "-",
        description: "The difference A - B contains the elements that are in A but not in B.",
        example: Example::Binary {
            operation: Operation::Difference,
            a: &[1, 2, 3, 4],
            b: &[3, 4, 5],
        },
    },
    Concept {
        name: "Complement",
        symbol: "'",
        description: "The complement of A contains every element of the universe that is not in A.",
        example: Example::Complement {
            universe: &[1, 2, 3, 4, 5],
            a: &[1, 2],
        },
    },
    Concept {
        name: "Symmetric Difference",
        symbol: "Δ",
        description: "The symmetric difference contains the elements that are in A or in B, but not in both.",
        example: Example::Binary {
            operation: Operation::SymmetricDifference,
            a: &[1, 2, 3],
            b: &[3, 4, 5],
        },
    },
];

/// Paginated tutorial component
#[derive(Debug)]
pub struct TutorialScreen {
    page: usize,
    back_button: Button,
    previous_button: Button,
    next_button: Button,
}

impl TutorialScreen {
    pub fn new() -> Self {
        let mut screen = Self {
            page: 0,
            back_button: Button::new("BACK"),
            previous_button: Button::new("PREVIOUS"),
            next_button: Button::new("NEXT"),
        };
        screen.sync_buttons();
        screen
    }

    /// Zero-based index of the page shown
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        CONCEPTS.len()
    }

    pub fn concept(&self) -> &'static Concept {
        &CONCEPTS[self.page]
    }

    pub fn next_page(&mut self) {
        if self.page + 1 < CONCEPTS.len() {
            self.page += 1;
        }
        self.sync_buttons();
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
        self.sync_buttons();
    }

    pub fn back_button(&self) -> &Button {
        &self.back_button
    }

    pub fn previous_button(&self) -> &Button {
        &self.previous_button
    }

    pub fn next_button(&self) -> &Button {
        &self.next_button
    }

    /// Handle one input event
    pub fn handle_event(&mut self, event: &Event) -> Option<ScreenSignal> {
        if self.back_button.clicked(event) {
            return Some(ScreenSignal::Menu);
        }
        if self.previous_button.clicked(event) {
            self.previous_page();
            return None;
        }
        if self.next_button.clicked(event) {
            self.next_page();
            return None;
        }

        let Event::Key(key) = event else {
            return None;
        };
        match StateManager::key_to_navigation(*key) {
            NavigationAction::Left => self.previous_page(),
            NavigationAction::Right => self.next_page(),
            NavigationAction::Back => return Some(ScreenSignal::Menu),
            _ => {}
        }
        None
    }

    // Navigation buttons only show where there is a page to go to
    fn sync_buttons(&mut self) {
        self.previous_button.set_visible(self.page > 0);
        self.next_button.set_visible(self.page + 1 < CONCEPTS.len());
    }

    /// Place buttons inside `area`, returning the title and page areas
    pub fn layout(&mut self, area: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(12),   // Concept card
                Constraint::Length(1), // Page indicator
                Constraint::Length(3), // Buttons
            ])
            .split(area);

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Min(0),
                Constraint::Length(14),
                Constraint::Length(2),
                Constraint::Length(14),
                Constraint::Min(0),
            ])
            .split(chunks[3]);
        self.back_button.set_area(buttons[0]);
        self.previous_button.set_area(buttons[2]);
        self.next_button.set_area(buttons[4]);

        (chunks[0], chunks[1], chunks[2])
    }

    /// Render the tutorial
    pub fn render(&mut self, f: &mut Frame, pointer: Option<(u16, u16)>) {
        let (title_area, card_area, indicator_area) = self.layout(f.size());
        let concept = self.concept();

        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                "TUTORIAL",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Set operations",
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(title, title_area);

        let card = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Blue))
            .title(Span::styled(
                format!(" {} ({}) ", concept.name, concept.symbol),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center);
        let inner = card.inner(card_area);
        f.render_widget(card, card_area);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(6)])
            .split(inner);

        let description = Paragraph::new(concept.description)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Left);
        f.render_widget(description, sections[0]);

        let [first, second, result] = concept.example.lines();
        let example = Paragraph::new(vec![
            Line::from(first),
            Line::from(second),
            Line::from(Span::styled(
                result,
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray))
                .title("Example"),
        );
        f.render_widget(example, sections[1]);

        let indicator = Paragraph::new(format!("{} / {}", self.page + 1, self.page_count()))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(indicator, indicator_area);

        self.back_button.render(f, ButtonTone::Secondary, pointer);
        self.previous_button.render(f, ButtonTone::Secondary, pointer);
        self.next_button.render(f, ButtonTone::Primary, pointer);
    }
}

impl Default for TutorialScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_example_results() {
        let results: Vec<String> = CONCEPTS
            .iter()
            .map(|c| c.example.result().to_string())
            .collect();
        assert_eq!(
            results,
            vec![
                "{1, 2, 3, 4, 5}",
                "{3}",
                "{1, 2}",
                "{3, 4, 5}",
                "{1, 2, 4, 5}"
            ]
        );
    }

    #[test]
    fn test_complement_example_lines() {
        let lines = CONCEPTS[3].example.lines();
        assert_eq!(lines[0], "U = {1, 2, 3, 4, 5}");
        assert_eq!(lines[2], "A' = {3, 4, 5}");
    }

    #[test]
    fn test_paging_stops_at_ends() {
        let mut screen = TutorialScreen::new();
        assert!(!screen.previous_button().is_visible());
        screen.previous_page();
        assert_eq!(screen.page(), 0);

        for _ in 0..10 {
            screen.next_page();
        }
        assert_eq!(screen.page(), screen.page_count() - 1);
        assert!(!screen.next_button().is_visible());
        assert!(screen.previous_button().is_visible());
    }

    #[test]
    fn test_arrow_keys_and_escape() {
        let mut screen = TutorialScreen::new();
        assert_eq!(screen.handle_event(&key(KeyCode::Right)), None);
        assert_eq!(screen.concept().name, "Intersection");
        screen.handle_event(&key(KeyCode::Left));
        assert_eq!(screen.page(), 0);
        assert_eq!(
            screen.handle_event(&key(KeyCode::Esc)),
            Some(ScreenSignal::Menu)
        );
    }
}
