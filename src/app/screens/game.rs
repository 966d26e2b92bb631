//! Game screen implementation
//!
//! Shows the countdown, score, the current question with both operand sets
//! and a Venn diagram, and a 2x2 grid of answer buttons coloured by the
//! last answer's feedback. The session itself is owned by the controller
//! and passed in.

use crate::app::state::{NavigationAction, ScreenSignal, StateManager};
use crate::app::widgets::{Button, ButtonTone};
use crate::quiz::{GameSession, Question, SessionPhase, OPTION_COUNT};
use crate::sets::NumberSet;
use crate::Result;
use crossterm::event::Event;
use log::debug;
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle},
        Block, BorderType, Borders, Paragraph,
    },
    Frame,
};

const SET_A_COLOR: Color = Color::Blue;
const SET_B_COLOR: Color = Color::Magenta;

/// Areas computed by a layout pass
#[derive(Debug, Clone, Copy, Default)]
struct GameLayout {
    header: Rect,
    board: Rect,
    footer_hint: Rect,
}

/// Gameplay screen component
#[derive(Debug)]
pub struct GameScreen {
    answer_buttons: Vec<Button>,
    back_button: Button,
}

impl GameScreen {
    /// Create a new game screen
    pub fn new() -> Self {
        Self {
            answer_buttons: (0..OPTION_COUNT).map(|_| Button::new("")).collect(),
            back_button: Button::new("BACK"),
        }
    }

    pub fn answer_button(&self, index: usize) -> Option<&Button> {
        self.answer_buttons.get(index)
    }

    pub fn back_button(&self) -> &Button {
        &self.back_button
    }

    /// Handle one input event against `session`
    pub fn handle_event<R: Rng>(
        &mut self,
        event: &Event,
        session: &mut GameSession<R>,
        now_ms: u64,
    ) -> Result<Option<ScreenSignal>> {
        let action = match event {
            Event::Key(key) => StateManager::key_to_navigation(*key),
            _ => NavigationAction::None,
        };

        if self.back_button.clicked(event) || action == NavigationAction::Back {
            session.stop();
            return Ok(Some(ScreenSignal::Menu));
        }

        if !session.is_active() {
            if action == NavigationAction::Select {
                session.start(now_ms)?;
            }
            return Ok(None);
        }

        if session.phase() != SessionPhase::AwaitingAnswer {
            return Ok(None);
        }

        let chosen = match action {
            NavigationAction::Choose(index) => Some(index),
            _ => self.answer_buttons.iter().position(|b| b.clicked(event)),
        };
        if let Some(index) = chosen {
            match session.submit_answer(index, now_ms) {
                Some(outcome) => debug!(
                    "option {} chosen, {} points awarded",
                    outcome.index + 1,
                    outcome.points_awarded
                ),
                None => debug!("option {} not accepted", index + 1),
            }
        }

        Ok(None)
    }

    /// Place buttons inside `area`
    fn layout(&mut self, area: Rect, active: bool) -> GameLayout {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Time and score
                Constraint::Min(9),    // Question board
                Constraint::Length(6), // Answers
                Constraint::Length(3), // Back button and help
            ])
            .split(area);

        let answer_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(chunks[2]);
        for (row_index, row) in answer_rows.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row);
            for (column_index, cell) in cells.iter().enumerate() {
                let button = &mut self.answer_buttons[row_index * 2 + column_index];
                button.set_area(*cell);
                button.set_visible(active);
            }
        }

        let footer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(12), Constraint::Min(0)])
            .split(chunks[3]);
        self.back_button.set_area(footer[0]);

        GameLayout {
            header: chunks[0],
            board: chunks[1],
            footer_hint: footer[1],
        }
    }

    /// Render the game screen
    pub fn render<R: Rng>(
        &mut self,
        f: &mut Frame,
        session: &GameSession<R>,
        pointer: Option<(u16, u16)>,
    ) {
        let layout = self.layout(f.size(), session.is_active());

        match session.current_question() {
            Some(question) if session.is_active() => {
                self.render_header(f, layout.header, session);
                self.render_board(f, layout.board, question);
                self.render_answers(f, session, question, pointer);
            }
            _ => self.render_start_banner(f, layout.board),
        }

        self.back_button.render(f, ButtonTone::Secondary, pointer);
        self.render_help(f, layout.footer_hint, session.is_active());
    }

    fn render_start_banner(&self, f: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "SET BATTLE",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press SPACE to start",
                Style::default().fg(Color::Gray),
            )),
        ];
        f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
    }

    fn render_header<R: Rng>(&self, f: &mut Frame, area: Rect, session: &GameSession<R>) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(18),
                Constraint::Min(0),
                Constraint::Length(18),
            ])
            .split(area);

        let time_color = if session.seconds_remaining() <= 5 {
            Color::Red
        } else {
            Color::Blue
        };
        let time = Paragraph::new(format!("Time: {}s", session.seconds_remaining()))
            .style(Style::default().fg(time_color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(rounded_block(time_color));
        f.render_widget(time, chunks[0]);

        let score = Paragraph::new(format!("Score: {}", session.score()))
            .style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(rounded_block(Color::Blue));
        f.render_widget(score, chunks[2]);
    }

    fn render_board(&self, f: &mut Frame, area: Rect, question: &Question) {
        let board = rounded_block(Color::Gray);
        let inner = board.inner(area);
        f.render_widget(board, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(5)])
            .split(inner);

        let prompt = Paragraph::new(question.prompt())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(prompt, rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Percentage(30),
                Constraint::Percentage(35),
            ])
            .split(rows[1]);

        render_set_box(f, columns[0], "Set A", &question.set_a, SET_A_COLOR);
        render_venn(f, columns[1]);
        render_set_box(f, columns[2], "Set B", &question.set_b, SET_B_COLOR);
    }

    fn render_answers<R: Rng>(
        &mut self,
        f: &mut Frame,
        session: &GameSession<R>,
        question: &Question,
        pointer: Option<(u16, u16)>,
    ) {
        for (index, (button, option)) in self
            .answer_buttons
            .iter_mut()
            .zip(question.options.iter())
            .enumerate()
        {
            button.set_label(format!("{}. {}", index + 1, option));
            let tone = match (session.selected_option(), session.is_correct()) {
                (Some(selected), Some(true)) if selected == index => ButtonTone::Correct,
                (Some(selected), Some(false)) if selected == index => ButtonTone::Wrong,
                _ => ButtonTone::Secondary,
            };
            button.render(f, tone, pointer);
        }
    }

    fn render_help(&self, f: &mut Frame, area: Rect, active: bool) {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let spans = if active {
            vec![
                Span::styled("1-4", key_style),
                Span::raw(" Answer  "),
                Span::styled("Esc", key_style),
                Span::raw(" Menu  "),
                Span::styled("Q", key_style),
                Span::raw(" Quit"),
            ]
        } else {
            vec![
                Span::styled("Space", key_style),
                Span::raw(" Start  "),
                Span::styled("Esc", key_style),
                Span::raw(" Menu"),
            ]
        };
        let help = Paragraph::new(vec![Line::from(""), Line::from(spans)])
            .alignment(Alignment::Center);
        f.render_widget(help, area);
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn rounded_block(color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn render_set_box(f: &mut Frame, area: Rect, label: &str, set: &NumberSet, color: Color) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            set.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    let widget = Paragraph::new(text).alignment(Alignment::Center).block(
        rounded_block(color).title(Span::styled(
            label.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    );
    f.render_widget(widget, area);
}

fn render_venn(f: &mut Frame, area: Rect) {
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-2.2, 2.2])
        .y_bounds([-1.2, 1.2])
        .paint(|ctx| {
            ctx.draw(&Circle {
                x: -0.6,
                y: 0.0,
                radius: 1.0,
                color: SET_A_COLOR,
            });
            ctx.draw(&Circle {
                x: 0.6,
                y: 0.0,
                radius: 1.0,
                color: SET_B_COLOR,
            });
            ctx.print(
                -1.1,
                0.0,
                Span::styled("A", Style::default().fg(SET_A_COLOR).add_modifier(Modifier::BOLD)),
            );
            ctx.print(
                1.0,
                0.0,
                Span::styled("B", Style::default().fg(SET_B_COLOR).add_modifier(Modifier::BOLD)),
            );
        });
    f.render_widget(canvas, area);
}
