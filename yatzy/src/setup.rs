//! Pre-game setup screen: player count and names.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use yatzy_core::{MAX_PLAYERS, MIN_PLAYERS};

use crate::ui::centered_box;
use crate::ui::theme::GameTheme;

/// State of the setup wizard.
pub struct SetupScreen {
    pub num_players: usize,
    names: Vec<String>,
    /// Focused name field (0..num_players).
    focus: usize,
    pub cancelled: bool,
    pub finished: bool,
    theme: GameTheme,
}

impl SetupScreen {
    pub fn new() -> Self {
        Self {
            num_players: MIN_PLAYERS,
            names: (1..=MAX_PLAYERS).map(|i| format!("Spiller {i}")).collect(),
            focus: 0,
            cancelled: false,
            finished: false,
            theme: GameTheme::default(),
        }
    }

    /// The chosen names, defaulting blank fields to "Spiller N".
    pub fn player_names(&self) -> Vec<String> {
        self.names[..self.num_players]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    format!("Spiller {}", i + 1)
                } else {
                    trimmed.to_string()
                }
            })
            .collect()
    }

    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            self.handle_key(key);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.cancelled = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.cancelled = true,
            KeyCode::Enter => self.finished = true,

            KeyCode::Left => {
                if self.num_players > MIN_PLAYERS {
                    self.num_players -= 1;
                    self.focus = self.focus.min(self.num_players - 1);
                }
            }
            KeyCode::Right => {
                if self.num_players < MAX_PLAYERS {
                    self.num_players += 1;
                }
            }

            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % self.num_players;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + self.num_players - 1) % self.num_players;
            }

            KeyCode::Backspace => {
                self.names[self.focus].pop();
            }
            KeyCode::Char(c) => {
                let name = &mut self.names[self.focus];
                if name.chars().count() < 20 {
                    name.push(c);
                }
            }

            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let box_area = centered_box(area, 44, 14);

        let block = Block::default()
            .title(" Velkommen til Yatzy ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));
        let inner = block.inner(box_area);
        frame.render_widget(block, box_area);

        let rows = Layout::vertical([
            Constraint::Length(2), // player count
            Constraint::Length(1),
            Constraint::Length(MAX_PLAYERS as u16), // name fields
            Constraint::Min(1),
            Constraint::Length(2), // hints
        ])
        .split(inner);

        let count_line = Line::from(vec![
            Span::styled("Antall spillere: ", self.theme.label_style()),
            Span::raw("◀ "),
            Span::styled(
                self.num_players.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ▶"),
        ]);
        frame.render_widget(Paragraph::new(count_line), rows[0]);

        let mut name_lines: Vec<Line> = Vec::new();
        for i in 0..self.num_players {
            let focused = i == self.focus;
            let marker = if focused { "▸ " } else { "  " };
            let style = if focused {
                self.theme.focused_field_style()
            } else {
                self.theme.label_style()
            };
            name_lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("#{} ", i + 1), self.theme.system_style()),
                Span::styled(self.names[i].clone(), style),
                Span::styled(if focused { "▏" } else { "" }, style),
            ]));
        }
        frame.render_widget(Paragraph::new(name_lines), rows[2]);

        let hints = Paragraph::new(vec![
            Line::from(Span::styled(
                "◀/▶ antall  ·  tab: neste navn  ·  skriv for å endre",
                self.theme.system_style(),
            )),
            Line::from(Span::styled(
                "enter: start spillet  ·  esc: avbryt",
                self.theme.system_style(),
            )),
        ]);
        frame.render_widget(hints, rows[4]);
    }
}

impl Default for SetupScreen {
    fn default() -> Self {
        Self::new()
    }
}
