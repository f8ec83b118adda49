//! Color theme and styling for the Yatzy TUI.

use ratatui::style::{Color, Modifier, Style};

/// Game UI color theme.
#[derive(Debug, Clone)]
pub struct GameTheme {
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Dice
    pub die_face: Color,
    pub die_locked: Color,
    pub die_rolling: Color,

    // Score table
    pub recorded_score: Color,
    pub potential_score: Color,
    pub derived_row: Color,
    pub current_player: Color,

    pub accent: Color,
    pub winner: Color,
    pub system_text: Color,
}

impl Default for GameTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            die_face: Color::White,
            die_locked: Color::Yellow,
            die_rolling: Color::DarkGray,

            recorded_score: Color::White,
            potential_score: Color::Green,
            derived_row: Color::Cyan,
            current_player: Color::LightGreen,

            accent: Color::LightBlue,
            winner: Color::Yellow,
            system_text: Color::DarkGray,
        }
    }
}

impl GameTheme {
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn focused_field_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn recorded_style(&self) -> Style {
        Style::default().fg(self.recorded_score)
    }

    /// Style for a not-yet-committed score preview.
    pub fn potential_style(&self) -> Style {
        Style::default()
            .fg(self.potential_score)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn derived_style(&self) -> Style {
        Style::default()
            .fg(self.derived_row)
            .add_modifier(Modifier::BOLD)
    }

    pub fn current_player_style(&self) -> Style {
        Style::default()
            .fg(self.current_player)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_row_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn winner_style(&self) -> Style {
        Style::default()
            .fg(self.winner)
            .add_modifier(Modifier::BOLD)
    }

    pub fn system_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::DIM)
    }
}
