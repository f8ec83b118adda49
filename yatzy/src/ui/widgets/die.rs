//! A single die face with pips, lock marking and roll animation.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};
use yatzy_core::Die;

use crate::ui::theme::GameTheme;

/// Width a die needs on screen (7 pip columns + borders).
pub const DIE_WIDTH: u16 = 9;
/// Height a die needs on screen (3 pip rows + borders).
pub const DIE_HEIGHT: u16 = 5;

/// Widget for one die of the hand.
pub struct DieWidget<'a> {
    die: &'a Die,
    rolling: bool,
    frame: u8,
    theme: &'a GameTheme,
}

impl<'a> DieWidget<'a> {
    pub fn new(die: &'a Die, theme: &'a GameTheme) -> Self {
        Self {
            die,
            rolling: false,
            frame: 0,
            theme,
        }
    }

    /// Show the tumbling animation instead of the face.
    pub fn rolling(mut self, rolling: bool, frame: u8) -> Self {
        self.rolling = rolling;
        self.frame = frame;
        self
    }
}

/// Pip rows for a face value, on a 7x3 grid.
fn pips(value: u8) -> [&'static str; 3] {
    match value {
        1 => ["       ", "   ●   ", "       "],
        2 => [" ●     ", "       ", "     ● "],
        3 => [" ●     ", "   ●   ", "     ● "],
        4 => [" ●   ● ", "       ", " ●   ● "],
        5 => [" ●   ● ", "   ●   ", " ●   ● "],
        6 => [" ● ● ● ", "       ", " ● ● ● "],
        _ => ["       ", "   ?   ", "       "],
    }
}

/// Tumbling placeholder rows while the roll animation runs.
fn tumbling(frame: u8) -> [&'static str; 3] {
    const FRAMES: [[&'static str; 3]; 4] = [
        ["       ", "   ◐   ", "       "],
        ["       ", "   ◓   ", "       "],
        ["       ", "   ◑   ", "       "],
        ["       ", "   ◒   ", "       "],
    ];
    FRAMES[frame as usize % FRAMES.len()]
}

impl Widget for DieWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let locked = self.die.locked;
        let animate = self.rolling && !locked;

        let border_style = if locked {
            Style::default().fg(self.theme.die_locked)
        } else {
            self.theme.border_style(false)
        };

        let block = Block::default()
            .title(format!(" {} ", self.die.id + 1))
            .title_alignment(Alignment::Center)
            .title_bottom(if locked {
                Line::from(" låst ").centered()
            } else {
                Line::from("")
            })
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let face_style = if animate {
            Style::default().fg(self.theme.die_rolling)
        } else if locked {
            Style::default().fg(self.theme.die_locked)
        } else {
            Style::default().fg(self.theme.die_face)
        };

        let rows = if animate {
            tumbling(self.frame)
        } else {
            pips(self.die.value)
        };
        let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
        Paragraph::new(lines)
            .style(face_style)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
