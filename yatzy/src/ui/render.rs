//! Render orchestration for the Yatzy TUI.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use yatzy_core::HAND_SIZE;

use crate::app::App;
use crate::ui::centered_box;
use crate::ui::widgets::die::{DIE_HEIGHT, DIE_WIDTH};
use crate::ui::widgets::{DieWidget, ScoreTableWidget};

/// Main render function.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = Layout::vertical([
        Constraint::Length(1),          // title bar
        Constraint::Length(DIE_HEIGHT), // dice row
        Constraint::Length(4),          // advice panel
        Constraint::Min(10),            // score table
        Constraint::Length(1),          // status line
        Constraint::Length(1),          // hotkey bar
    ])
    .split(area);

    render_title_bar(frame, app, layout[0]);
    render_dice_row(frame, app, layout[1]);
    render_advice(frame, app, layout[2]);
    render_table(frame, app, layout[3]);
    render_status(frame, app, layout[4]);
    render_hotkeys(frame, app, layout[5]);

    if app.show_winner {
        render_winner_overlay(frame, app, area);
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let mut spans = vec![
        Span::styled(
            " Norsk Yatzy ",
            app.theme.label_style().add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", app.theme.system_style()),
    ];
    if game.is_over() {
        spans.push(Span::styled("Ferdig ", app.theme.winner_style()));
    } else {
        spans.push(Span::styled(
            format!("{} sin tur ", game.current_player().name()),
            app.theme.current_player_style(),
        ));
        spans.push(Span::styled("│ ", app.theme.system_style()));
        spans.push(Span::styled(
            format!("Kast igjen: {} ", game.rolls_left()),
            app.theme.label_style(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_dice_row(frame: &mut Frame, app: &App, area: Rect) {
    let slots = Layout::horizontal([Constraint::Length(DIE_WIDTH); HAND_SIZE])
        .flex(Flex::Center)
        .spacing(1)
        .split(area);

    let animation_frame = app.rolling.unwrap_or(0);
    for (die, slot) in app.game.hand().dice().iter().zip(slots.iter()) {
        let widget = DieWidget::new(die, &app.theme).rolling(app.is_rolling(), animation_frame);
        frame.render_widget(widget, *slot);
    }
}

fn render_advice(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Råd ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(app.advice_pending));

    let text = if app.advice_pending {
        Line::from(Span::styled("Tenker...", app.theme.system_style()))
    } else {
        match &app.advice {
            Some(advice) => Line::from(Span::styled(advice.clone(), app.theme.label_style())),
            None => Line::from(Span::styled(
                "Trykk a for å få råd fra AI-eksperten",
                app.theme.system_style(),
            )),
        }
    };

    frame.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: true }), area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    // Potential scores only mean something once this turn has a roll on
    // the table and the reveal animation is done.
    let show_potential =
        app.game.rolls_left() < yatzy_core::ROLLS_PER_TURN && !app.is_rolling();
    let widget = ScoreTableWidget::new(&app.game, &app.theme)
        .selected(app.selected_category())
        .show_potential(show_potential);
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let text = match app.status_message() {
        Some(message) => Span::styled(format!(" {message}"), app.theme.label_style()),
        None if app.game.rolls_left() == yatzy_core::ROLLS_PER_TURN => Span::styled(
            " Kast for å starte runden",
            app.theme.system_style(),
        ),
        None => Span::styled(
            " Trykk 1-5 for å låse/låse opp terninger",
            app.theme.system_style(),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(text)), area);
}

fn render_hotkeys(frame: &mut Frame, app: &App, area: Rect) {
    let hints =
        " r: kast  ·  1-5: lås  ·  ↑/↓: velg  ·  enter: velg poengsum  ·  a: råd  ·  n: nytt spill  ·  e: nye spillere  ·  q: avslutt";
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, app.theme.system_style()))),
        area,
    );
}

/// The end-of-game overlay: winner, final score, restart hint.
fn render_winner_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(winner) = app.game.winner() else {
        return;
    };

    let box_area = centered_box(area, 44, 9);
    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .title(" Gratulerer! ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(app.theme.winner_style());
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Vinneren av årets Yatzy er:",
            app.theme.label_style(),
        )),
        Line::from(Span::styled(
            format!("★ {} ★", winner.name()),
            app.theme.winner_style(),
        )),
        Line::from(Span::styled(
            format!("{} poeng", winner.grand_total()),
            app.theme.label_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "n: start nytt spill  ·  esc: se resultattavle",
            app.theme.system_style(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}
