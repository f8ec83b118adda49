//! The score table: every category for every player, with previews of
//! what the current dice would score in still-open categories, and the
//! derived Sum/Bonus/Totalt rows.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};
use yatzy_core::{scoring, Category, Game, ScoreSheet};

use crate::ui::theme::GameTheme;

/// Widget for the shared score table.
pub struct ScoreTableWidget<'a> {
    game: &'a Game,
    selected: Category,
    show_potential: bool,
    theme: &'a GameTheme,
}

impl<'a> ScoreTableWidget<'a> {
    pub fn new(game: &'a Game, theme: &'a GameTheme) -> Self {
        Self {
            game,
            selected: Category::Ones,
            show_potential: false,
            theme,
        }
    }

    /// Category under the cursor.
    pub fn selected(mut self, category: Category) -> Self {
        self.selected = category;
        self
    }

    /// Show potential scores for the current player's open categories.
    pub fn show_potential(mut self, show: bool) -> Self {
        self.show_potential = show;
        self
    }

    fn category_row(&self, category: Category) -> Row<'static> {
        let players = self.game.players();
        let current = self.game.current_index();
        let is_selected = category == self.selected
            && !self.game.is_over()
            && !players[current].sheet().contains(category);

        let label_style = if is_selected {
            self.theme.selected_row_style()
        } else {
            self.theme.label_style()
        };
        let marker = if is_selected { "▸ " } else { "  " };

        let mut cells = vec![Cell::from(Span::styled(
            format!("{marker}{category}"),
            label_style,
        ))];
        for (i, player) in players.iter().enumerate() {
            let span = match player.sheet().score(category) {
                Some(score) => Span::styled(score.to_string(), self.theme.recorded_style()),
                None if i == current && self.show_potential && !self.game.is_over() => Span::styled(
                    format!("({})", self.game.potential_score(category)),
                    self.theme.potential_style(),
                ),
                None => Span::styled("·".to_string(), self.theme.system_style()),
            };
            cells.push(Cell::from(span));
        }
        Row::new(cells)
    }

    fn derived_row(&self, label: &str, value: impl Fn(&ScoreSheet) -> u32) -> Row<'static> {
        let mut cells = vec![Cell::from(Span::styled(
            format!("  {label}"),
            self.theme.derived_style(),
        ))];
        for player in self.game.players() {
            cells.push(Cell::from(Span::styled(
                value(player.sheet()).to_string(),
                self.theme.derived_style(),
            )));
        }
        Row::new(cells)
    }
}

impl Widget for ScoreTableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Poengtavle ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));
        let inner = block.inner(area);
        block.render(area, buf);

        let players = self.game.players();
        let current = self.game.current_index();

        let mut header_cells = vec![Cell::from("")];
        for (i, player) in players.iter().enumerate() {
            let style = if i == current && !self.game.is_over() {
                self.theme.current_player_style()
            } else {
                self.theme.label_style()
            };
            header_cells.push(Cell::from(Span::styled(player.name().to_string(), style)));
        }
        let header = Row::new(header_cells).height(1);

        let mut rows: Vec<Row> = Vec::new();
        for category in Category::UPPER {
            rows.push(self.category_row(category));
        }
        rows.push(self.derived_row("Sum", scoring::upper_sum));
        rows.push(self.derived_row("Bonus", scoring::bonus));
        for category in Category::LOWER {
            rows.push(self.category_row(category));
        }
        rows.push(self.derived_row("Totalt", scoring::grand_total));

        let mut widths = vec![Constraint::Length(18)];
        widths.extend(std::iter::repeat(Constraint::Length(12)).take(players.len()));

        Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .render(inner, buf);
    }
}
