use crate::games::tictactoe::board::{Cell, Symbol, CELL_COUNT};
use crate::games::tictactoe::controller::{GameController, GameStatus};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

const HELP: &str = "1-9 / arrows+Enter / click: play   r: reset   q, Esc: quit";

/// Where everything goes for a given terminal area. Drawing and mouse
/// hit-testing both derive from this so they cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub cells: [Rect; CELL_COUNT],
    pub status: Rect,
    pub help: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let [title, _, board_row, _, status, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT * 3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        let [board] = Layout::horizontal([Constraint::Length(CELL_WIDTH * 3)])
            .flex(Flex::Center)
            .areas(board_row);

        let rows: [Rect; 3] = Layout::vertical([Constraint::Length(CELL_HEIGHT); 3]).areas(board);
        let mut cells = [Rect::default(); CELL_COUNT];
        for (r, row) in rows.into_iter().enumerate() {
            let columns: [Rect; 3] = Layout::horizontal([Constraint::Length(CELL_WIDTH); 3]).areas(row);
            cells[r * 3..r * 3 + 3].copy_from_slice(&columns);
        }

        Self {
            title,
            cells,
            status,
            help,
        }
    }

    /// Board cell under a terminal position
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.cells.iter().position(|rect| rect.contains(position))
    }
}

fn symbol_style(symbol: Symbol) -> Style {
    let color = match symbol {
        Symbol::X => Color::Red,
        Symbol::O => Color::Blue,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Draws the whole screen. `cursor` is the keyboard-selected cell.
pub fn render(frame: &mut Frame, game: &GameController, cursor: usize) {
    let layout = ScreenLayout::new(frame.area());
    let is_highlighted = |index: usize| game.highlight().is_some_and(|line| line.contains(&index));

    let title = format!(
        "TIC-TAC-TOE  {} (X) vs {} (O)",
        game.player_name(Symbol::X),
        game.player_name(Symbol::O)
    );
    frame.render_widget(
        Paragraph::new(title)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan)),
        layout.title,
    );

    for (index, (cell, area)) in game.board().cells().iter().zip(layout.cells).enumerate() {
        let (text, mut style) = match cell {
            Cell::Empty => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
            Cell::Occupied(symbol) => (symbol.to_string(), symbol_style(*symbol)),
        };
        if is_highlighted(index) {
            style = style.bg(Color::Green);
        }

        let border = if game.awaiting_input() && index == cursor {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let widget = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_style(border));
        frame.render_widget(widget, area);
    }

    let status_style = match game.status() {
        GameStatus::InProgress => Style::default(),
        GameStatus::Won(_) => Style::default().fg(Color::Green),
        GameStatus::Draw => Style::default().fg(Color::Yellow),
    };
    frame.render_widget(
        Paragraph::new(game.status_line())
            .alignment(Alignment::Center)
            .style(status_style.add_modifier(Modifier::BOLD)),
        layout.status,
    );

    frame.render_widget(
        Paragraph::new(HELP)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        layout.help,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_form_a_grid() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        for (index, rect) in layout.cells.iter().enumerate() {
            assert_eq!((rect.width, rect.height), (CELL_WIDTH, CELL_HEIGHT));
            if index % 3 > 0 {
                assert_eq!(rect.x, layout.cells[index - 1].right());
                assert_eq!(rect.y, layout.cells[index - 1].y);
            }
            if index >= 3 {
                assert_eq!(rect.y, layout.cells[index - 3].bottom());
            }
        }
        assert!(layout.title.bottom() <= layout.cells[0].y);
        assert!(layout.status.y >= layout.cells[8].bottom());
    }

    #[test]
    fn test_hit_testing() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        for (index, rect) in layout.cells.iter().enumerate() {
            let center = (rect.x + rect.width / 2, rect.y + rect.height / 2);
            assert_eq!(layout.cell_at(center.0, center.1), Some(index));
        }
        assert_eq!(layout.cell_at(0, 0), None);
        assert_eq!(layout.cell_at(layout.status.x, layout.status.y), None);
    }
}
