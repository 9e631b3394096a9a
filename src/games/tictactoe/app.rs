use crate::core::game::{Flow, Game};
use crate::games::tictactoe::controller::GameController;
use crate::games::tictactoe::renderer::{self, ScreenLayout};
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

/// Terminal front end for one game: turns keys and clicks into controller
/// calls and draws the result.
pub struct TicTacToeApp {
    controller: GameController,
    cursor: usize,
}

impl TicTacToeApp {
    /// Takes a fresh controller and starts its first turn
    pub fn new(mut controller: GameController) -> Self {
        controller.start();
        Self {
            controller,
            cursor: 4,
        }
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn select(&mut self, index: usize) {
        self.cursor = index;
        if !self.controller.select_cell(index) {
            debug!(index, "Selection had no effect");
        }
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let row = (self.cursor / 3) as isize;
        let col = (self.cursor % 3) as isize;
        let row = (row + d_row).rem_euclid(3) as usize;
        let col = (col + d_col).rem_euclid(3) as usize;
        self.cursor = row * 3 + col;
    }
}

impl Game for TicTacToeApp {
    fn handle_input(&mut self, event: &Event, area: Rect) -> Flow {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') => return Flow::Quit,
                KeyCode::Char('r') | KeyCode::Char('R') => self.controller.reset(),
                KeyCode::Char(c @ '1'..='9') => self.select(c as usize - '1' as usize),
                KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
                KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
                KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
                KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
                KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
                _ => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = ScreenLayout::new(area).cell_at(mouse.column, mouse.row) {
                    self.select(index);
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        renderer::render(frame, &self.controller, self.cursor);
    }
}
