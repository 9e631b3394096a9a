use crate::games::tictactoe::board::{Board, Cell, Line, Symbol, CELL_COUNT};
use crate::games::tictactoe::player::{Player, TurnEvent};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Symbol),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub turn_count: u32,
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            turn_count: 0,
            status: GameStatus::InProgress,
        }
    }
}

impl GameState {
    pub fn active_symbol(&self) -> Symbol {
        Symbol::for_turn(self.turn_count)
    }
}

/// Serializable picture of a game, printed by `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub cells: [Cell; CELL_COUNT],
    pub turn_count: u32,
    pub status: GameStatus,
    pub highlight: Option<Line>,
    pub message: String,
}

/// Turn sequencing for one game.
///
/// Seat 0 plays X and seat 1 plays O. Each instance is independent; nothing
/// about the game lives outside this struct.
pub struct GameController {
    board: Board,
    players: [Box<dyn Player>; 2],
    state: GameState,
    highlight: Option<Line>,
}

impl GameController {
    pub fn new(x: Box<dyn Player>, o: Box<dyn Player>) -> Self {
        Self {
            board: Board::new(),
            players: [x, o],
            state: GameState::default(),
            highlight: None,
        }
    }

    /// Picks up a game from an arbitrary position. The turn count is the
    /// number of occupied cells and terminal conditions are evaluated at once.
    pub fn from_board(board: Board, x: Box<dyn Player>, o: Box<dyn Player>) -> Self {
        let turn_count = board.occupied_count() as u32;
        let mut controller = Self {
            board,
            players: [x, o],
            state: GameState {
                turn_count,
                status: GameStatus::InProgress,
            },
            highlight: None,
        };
        controller.run_turns();
        controller
    }

    /// Enters the turn loop from the initial position
    #[instrument(skip(self), fields(x = self.players[0].name(), o = self.players[1].name()))]
    pub fn start(&mut self) {
        info!("Game started");
        self.run_turns();
    }

    /// Routes a "cell selected" input to the active player.
    ///
    /// Returns whether the selection became a placement. Input is dropped once
    /// the game is over or while the active player does not take input.
    #[instrument(skip(self), fields(turn = self.state.turn_count))]
    pub fn select_cell(&mut self, index: usize) -> bool {
        if self.state.status.is_terminal() {
            debug!("Game over, ignoring selection");
            return false;
        }
        let seat = self.state.active_symbol().seat();
        if !self.players[seat].awaits_input() {
            debug!("Active player does not take input");
            return false;
        }

        let Some(choice) = self.players[seat].produce_move(&self.board, TurnEvent::CellSelected(index)) else {
            return false;
        };
        if !self.apply(choice) {
            return false;
        }
        self.run_turns();
        true
    }

    /// Clears the board and starts over as X
    pub fn reset(&mut self) {
        info!(turn = self.state.turn_count, status = ?self.state.status, "Resetting game");
        self.board.clear();
        self.state = GameState::default();
        self.highlight = None;
        self.run_turns();
    }

    /// Evaluates terminal conditions and lets players move until the game ends
    /// or the active player needs input.
    fn run_turns(&mut self) {
        while !self.state.status.is_terminal() {
            if let Some((winner, line)) = self.board.winning_line() {
                info!(%winner, ?line, turns = self.state.turn_count, "Game won");
                self.state.status = GameStatus::Won(winner);
                self.highlight = Some(line);
                return;
            }
            if self.board.is_full() {
                info!(turns = self.state.turn_count, "Game drawn");
                self.state.status = GameStatus::Draw;
                return;
            }

            let seat = self.state.active_symbol().seat();
            let choice = self.players[seat].produce_move(&self.board, TurnEvent::Activated);
            match choice {
                Some(index) if self.apply(index) => {}
                _ => return,
            }
        }
    }

    /// Writes the active symbol and advances the turn. A rejected write
    /// leaves the turn where it was.
    fn apply(&mut self, index: usize) -> bool {
        let symbol = self.state.active_symbol();
        match self.board.place(index, symbol) {
            Ok(()) => {
                debug!(%symbol, index, turn = self.state.turn_count, "Placed symbol");
                self.state.turn_count += 1;
                true
            }
            Err(e) => {
                warn!(%symbol, error = %e, "Rejected placement");
                false
            }
        }
    }

    /// The single line shown to the user
    pub fn status_line(&self) -> String {
        match self.state.status {
            GameStatus::InProgress => format!("{}'s turn", self.state.active_symbol()),
            GameStatus::Won(symbol) => format!("{symbol} wins!"),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }

    /// True while the game is waiting on the user
    pub fn awaiting_input(&self) -> bool {
        !self.state.status.is_terminal()
            && self.players[self.state.active_symbol().seat()].awaits_input()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn turn_count(&self) -> u32 {
        self.state.turn_count
    }

    pub fn highlight(&self) -> Option<Line> {
        self.highlight
    }

    pub fn player_name(&self, symbol: Symbol) -> &str {
        self.players[symbol.seat()].name()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cells: *self.board.cells(),
            turn_count: self.state.turn_count,
            status: self.state.status,
            highlight: self.highlight,
            message: self.status_line(),
        }
    }
}
