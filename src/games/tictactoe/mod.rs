//! Tic-tac-toe against a random-move computer opponent.
//!
//! `board` and `controller` hold the rules and turn sequencing and know
//! nothing about terminals. `app` and `renderer` adapt them to the engine.

pub mod app;
pub mod board;
pub mod controller;
pub mod error;
pub mod player;
pub mod renderer;

pub use app::TicTacToeApp;
pub use board::{Board, Cell, Symbol, WINNING_LINES};
pub use controller::{GameController, GameSnapshot, GameState, GameStatus};
pub use error::{BoardError, ParseBoardError};
pub use player::{ComputerPlayer, HumanPlayer, Player, TurnEvent};
