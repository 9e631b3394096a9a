use crate::games::tictactoe::board::Board;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::{debug, error};

/// What the controller is asking a player to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// The player's turn just started
    Activated,
    /// The user picked a cell while this player was active
    CellSelected(usize),
}

/// A seat at the table. The controller only ever talks to players through
/// this trait and performs the board write itself.
pub trait Player {
    fn name(&self) -> &str;

    /// Returns the cell to play, or `None` if the player has nothing to
    /// offer for this event (waiting for input, or no legal move).
    fn produce_move(&mut self, board: &Board, event: TurnEvent) -> Option<usize>;

    /// Whether this player's moves come from user input
    fn awaits_input(&self) -> bool {
        false
    }
}

/// Plays whatever empty cell the user selects.
///
/// Nothing is buffered between calls: a selection either becomes this turn's
/// move or is dropped, so a reset can never replay a stale click.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn produce_move(&mut self, board: &Board, event: TurnEvent) -> Option<usize> {
        match event {
            TurnEvent::Activated => None,
            TurnEvent::CellSelected(index) => match board.cell_at(index) {
                Ok(cell) if cell.is_empty() => Some(index),
                Ok(_) => {
                    debug!(player = %self.name, index, "Ignoring click on occupied cell");
                    None
                }
                Err(e) => {
                    debug!(player = %self.name, error = %e, "Ignoring click outside the board");
                    None
                }
            },
        }
    }

    fn awaits_input(&self) -> bool {
        true
    }
}

/// Picks uniformly at random among the empty cells.
pub struct ComputerPlayer {
    name: String,
    rng: StdRng,
}

impl ComputerPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible opponent for a given seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn produce_move(&mut self, board: &Board, _event: TurnEvent) -> Option<usize> {
        let available = board.empty_cells();
        let Some(&choice) = available.choose(&mut self.rng) else {
            error!(player = %self.name, "Activated on a full board, no legal move");
            return None;
        };
        debug!(player = %self.name, choice, candidates = available.len(), "Computer chose cell");
        Some(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::Symbol;
    use rand::Rng;

    #[test]
    fn test_human_waits_for_selection() {
        let mut human = HumanPlayer::new("You");
        let board = Board::new();
        assert_eq!(human.produce_move(&board, TurnEvent::Activated), None);
        assert_eq!(human.produce_move(&board, TurnEvent::CellSelected(4)), Some(4));
        assert!(human.awaits_input());
    }

    #[test]
    fn test_human_ignores_occupied_and_out_of_range() {
        let mut human = HumanPlayer::new("You");
        let board: Board = "X........".parse().unwrap();
        assert_eq!(human.produce_move(&board, TurnEvent::CellSelected(0)), None);
        assert_eq!(human.produce_move(&board, TurnEvent::CellSelected(9)), None);
    }

    #[test]
    fn test_computer_only_picks_empty_cells() {
        let mut layout_rng = StdRng::seed_from_u64(7);
        for seed in 0..200 {
            let mut board = Board::new();
            let fill = layout_rng.random_range(0..9);
            for _ in 0..fill {
                let empty = board.empty_cells();
                let index = empty[layout_rng.random_range(0..empty.len())];
                let symbol = if layout_rng.random_bool(0.5) { Symbol::X } else { Symbol::O };
                board.place(index, symbol).unwrap();
            }

            let mut computer = ComputerPlayer::with_seed("CPU", seed);
            let choice = computer
                .produce_move(&board, TurnEvent::Activated)
                .expect("board has empty cells");
            assert!(board.empty_cells().contains(&choice), "seed {seed} picked {choice}");
        }
    }

    #[test]
    fn test_computer_covers_every_candidate() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let mut computer = ComputerPlayer::with_seed("CPU", 42);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..500 {
            seen.extend(computer.produce_move(&board, TurnEvent::Activated));
        }
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), board.empty_cells());
    }

    #[test]
    fn test_computer_on_full_board_is_noop() {
        let board: Board = "XOX/OXO/OXO".parse().unwrap();
        let mut computer = ComputerPlayer::with_seed("CPU", 1);
        assert_eq!(computer.produce_move(&board, TurnEvent::Activated), None);
        assert!(!computer.awaits_input());
    }

    #[test]
    fn test_seeded_computers_agree() {
        let board = Board::new();
        let mut a = ComputerPlayer::with_seed("A", 99);
        let mut b = ComputerPlayer::with_seed("B", 99);
        for _ in 0..10 {
            assert_eq!(
                a.produce_move(&board, TurnEvent::Activated),
                b.produce_move(&board, TurnEvent::Activated)
            );
        }
    }
}
