//! End-to-end games through the public controller API.

use lanterm_tictactoe::games::tictactoe::{
    Board, Cell, ComputerPlayer, GameController, GameState, GameStatus, HumanPlayer, Player,
    Symbol, TurnEvent,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// O that plays a fixed sequence
struct Sequence(Vec<usize>);

impl Player for Sequence {
    fn name(&self) -> &str {
        "sequence"
    }

    fn produce_move(&mut self, _board: &Board, _event: TurnEvent) -> Option<usize> {
        (!self.0.is_empty()).then(|| self.0.remove(0))
    }
}

fn vs_computer(seed: u64) -> GameController {
    let mut game = GameController::new(
        Box::new(HumanPlayer::new("You")),
        Box::new(ComputerPlayer::with_seed("CPU", seed)),
    );
    game.start();
    game
}

fn count(board: &Board, symbol: Symbol) -> usize {
    board
        .cells()
        .iter()
        .filter(|cell| **cell == Cell::Occupied(symbol))
        .count()
}

#[test]
fn test_x_wins_top_row() {
    let mut game = GameController::new(Box::new(HumanPlayer::new("You")), Box::new(Sequence(vec![3, 4])));
    game.start();
    for index in [0, 1, 2] {
        assert!(game.select_cell(index));
    }
    assert_eq!(game.board().check_winner(), Some(Symbol::X));
    assert_eq!(game.status_line(), "X wins!");
}

#[test]
fn test_reset_after_three_moves() {
    let mut game = GameController::new(Box::new(HumanPlayer::new("You")), Box::new(Sequence(vec![4])));
    game.start();
    game.select_cell(0);
    game.select_cell(8);
    assert_eq!(game.board().occupied_count(), 3);

    game.reset();
    assert_eq!(game.status_line(), "X's turn");
    assert!(game.board().cells().iter().all(|cell| cell.is_empty()));
    assert_eq!(game.state(), GameState::default());
    assert_eq!(game.highlight(), None);
}

#[test]
fn test_random_games_respect_invariants() {
    let mut clicks = StdRng::seed_from_u64(2024);

    for seed in 0..100 {
        let mut game = vs_computer(seed);
        let mut guard = 0;

        while !game.status().is_terminal() {
            guard += 1;
            assert!(guard < 1_000, "seed {seed} never finished");

            // Stray clicks on occupied or off-board cells are part of the mix.
            let before = game.turn_count();
            let index = clicks.random_range(0..12);
            let legal = game.board().cell_at(index).map(|c| c.is_empty()).unwrap_or(false);
            assert_eq!(game.select_cell(index), legal);
            if !legal {
                assert_eq!(game.turn_count(), before);
            }

            let board = game.board();
            let (x, o) = (count(board, Symbol::X), count(board, Symbol::O));
            assert!(x == o || x == o + 1, "seed {seed}: {x} X vs {o} O");
            assert_eq!(game.turn_count() as usize, x + o);
        }

        let final_board = game.board().clone();
        match game.status() {
            GameStatus::Won(symbol) => {
                assert_eq!(final_board.check_winner(), Some(symbol));
                let line = game.highlight().expect("winner has a line");
                assert!(line.iter().all(|&i| final_board.cell_at(i) == Ok(Cell::Occupied(symbol))));
                assert_eq!(game.status_line(), format!("{symbol} wins!"));
            }
            GameStatus::Draw => {
                assert!(final_board.is_full());
                assert_eq!(final_board.check_winner(), None);
                assert_eq!(game.status_line(), "Draw!");
            }
            GameStatus::InProgress => unreachable!(),
        }

        for index in 0..9 {
            assert!(!game.select_cell(index));
        }
        assert_eq!(game.board(), &final_board);
    }
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut game = vs_computer(seed);
        for index in 0..9 {
            game.select_cell(index);
        }
        game.snapshot()
    };
    assert_eq!(play(11), play(11));
}
