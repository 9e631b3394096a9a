use crate::games::tictactoe::error::{BoardError, ParseBoardError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const CELL_COUNT: usize = 9;

/// A winning line as three cell indices
pub type Line = [usize; 3];

/// Rows, then columns, then diagonals. The order doubles as the tie-break
/// when a (malformed) board satisfies more than one line.
pub const WINNING_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Even turns belong to X, odd turns to O
    pub fn for_turn(turn_count: u32) -> Self {
        if turn_count % 2 == 0 {
            Symbol::X
        } else {
            Symbol::O
        }
    }

    /// Seat index of the player holding this symbol
    pub fn seat(self) -> usize {
        match self {
            Symbol::X => 0,
            Symbol::O => 1,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Symbol),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }
}

/// The 3x3 grid, row-major.
///
/// A cell is written at most once per game: `place` refuses to overwrite,
/// and only `clear` (the reset path) returns cells to `Empty`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell_at(&self, index: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::OutOfRange(index))
    }

    /// Writes `symbol` into an empty cell. Turn bookkeeping is the caller's job.
    pub fn place(&mut self, index: usize, symbol: Symbol) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::OutOfRange(index))?;
        if !cell.is_empty() {
            return Err(BoardError::CellOccupied(index));
        }
        *cell = Cell::Occupied(symbol);
        Ok(())
    }

    /// First line (in `WINNING_LINES` order) held entirely by one symbol
    pub fn winning_line(&self) -> Option<(Symbol, Line)> {
        WINNING_LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            let symbol = self.cells[a].symbol()?;
            (self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a])
                .then_some((symbol, line))
        })
    }

    pub fn check_winner(&self) -> Option<Symbol> {
        self.winning_line().map(|(symbol, _)| symbol)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Indices of empty cells, ascending
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }
}

/// Parses layouts such as `"XOX/O.O/..X"`. `.`, `-` and `_` mark empty cells;
/// whitespace and `/` are separators.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Cell::Occupied(Symbol::X)),
                'O' => Ok(Cell::Occupied(Symbol::O)),
                '.' | '-' | '_' => Ok(Cell::Empty),
                other => Err(ParseBoardError::UnknownSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cells: [Cell; CELL_COUNT] = cells
            .try_into()
            .map_err(|rest: Vec<Cell>| ParseBoardError::WrongLength(rest.len()))?;
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Occupied(symbol) => write!(f, "{symbol}")?,
                }
            }
        }
        Ok(())
    }
}
