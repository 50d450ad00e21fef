use std::fmt;

use super::{BOARD_SIZE, N_BOGGLE_DICE};

/// Row/column offsets of the 8 neighbours of a cube, in the order they are explored:
/// top-left, top, top-right, left, right, bottom-left, bottom, bottom-right
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Every cube on the board in row-major order. Each one is used as the first letter of a search
pub const START_CELLS: [Position; N_BOGGLE_DICE] = start_cells();

const fn start_cells() -> [Position; N_BOGGLE_DICE] {
    let mut cells = [Position { row: 0, col: 0 }; N_BOGGLE_DICE];
    let mut i = 0;
    while i < N_BOGGLE_DICE {
        cells[i] = Position {
            row: i / BOARD_SIZE,
            col: i % BOARD_SIZE,
        };
        i += 1;
    }
    cells
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position one step away along the given offset, or None if it falls off the board
    pub fn offset(&self, (d_row, d_col): (isize, isize)) -> Option<Position> {
        let row = self.row as isize + d_row;
        let col = self.col as isize + d_col;
        if row < 0 || col < 0 || row >= BOARD_SIZE as isize || col >= BOARD_SIZE as isize {
            return None;
        }
        Some(Position {
            row: row as usize,
            col: col as usize,
        })
    }

    /// All the positions touching this one, including diagonals
    pub fn adjacent(&self) -> impl Iterator<Item = Position> {
        let origin = *self;
        DIRECTIONS.into_iter().filter_map(move |d| origin.offset(d))
    }

    /// Checks if two positions touch (horizontally, vertically or diagonally)
    pub fn is_adjacent(&self, other: Position) -> bool {
        *self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    /// Converts the row/col to a 1d index
    pub fn as_index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
