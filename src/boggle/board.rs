use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use ndarray::Array2;
use rand::Rng;

use super::dice;
use super::util::Position;
use super::{BOARD_SIZE, N_BOGGLE_DICE};
use crate::error::BoggleError;

/// The 4x4 grid of cube faces. Letters are always uppercase ASCII
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoggleBoard {
    state: Array2<char>,
}

impl BoggleBoard {
    /// Builds a board from 16 letters in row-major order. Row separators ('/') and
    /// whitespace are ignored, so both "ABCDEFGHIJKLMNOP" and "ABCD/EFGH/IJKL/MNOP" work
    pub fn from_letters(letters: &str) -> Result<Self, BoggleError> {
        let mut cells = Vec::with_capacity(N_BOGGLE_DICE);
        for c in letters.chars().filter(|c| *c != '/' && !c.is_whitespace()) {
            if !c.is_ascii_alphabetic() {
                return Err(BoggleError::InvalidBoard(format!(
                    "'{}' is not a letter",
                    c
                )));
            }
            cells.push(c.to_ascii_uppercase());
        }

        if cells.len() != N_BOGGLE_DICE {
            return Err(BoggleError::InvalidBoard(format!(
                "expected {} letters, found {}",
                N_BOGGLE_DICE,
                cells.len()
            )));
        }

        let state = Array2::from_shape_vec((BOARD_SIZE, BOARD_SIZE), cells)
            .map_err(|e| BoggleError::InvalidBoard(e.to_string()))?;
        Ok(Self { state })
    }

    /// Reads a board stored as a JSON array of row strings, eg. ["ABCD", "EFGH", "IJKL", "MNOP"]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BoggleError> {
        let path = path.as_ref();
        let mut data = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut data))
            .map_err(|source| BoggleError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let rows: Vec<String> =
            serde_json::from_str(&data).map_err(|source| BoggleError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if rows.len() != BOARD_SIZE || rows.iter().any(|r| r.chars().count() != BOARD_SIZE) {
            return Err(BoggleError::InvalidBoard(format!(
                "{} must hold {} rows of {} letters",
                path.display(),
                BOARD_SIZE,
                BOARD_SIZE
            )));
        }
        Self::from_letters(&rows.concat())
    }

    /// Shakes the standard cubes into a new random board
    pub fn shake<R: Rng>(rng: &mut R) -> Self {
        let letters = dice::roll(rng);
        Self {
            state: Array2::from_shape_fn((BOARD_SIZE, BOARD_SIZE), |(row, col)| {
                letters[row * BOARD_SIZE + col]
            }),
        }
    }

    /// Checks if a (possibly negative) row/col lies on the board
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        let (rows, cols) = self.state.dim();
        row >= 0 && col >= 0 && (row as usize) < rows && (col as usize) < cols
    }

    pub fn letter_at(&self, pos: Position) -> char {
        self.state[[pos.row, pos.col]]
    }

    /// The board as one string per row
    pub fn rows(&self) -> Vec<String> {
        self.state
            .rows()
            .into_iter()
            .map(|row| row.iter().collect())
            .collect()
    }
}

impl std::ops::Index<Position> for BoggleBoard {
    type Output = char;

    fn index(&self, index: Position) -> &Self::Output {
        &self.state[[index.row, index.col]]
    }
}

impl fmt::Display for BoggleBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.state.rows() {
            let line = row
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
