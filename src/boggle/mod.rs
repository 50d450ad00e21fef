pub mod board;
pub mod dice;
pub mod dictionary;
pub mod game;
pub mod path;
pub mod score;
pub mod search;
pub mod util;

/// Rows and columns of the (square) board
pub const BOARD_SIZE: usize = 4;
/// Number of cubes on the board
pub const N_BOGGLE_DICE: usize = BOARD_SIZE * BOARD_SIZE;
/// Shortest word either player may score
pub const MIN_WORD_LENGTH: usize = 4;
