use rand::seq::SliceRandom;
use rand::Rng;

use super::N_BOGGLE_DICE;

/// Faces of the 16 cubes that ship with the standard game
pub const CUBES: [&str; N_BOGGLE_DICE] = [
    "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS", "AOOTTW", "CIMOTU", "DEILRX", "DELRVY",
    "DISTTY", "EEGHNW", "EEINSU", "EHRTVW", "EIOSST", "ELRTTY", "HIMNQU", "HLNNRZ",
];

/// Shakes the cubes: shuffles which cube lands in each cell, then rolls each one so a
/// random face shows. Letters are returned in row-major order.
pub fn roll<R: Rng>(rng: &mut R) -> [char; N_BOGGLE_DICE] {
    let mut cubes = CUBES;
    cubes.shuffle(rng);

    let mut letters = ['A'; N_BOGGLE_DICE];
    for (letter, cube) in letters.iter_mut().zip(cubes.iter()) {
        let faces = cube.as_bytes();
        *letter = faces[rng.gen_range(0..faces.len())] as char;
    }
    letters
}
