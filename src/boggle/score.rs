use serde::Serialize;

/// Points awarded for a word of the given length
pub fn score_word(word_len: usize) -> u32 {
    match word_len {
        0..=4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

/// Receives points as words are credited to each player
pub trait ScoreSink {
    fn add_human_score(&mut self, points: u32);
    fn add_computer_score(&mut self, points: u32);
}

/// Running totals for both players
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub human: u32,
    pub computer: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreSink for Scoreboard {
    fn add_human_score(&mut self, points: u32) {
        self.human += points;
    }

    fn add_computer_score(&mut self, points: u32) {
        self.computer += points;
    }
}
