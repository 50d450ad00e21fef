use std::collections::{BTreeSet, HashSet};

use log::info;
use serde::Serialize;

use super::board::BoggleBoard;
use super::dictionary::Dictionary;
use super::score::{score_word, Scoreboard};
use super::search::{computer_word_search, credit_human_word, normalize_word};
use super::util::Position;
use crate::error::WordRejection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Winner {
    Human,
    Computer,
    Tie,
}

/// Final state of a round, ready to print or serialize
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub board: Vec<String>,
    pub human_words: Vec<String>,
    pub computer_words: Vec<String>,
    pub scores: Scoreboard,
    pub winner: Winner,
}

/// One round: the human enters words first, then the computer takes everything left
pub struct BoggleGame<'a, D: Dictionary + ?Sized> {
    board: BoggleBoard,
    dictionary: &'a D,
    min_word_length: usize,
    /// Words the human found, in the order they were entered
    human_words: Vec<String>,
    human_set: HashSet<String>,
    computer_words: BTreeSet<String>,
    computer_done: bool,
    scoreboard: Scoreboard,
}

impl<'a, D: Dictionary + ?Sized> BoggleGame<'a, D> {
    pub fn new(board: BoggleBoard, dictionary: &'a D, min_word_length: usize) -> Self {
        Self {
            board,
            dictionary,
            min_word_length,
            human_words: Vec::new(),
            human_set: HashSet::new(),
            computer_words: BTreeSet::new(),
            computer_done: false,
            scoreboard: Scoreboard::new(),
        }
    }

    pub fn board(&self) -> &BoggleBoard {
        &self.board
    }

    pub fn scores(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Checks a word entered by the human and credits it if it is valid.
    /// Returns the cubes that spell it.
    pub fn play_human(&mut self, word: &str) -> Result<Vec<Position>, WordRejection> {
        let word = normalize_word(word);
        if word.len() < self.min_word_length {
            return Err(WordRejection::TooShort {
                word,
                min: self.min_word_length,
            });
        }
        if self.human_set.contains(&word) {
            return Err(WordRejection::AlreadyFound(word));
        }
        if !self.dictionary.contains_word(&word) {
            return Err(WordRejection::NotInDictionary(word));
        }
        let path = match credit_human_word(
            &self.board,
            self.dictionary,
            &word,
            self.min_word_length,
            &mut self.scoreboard,
        ) {
            Some(path) => path,
            None => return Err(WordRejection::NotOnBoard(word)),
        };

        info!("Human scored {} for {}", score_word(path.len()), word);
        self.human_set.insert(word.clone());
        self.human_words.push(word);
        Ok(path)
    }

    /// Lets the computer find every remaining word on the board. The computer only plays once
    pub fn computer_turn(&mut self) -> &BTreeSet<String> {
        if self.computer_done {
            return &self.computer_words;
        }
        let found = computer_word_search(
            &self.board,
            self.dictionary,
            &self.human_set,
            self.min_word_length,
            &mut self.scoreboard,
        );
        info!(
            "Computer found {} words for {} points",
            found.len(),
            self.scoreboard.computer
        );
        self.computer_words = found;
        self.computer_done = true;
        &self.computer_words
    }

    pub fn summary(&self) -> GameSummary {
        let scores = self.scoreboard;
        let winner = match scores.human.cmp(&scores.computer) {
            std::cmp::Ordering::Greater => Winner::Human,
            std::cmp::Ordering::Less => Winner::Computer,
            std::cmp::Ordering::Equal => Winner::Tie,
        };
        GameSummary {
            board: self.board.rows(),
            human_words: self.human_words.clone(),
            computer_words: self.computer_words.iter().cloned().collect(),
            scores,
            winner,
        }
    }
}
