use std::collections::{BTreeSet, HashSet};
use std::ops::ControlFlow;

use log::{debug, trace};

use super::board::BoggleBoard;
use super::dictionary::Dictionary;
use super::path::{PathFinder, Visit};
use super::score::{score_word, ScoreSink};
use super::util::Position;

/// Strips surrounding whitespace (including a stray `\r` from line input) and uppercases
pub fn normalize_word(word: &str) -> String {
    word.trim().to_ascii_uppercase()
}

/// Finds the first path (in search order) spelling `word`, if the word is long enough
/// and in the dictionary. Nothing is scored.
pub fn locate_word<D>(
    board: &BoggleBoard,
    dictionary: &D,
    word: &str,
    min_length: usize,
) -> Option<Vec<Position>>
where
    D: Dictionary + ?Sized,
{
    let target = normalize_word(word);
    if target.len() < min_length || !dictionary.contains_word(&target) {
        return None;
    }

    let mut found = None;
    let finder = PathFinder::new(board, dictionary);
    let _ = finder.explore_all(|path| {
        if path.word() == target {
            found = Some(path.cells().to_vec());
            Visit::Stop
        } else if target.starts_with(path.word()) {
            Visit::Continue
        } else {
            // The dictionary allows this branch but it can never spell the target
            Visit::Prune
        }
    });
    found
}

/// Traces the human's word on the board and credits it exactly once if it is there.
/// Returns the path that was found.
pub fn credit_human_word<D, S>(
    board: &BoggleBoard,
    dictionary: &D,
    word: &str,
    min_length: usize,
    scores: &mut S,
) -> Option<Vec<Position>>
where
    D: Dictionary + ?Sized,
    S: ScoreSink + ?Sized,
{
    let path = locate_word(board, dictionary, word, min_length)?;
    trace!("Found {} along {:?}", word, path);
    scores.add_human_score(score_word(path.len()));
    Some(path)
}

/// Checks if the human's word can be traced on the board. If it can, the human is
/// credited for it exactly once.
pub fn human_word_search<D, S>(
    board: &BoggleBoard,
    dictionary: &D,
    word: &str,
    min_length: usize,
    scores: &mut S,
) -> bool
where
    D: Dictionary + ?Sized,
    S: ScoreSink + ?Sized,
{
    credit_human_word(board, dictionary, word, min_length, scores).is_some()
}

/// Finds every word on the board the human hasn't already claimed. Each distinct word is
/// credited to the computer once, no matter how many paths spell it.
pub fn computer_word_search<D, S>(
    board: &BoggleBoard,
    dictionary: &D,
    human_words: &HashSet<String>,
    min_length: usize,
    scores: &mut S,
) -> BTreeSet<String>
where
    D: Dictionary + ?Sized,
    S: ScoreSink + ?Sized,
{
    let mut found_words = BTreeSet::new();
    let finder = PathFinder::new(board, dictionary);
    let flow = finder.explore_all(|path| {
        let word = path.word();
        if path.depth() >= min_length
            && dictionary.contains_word(word)
            && !human_words.contains(word)
            && !found_words.contains(word)
        {
            found_words.insert(word.to_string());
            scores.add_computer_score(score_word(word.len()));
        }
        Visit::Continue
    });
    debug_assert_eq!(flow, ControlFlow::Continue(()));

    debug!("Computer found {} words", found_words.len());
    found_words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boggle::dictionary::Lexicon;
    use crate::boggle::score::Scoreboard;
    use crate::boggle::util::START_CELLS;
    use crate::boggle::MIN_WORD_LENGTH;

    fn alphabet_board() -> BoggleBoard {
        BoggleBoard::from_letters("ABCD/EFGH/IJKL/MNOP").unwrap()
    }

    fn lexicon(words: &[&str]) -> Lexicon {
        Lexicon::from_words(words.iter()).unwrap()
    }

    /// Every word spelled by any simple path up to `max_length` cubes long, checking each
    /// path against the dictionary without any prefix pruning
    fn brute_force(
        board: &BoggleBoard,
        dict: &Lexicon,
        min_length: usize,
        max_length: usize,
    ) -> BTreeSet<String> {
        fn walk(
            board: &BoggleBoard,
            dict: &Lexicon,
            bounds: (usize, usize),
            pos: Position,
            path: &mut Vec<Position>,
            out: &mut BTreeSet<String>,
        ) {
            path.push(pos);
            let word: String = path.iter().map(|p| board[*p]).collect();
            if word.len() >= bounds.0 && dict.contains_word(&word) {
                out.insert(word);
            }
            if path.len() < bounds.1 {
                for next in pos.adjacent() {
                    if !path.contains(&next) {
                        walk(board, dict, bounds, next, path, out);
                    }
                }
            }
            path.pop();
        }

        let mut out = BTreeSet::new();
        for start in START_CELLS {
            walk(
                board,
                dict,
                (min_length, max_length),
                start,
                &mut Vec::new(),
                &mut out,
            );
        }
        out
    }

    #[test]
    fn test_human_finds_diagonal_word() {
        let board = alphabet_board();
        let dict = lexicon(&["ABEF"]);
        let mut scores = Scoreboard::new();

        assert!(human_word_search(&board, &dict, "ABEF", MIN_WORD_LENGTH, &mut scores));
        assert_eq!(scores.human, 1);
        assert!(!human_word_search(&board, &dict, "ABCX", MIN_WORD_LENGTH, &mut scores));
        assert!(!human_word_search(&board, &dict, "AB", MIN_WORD_LENGTH, &mut scores));
        assert_eq!(scores.human, 1);
        assert_eq!(scores.computer, 0);
    }

    #[test]
    fn test_padded_word_is_trimmed() {
        let board = alphabet_board();
        let dict = lexicon(&["ABEF"]);
        let mut scores = Scoreboard::new();

        let path = credit_human_word(&board, &dict, " abef \r", MIN_WORD_LENGTH, &mut scores);
        assert_eq!(path.map(|p| p.len()), Some(4));
        assert_eq!(scores.human, 1);
        assert_eq!(
            locate_word(&board, &dict, "abef\r\n", MIN_WORD_LENGTH),
            locate_word(&board, &dict, "ABEF", MIN_WORD_LENGTH)
        );
    }

    #[test]
    fn test_human_path_is_real() {
        let board = alphabet_board();
        let dict = lexicon(&["ABEF"]);
        let path = locate_word(&board, &dict, "abef", MIN_WORD_LENGTH).unwrap();
        assert_eq!(
            path,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1)
            ]
        );
        for pair in path.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]));
        }
    }

    #[test]
    fn test_human_word_must_be_in_dictionary() {
        let board = alphabet_board();
        // ABEFG is traceable but only ABEF is a word
        let dict = lexicon(&["ABEF"]);
        let mut scores = Scoreboard::new();
        assert!(!human_word_search(&board, &dict, "ABEFG", MIN_WORD_LENGTH, &mut scores));
        assert_eq!(scores, Scoreboard::new());
    }

    #[test]
    fn test_human_short_words_rejected() {
        let board = BoggleBoard::from_letters("CATSXXXXXXXXXXXX").unwrap();
        let dict = lexicon(&["CAT", "CATS"]);
        let mut scores = Scoreboard::new();
        assert!(!human_word_search(&board, &dict, "CAT", MIN_WORD_LENGTH, &mut scores));
        assert!(!human_word_search(&board, &dict, "", MIN_WORD_LENGTH, &mut scores));
        assert!(!human_word_search(&board, &dict, "", 0, &mut scores));
        assert!(human_word_search(&board, &dict, "CAT", 3, &mut scores));
        assert_eq!(scores.human, 1);
    }

    #[test]
    fn test_human_cannot_reuse_cube() {
        let board = BoggleBoard::from_letters("AXXXXXXXXXXXXXXX").unwrap();
        let dict = lexicon(&["AA"]);
        let mut scores = Scoreboard::new();
        assert!(!human_word_search(&board, &dict, "AA", 2, &mut scores));
        assert_eq!(scores.human, 0);
    }

    #[test]
    fn test_human_search_idempotent() {
        let board = alphabet_board();
        let dict = lexicon(&["ABEFJ"]);
        let mut first = Scoreboard::new();
        let mut second = Scoreboard::new();
        assert!(human_word_search(&board, &dict, "ABEFJ", MIN_WORD_LENGTH, &mut first));
        assert!(human_word_search(&board, &dict, "ABEFJ", MIN_WORD_LENGTH, &mut second));
        assert_eq!(first, second);
        assert_eq!(first.human, 2);
    }

    #[test]
    fn test_human_scored_once_for_many_paths() {
        // "TOOT" can be traced several ways using the four Os
        let board = BoggleBoard::from_letters("TOOT/OOOO/XXXX/XXXX").unwrap();
        let dict = lexicon(&["TOOT"]);
        let mut scores = Scoreboard::new();
        assert!(human_word_search(&board, &dict, "toot", MIN_WORD_LENGTH, &mut scores));
        assert_eq!(scores.human, 1);
    }

    #[test]
    fn test_computer_counts_duplicate_paths_once() {
        // Two different Cs lead to the same A and T
        let board = BoggleBoard::from_letters("CACX/XTXX/XXXX/XXXX").unwrap();
        let dict = lexicon(&["CAT"]);
        let mut scores = Scoreboard::new();
        let found = computer_word_search(&board, &dict, &HashSet::new(), 3, &mut scores);
        assert_eq!(found, BTreeSet::from(["CAT".to_string()]));
        assert_eq!(scores.computer, 1);
        assert_eq!(scores.human, 0);
    }

    #[test]
    fn test_computer_excludes_human_words() {
        let board = alphabet_board();
        let dict = lexicon(&["ABEF", "AFKP", "FGHL", "MNOP", "AB", "PONMLK"]);
        let human: HashSet<String> = ["AFKP".to_string()].into_iter().collect();
        let mut scores = Scoreboard::new();
        let found = computer_word_search(&board, &dict, &human, MIN_WORD_LENGTH, &mut scores);

        let expected: BTreeSet<String> = ["ABEF", "FGHL", "MNOP"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(found, expected);
        assert_eq!(scores.computer, 3);
    }

    #[test]
    fn test_computer_matches_brute_force() {
        let board = BoggleBoard::from_letters("STAR/EOLP/NIDE/GRAT").unwrap();
        let dict = lexicon(&[
            "STAR", "STOLE", "TOES", "SEND", "LOIN", "LION", "DIAL", "PLOT", "PLOD", "TRADE",
            "GRAD", "STARE", "NOTE", "DENT", "TOLD", "ALOE", "RATE", "TREAD", "SOLID", "POLE",
            "SOLE", "ISLE", "RAID", "GRID", "DIET", "PEDAL", "ZEBRA", "AAAA",
        ]);
        let mut scores = Scoreboard::new();
        let found = computer_word_search(&board, &dict, &HashSet::new(), MIN_WORD_LENGTH, &mut scores);
        let expected = brute_force(&board, &dict, MIN_WORD_LENGTH, 5);

        assert!(!expected.is_empty());
        assert_eq!(found, expected);
        let total: u32 = found.iter().map(|w| score_word(w.len())).sum();
        assert_eq!(scores.computer, total);
        assert!(!found.contains("ZEBRA"));
    }

    #[test]
    fn test_computer_never_returns_short_words() {
        let board = alphabet_board();
        let dict = lexicon(&["AB", "ABC", "ABCD", "EFGH"]);
        let mut scores = Scoreboard::new();
        let found = computer_word_search(&board, &dict, &HashSet::new(), MIN_WORD_LENGTH, &mut scores);
        assert!(found.iter().all(|w| w.len() >= MIN_WORD_LENGTH));
        assert_eq!(found.len(), 2);
    }
}
