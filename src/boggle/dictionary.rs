use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fst::automaton::Str;
use fst::{Automaton, IntoStreamer, Set, Streamer};
use log::debug;

use crate::error::BoggleError;

/// Word list capability the board search queries. Words and prefixes are uppercase ASCII,
/// the same casing the board uses.
pub trait Dictionary {
    /// Is the string a complete word
    fn contains_word(&self, word: &str) -> bool;
    /// Is the string the start of at least one word
    fn contains_prefix(&self, prefix: &str) -> bool;
}

/// Dictionary backed by a finite state transducer. Lookups of both words and prefixes only
/// walk as many states as the query has letters.
pub struct Lexicon {
    words: Set<Vec<u8>>,
}

impl Lexicon {
    /// Builds the lexicon from any list of words. Words are uppercased, and anything that
    /// can't be spelled with single ASCII letters is skipped since it could never be on the board
    pub fn from_words<I, S>(words: I) -> Result<Self, BoggleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_uppercase())
            .filter(|w| !w.is_empty() && w.bytes().all(|b| b.is_ascii_uppercase()))
            .collect::<Vec<_>>();

        // The fst builder requires lexicographic order with no duplicates
        words.sort_unstable();
        words.dedup();

        let words = Set::from_iter(words)?;
        Ok(Self { words })
    }

    /// Reads a plain word list with one word per line
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BoggleError> {
        let path = path.as_ref();
        let io_err = |source| BoggleError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        let reader = BufReader::new(file);
        let mut words = Vec::new();
        for line in reader.lines() {
            words.push(line.map_err(io_err)?);
        }

        let lexicon = Self::from_words(words)?;
        debug!("Loaded {} words from {}", lexicon.len(), path.display());
        Ok(lexicon)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for Lexicon {
    fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn contains_prefix(&self, prefix: &str) -> bool {
        let matcher = Str::new(prefix).starts_with();
        let mut stream = self.words.search(matcher).into_stream();
        stream.next().is_some()
    }
}
