use std::ops::ControlFlow;

use super::board::BoggleBoard;
use super::dictionary::Dictionary;
use super::util::{Position, START_CELLS};
use super::N_BOGGLE_DICE;

/// What the search should do after a candidate word has been reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Keep extending the current path
    Continue,
    /// Don't extend this path any further, but keep searching its siblings
    Prune,
    /// Abandon the whole search
    Stop,
}

/// The path currently being traced: the cubes visited in order and the word they spell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathState {
    cells: Vec<Position>,
    /// Bit i is set if the cube with index i is on the path
    used: u16,
    word: String,
}

impl PathState {
    pub fn new() -> Self {
        Self {
            cells: Vec::with_capacity(N_BOGGLE_DICE),
            used: 0,
            word: String::with_capacity(N_BOGGLE_DICE),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn depth(&self) -> usize {
        self.cells.len()
    }

    pub fn is_used(&self, pos: Position) -> bool {
        (self.used >> pos.as_index()) & 1 == 1
    }

    fn push(&mut self, pos: Position, letter: char) {
        debug_assert!(self.cells.last().map_or(true, |last| last.is_adjacent(pos)));
        self.used |= 1 << pos.as_index();
        self.cells.push(pos);
        self.word.push(letter);
    }

    fn pop(&mut self) {
        if let Some(pos) = self.cells.pop() {
            self.used &= !(1 << pos.as_index());
            self.word.pop();
        }
    }
}

/// Depth first search over every simple path on the board (no cube used twice, each step
/// to one of the 8 neighbours). A path is only extended while the letters along it are the
/// start of some dictionary word, so the work done is bounded by how many of the
/// dictionary's prefixes can be traced on the board rather than by the raw number of paths.
pub struct PathFinder<'a, D: Dictionary + ?Sized> {
    board: &'a BoggleBoard,
    dictionary: &'a D,
}

impl<'a, D: Dictionary + ?Sized> PathFinder<'a, D> {
    pub fn new(board: &'a BoggleBoard, dictionary: &'a D) -> Self {
        Self { board, dictionary }
    }

    /// Runs the search from every cube in turn, starting each one with a fresh path.
    /// Returns `Break` if the callback asked to stop.
    pub fn explore_all<F>(&self, mut on_candidate: F) -> ControlFlow<()>
    where
        F: FnMut(&PathState) -> Visit,
    {
        for start in START_CELLS {
            self.explore(start, &mut on_candidate)?;
        }
        ControlFlow::Continue(())
    }

    /// Searches every path that begins at `start`. The callback is handed each path whose
    /// letters form a dictionary prefix, right after the path has been extended.
    pub fn explore<F>(&self, start: Position, on_candidate: &mut F) -> ControlFlow<()>
    where
        F: FnMut(&PathState) -> Visit,
    {
        let mut state = PathState::new();
        self.step(start, &mut state, on_candidate)
    }

    fn step<F>(
        &self,
        pos: Position,
        state: &mut PathState,
        on_candidate: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&PathState) -> Visit,
    {
        if !self.board.in_bounds(pos.row as isize, pos.col as isize) {
            return ControlFlow::Continue(());
        }
        if state.is_used(pos) {
            return ControlFlow::Continue(());
        }

        // choose
        state.push(pos, self.board.letter_at(pos));

        let flow = if !self.dictionary.contains_prefix(state.word()) {
            ControlFlow::Continue(())
        } else {
            match on_candidate(state) {
                Visit::Stop => ControlFlow::Break(()),
                Visit::Prune => ControlFlow::Continue(()),
                // explore
                Visit::Continue => self.descend(pos, state, on_candidate),
            }
        };

        // unchoose
        state.pop();
        flow
    }

    fn descend<F>(
        &self,
        pos: Position,
        state: &mut PathState,
        on_candidate: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&PathState) -> Visit,
    {
        // Off-board offsets are already dropped by `adjacent`
        for next in pos.adjacent() {
            self.step(next, state, on_candidate)?;
        }
        ControlFlow::Continue(())
    }
}
