//! This module contains the logic for generating random complete grids. The
//! main type is [Generator], which fills an empty board with square boxes
//! using a randomized, lookahead-pruned backtracking search.

use crate::Board;
use crate::error::BoardResult;

use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};
use rand::SeedableRng;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;

/// A generator of complete grids. The search places symbols in ascending
/// order, and for each symbol fills one cell per box, boxes in row-major
/// order. Among the candidate cells of a box, the order of trials is decided
/// by a vector of random per-cell priorities drawn at the start of each
/// search, so the same search never retries cells in a different order
/// unless it restarts. If the top-level search exhausts all options, the
/// board is reset, the priorities are redrawn and the search starts over.
pub struct Generator<R: Rng> {
    rng: R
}

fn draw_priorities(rng: &mut impl Rng, len: usize) -> Vec<u64> {
    (0..len).map(|_| rng.gen()).collect()
}

/// Checks that after a tentative assignment of `symbol` in the box with the
/// given index, every later box sharing that box's box-row or box-column
/// still has an unassigned cell whose domain contains the symbol. Later
/// boxes have not been visited for this symbol yet, so failing that check
/// proves the tentative assignment cannot be completed.
fn lookahead_ok(board: &Board, symbol: usize, box_index: usize) -> bool {
    let boxes_per_row = board.size() / board.box_width();
    let box_row = box_index / boxes_per_row;
    let box_column = box_index % boxes_per_row;

    for later in (box_index + 1)..board.size() {
        let later_row = later / boxes_per_row;
        let later_column = later % boxes_per_row;

        if later_row != box_row && later_column != box_column {
            continue;
        }

        let placeable = board.boxes()[later].iter().any(|&i| {
            let cell = board.cell(i);
            !cell.is_assigned() && cell.domain().contains(symbol)
        });

        if !placeable {
            return false;
        }
    }

    true
}

fn fill_from(board: &mut Board, symbol: usize, box_index: usize,
        priorities: &[u64], done: &AtomicBool) -> bool {
    if done.load(Ordering::Relaxed) {
        return false;
    }

    if symbol > board.size() {
        return true;
    }

    if box_index == board.size() {
        return fill_from(board, symbol + 1, 0, priorities, done);
    }

    let mut candidates: Vec<usize> = board.boxes()[box_index].iter()
        .copied()
        .filter(|&i| {
            let cell = board.cell(i);
            !cell.is_assigned() && cell.domain().contains(symbol)
        })
        .collect();
    candidates.sort_unstable_by_key(|&i| priorities[i]);

    for candidate in candidates {
        let snapshot = board.snapshot();
        board.assign(candidate, symbol).unwrap();

        if lookahead_ok(board, symbol, box_index) &&
                fill_from(board, symbol, box_index + 1, priorities, done) {
            return true;
        }

        board.restore(&snapshot);
    }

    false
}

/// Runs searches on the given board until one succeeds, resetting the board
/// and redrawing the priorities between searches. Returns `None` only if the
/// completion flag was raised by another searcher.
fn run_search(mut board: Board, rng: &mut impl Rng, done: &AtomicBool)
        -> Option<Board> {
    loop {
        if done.load(Ordering::Relaxed) {
            return None;
        }

        let priorities = draw_priorities(rng, board.cells().len());

        if fill_from(&mut board, 1, 0, &priorities, done) {
            return Some(board);
        }

        board.reset();
    }
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses the
    /// [ThreadRng](rand::rngs::ThreadRng) to make its random decisions.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to make its decisions. Handing over a seeded RNG makes generation
    /// reproducible.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    /// Generates a complete grid with square boxes of the given side length,
    /// i.e. a board of size `box_size * box_size`. The returned board is
    /// guaranteed to be solved.
    ///
    /// # Arguments
    ///
    /// * `box_size`: The side length of the square boxes of the generated
    /// board. Ordinary Sudoku grids are generated with 3.
    ///
    /// # Errors
    ///
    /// If `box_size` is zero or the resulting board size exceeds
    /// [MAX_SYMBOLS](crate::util::MAX_SYMBOLS). In that case,
    /// `BoardError::InvalidDimensions` is returned.
    pub fn generate(&mut self, box_size: usize) -> BoardResult<Board> {
        let board = Board::new(box_size, box_size)?;
        let never_done = AtomicBool::new(false);
        Ok(run_search(board, &mut self.rng, &never_done).unwrap())
    }

    /// Generates a complete grid like [Generator::generate], but races the
    /// given number of independent search attempts on separate threads. Each
    /// attempt works on a private board with its own random number generator
    /// seeded from this generator's RNG. The first attempt to finish raises
    /// a shared completion flag; the other attempts poll it and terminate
    /// cooperatively. The winning board is returned.
    ///
    /// # Arguments
    ///
    /// * `box_size`: The side length of the square boxes of the generated
    /// board.
    /// * `attempts`: The number of parallel search attempts. Zero is treated
    /// as one.
    ///
    /// # Errors
    ///
    /// If `box_size` is zero or the resulting board size exceeds
    /// [MAX_SYMBOLS](crate::util::MAX_SYMBOLS). In that case,
    /// `BoardError::InvalidDimensions` is returned.
    pub fn generate_parallel(&mut self, box_size: usize, attempts: usize)
            -> BoardResult<Board> {
        let board = Board::new(box_size, box_size)?;
        let attempts = attempts.max(1);
        let done = Arc::new(AtomicBool::new(false));
        let (sender, receiver) = mpsc::channel();
        let mut handles = Vec::with_capacity(attempts);

        for _ in 0..attempts {
            let seed: u64 = self.rng.gen();
            let board = board.clone();
            let done = Arc::clone(&done);
            let sender = sender.clone();

            handles.push(thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);

                if let Some(result) = run_search(board, &mut rng, &done) {
                    if !done.swap(true, Ordering::Relaxed) {
                        // receiver outlives all senders
                        sender.send(result).unwrap();
                    }
                }
            }));
        }

        drop(sender);

        for handle in handles {
            handle.join().unwrap();
        }

        // at least one attempt must have won the race
        Ok(receiver.recv().unwrap())
    }
}
