//! This module contains the solving strategies offered by this crate. All
//! strategies implement the [Solver] trait, work on a mutable [Board] and
//! report their outcome as a [Solution]. A puzzle without a solution is an
//! ordinary result, not an error.
//!
//! Three strategies are available:
//!
//! * [BacktrackingSolver]: plain depth-first search that validates the board
//! only once it is completely filled
//! * [DomainPrunedSolver]: depth-first search that only tries symbols from
//! the free cells' computed domains
//! * [PropagatingSolver](propagation::PropagatingSolver): arc-consistency
//! sweeps with escalation to the domain-pruned search

pub mod propagation;

pub use propagation::{ArcConsistency, Propagation, PropagatingSolver};

use crate::Board;

/// The outcome of a [Solver] run. The solved assignment itself is held by
/// the board that was handed to the solver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Solution {

    /// The solver found a satisfying assignment, which the board now holds.
    Solved,

    /// The solver proved that the puzzle has no solution. This is a normal
    /// outcome, not an error.
    Unsatisfiable
}

/// A trait for strategies that solve puzzles. Solving is synchronous and
/// runs to completion; the solver owns the board exclusively for the
/// duration of the call. Solvers find the first satisfying assignment and
/// stop. Callers that run multiple strategies against the same board must
/// call [Board::reset] between runs.
pub trait Solver {

    /// Attempts to solve the puzzle currently held by the given board. On
    /// [Solution::Solved], the board holds the full satisfying assignment.
    /// On [Solution::Unsatisfiable], values fixed by propagation may remain
    /// on the board; [Board::reset] restores the given configuration.
    fn solve(&self, board: &mut Board) -> Solution;
}

fn free_cells(board: &Board) -> Vec<usize> {
    (0..board.cells().len())
        .filter(|&i| !board.cell(i).is_assigned())
        .collect()
}

/// A [Solver] that runs a plain depth-first search: free cells are visited
/// in row-major order, every symbol is tried for every free cell and the
/// board is validated only once all cells are assigned. Intermediate
/// contradictions are not detected before the leaf, so this strategy is only
/// practical for puzzles with few free cells. It is primarily a correctness
/// baseline for the pruned strategies.
pub struct BacktrackingSolver;

fn search_all_symbols(board: &mut Board, free: &[usize]) -> bool {
    if let Some((&index, rest)) = free.split_first() {
        for symbol in 1..=board.size() {
            board.set_value(index, symbol).unwrap();

            if search_all_symbols(board, rest) {
                return true;
            }
        }

        board.clear_value(index).unwrap();
        false
    }
    else {
        board.is_solved()
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, board: &mut Board) -> Solution {
        let free = free_cells(board);

        if search_all_symbols(board, &free) {
            Solution::Solved
        }
        else {
            Solution::Unsatisfiable
        }
    }
}

/// A [Solver] that runs the same leaf-validated depth-first search as the
/// [BacktrackingSolver], but recomputes the domain of each free cell from
/// the legality predicate as the search descends and only tries symbols
/// from that domain. A free cell whose computed domain is empty is skipped
/// in place; the failure then surfaces at the leaf, where the board is
/// incomplete, or at an enclosing backtrack.
pub struct DomainPrunedSolver;

fn search_domains(board: &mut Board, free: &[usize]) -> bool {
    if let Some((&index, rest)) = free.split_first() {
        let domain = board.computed_domain(index);

        if domain.is_empty() {
            return search_domains(board, rest);
        }

        for symbol in domain.iter() {
            board.set_value(index, symbol).unwrap();

            if search_domains(board, rest) {
                return true;
            }
        }

        board.clear_value(index).unwrap();
        false
    }
    else {
        board.is_solved()
    }
}

impl Solver for DomainPrunedSolver {
    fn solve(&self, board: &mut Board) -> Solution {
        let free = free_cells(board);

        if search_domains(board, &free) {
            Solution::Solved
        }
        else {
            Solution::Unsatisfiable
        }
    }
}
