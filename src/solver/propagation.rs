//! This module contains the arc-consistency machinery: a queue-based
//! propagator over directed arcs ([ArcConsistency]) and a sweeping
//! [Solver](crate::solver::Solver) that escalates to search when propagation
//! alone gets stuck ([PropagatingSolver]).

use crate::Board;
use crate::solver::{DomainPrunedSolver, Solution, Solver};

use std::collections::VecDeque;

/// The outcome of a run of [ArcConsistency::propagate]. Like
/// [Solution](crate::solver::Solution), unsatisfiability is an ordinary
/// value, never an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Propagation {

    /// Propagation alone completed the board, which now holds the full
    /// satisfying assignment.
    Solved,

    /// Propagation reached a fixpoint without completing the board. The
    /// domains have been reduced as far as arc consistency allows; a search
    /// is required to make further progress.
    Reduced,

    /// Propagation emptied the domain of an unassigned cell, which is
    /// definitive proof that the puzzle has no solution.
    Unsatisfiable
}

/// Computes, for every cell, the sorted list of distinct cells that share a
/// row, column or box with it.
fn peer_table(board: &Board) -> Vec<Vec<usize>> {
    let mut peers = vec![Vec::new(); board.cells().len()];
    let groups = board.rows().iter()
        .chain(board.columns().iter())
        .chain(board.boxes().iter());

    for group in groups {
        for &x in group.iter() {
            for &y in group.iter() {
                if x != y {
                    peers[x].push(y);
                }
            }
        }
    }

    for cell_peers in peers.iter_mut() {
        cell_peers.sort_unstable();
        cell_peers.dedup();
    }

    peers
}

/// A queue-based arc-consistency propagator. The work queue holds directed
/// arcs, one per ordered pair of distinct cells that share a row, column or
/// box. Processing the arc `(x, y)` removes `y`'s value from `x`'s domain
/// if `y` is assigned, then fixes `x` if its domain has shrunk to a
/// singleton. Whenever `x` changes, every arc incident to `x`, in both
/// directions, is put back on the queue; since domains only ever shrink,
/// the queue always drains.
pub struct ArcConsistency;

impl ArcConsistency {

    /// Runs arc-consistency propagation on the given board until the work
    /// queue drains or an unassigned cell's domain becomes empty. Boards
    /// whose assigned cells already conflict are rejected as
    /// [Propagation::Unsatisfiable] without touching any domain.
    ///
    /// Propagation is idempotent: running it again on the resulting board
    /// changes nothing.
    pub fn propagate(board: &mut Board) -> Propagation {
        if !board.is_valid() {
            return Propagation::Unsatisfiable;
        }

        let peers = peer_table(board);
        let mut queue: VecDeque<(usize, usize)> = VecDeque::new();

        for (x, cell_peers) in peers.iter().enumerate() {
            for &y in cell_peers.iter() {
                queue.push_back((x, y));
            }
        }

        while let Some((x, y)) = queue.pop_front() {
            if board.cell(x).is_assigned() {
                continue;
            }

            let mut changed = false;

            if let Some(value) = board.cell(y).value() {
                changed |= board.remove_candidate(x, value).unwrap();
            }

            if board.cell(x).domain().is_empty() {
                return Propagation::Unsatisfiable;
            }

            if let Some(symbol) = board.cell(x).domain().only() {
                // a singleton whose value a peer already holds proves
                // unsatisfiability, since x has no other candidate left
                if !board.is_legal(x, symbol) {
                    return Propagation::Unsatisfiable;
                }

                board.fix_singleton(x);
                changed = true;
            }

            if changed {
                for &z in peers[x].iter() {
                    queue.push_back((x, z));
                    queue.push_back((z, x));
                }
            }
        }

        if board.is_solved() {
            Propagation::Solved
        }
        else {
            Propagation::Reduced
        }
    }
}

/// A [Solver] built on propagation by full sweeps: all unsolved cells are
/// visited in row-major order, each one's domain is recomputed from the
/// legality predicate and any cell whose domain has shrunk to a single
/// symbol is fixed immediately, so later cells of the same sweep already see
/// the new value. Sweeps repeat until one fixes nothing. If unsolved cells
/// remain at that fixpoint, the solver escalates to the
/// [DomainPrunedSolver], whose search then starts from the propagated board
/// rather than from scratch.
pub struct PropagatingSolver;

impl Solver for PropagatingSolver {
    fn solve(&self, board: &mut Board) -> Solution {
        if !board.is_valid() {
            return Solution::Unsatisfiable;
        }

        loop {
            let mut fixed_any = false;

            for i in 0..board.cells().len() {
                if board.cell(i).is_assigned() {
                    continue;
                }

                board.refresh_domain(i);

                if board.fix_singleton(i).is_some() {
                    fixed_any = true;
                }
            }

            if board.is_complete() {
                return if board.is_valid() {
                    Solution::Solved
                }
                else {
                    Solution::Unsatisfiable
                };
            }

            if !fixed_any {
                break;
            }
        }

        DomainPrunedSolver.solve(board)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn complete_9x9_values() -> Vec<usize> {
        let rows = [
            [1, 2, 3, 4, 5, 6, 7, 8, 9],
            [4, 5, 6, 7, 8, 9, 1, 2, 3],
            [7, 8, 9, 1, 2, 3, 4, 5, 6],
            [2, 3, 4, 5, 6, 7, 8, 9, 1],
            [5, 6, 7, 8, 9, 1, 2, 3, 4],
            [8, 9, 1, 2, 3, 4, 5, 6, 7],
            [3, 4, 5, 6, 7, 8, 9, 1, 2],
            [6, 7, 8, 9, 1, 2, 3, 4, 5],
            [9, 1, 2, 3, 4, 5, 6, 7, 8]
        ];

        rows.iter().flat_map(|row| row.iter().copied()).collect()
    }

    fn one_cell_removed_9x9() -> Board {
        // blank out the centre cell of an otherwise complete grid
        let mut values = complete_9x9_values();
        values[4 * 9 + 4] = 0;
        Board::with_givens(3, 3, &values).unwrap()
    }

    #[test]
    fn single_pass_fixes_one_removed_cell() {
        let mut board = one_cell_removed_9x9();

        assert_eq!(Propagation::Solved, ArcConsistency::propagate(&mut board));
        assert!(board.is_solved());
        assert_eq!(Some(9),
            board.cell(board.index_of(4, 4).unwrap()).value());
    }

    #[test]
    fn sweep_fixes_one_removed_cell() {
        let mut board = one_cell_removed_9x9();

        assert_eq!(Solution::Solved, PropagatingSolver.solve(&mut board));
        assert!(board.is_solved());
    }

    #[test]
    fn propagation_solves_singleton_chain() {
        // every column of the empty top row misses exactly one symbol
        let mut values = complete_9x9_values();

        for value in values.iter_mut().take(9) {
            *value = 0;
        }

        let mut board = Board::with_givens(3, 3, &values).unwrap();

        assert_eq!(Propagation::Solved, ArcConsistency::propagate(&mut board));
        assert!(board.is_solved());
    }

    #[test]
    fn propagation_stops_at_fixpoint() {
        let mut board = Board::parse(
            "4\n\
            2 2\n\
            1 2 3 4\n\
            3 4 1 2\n\
            0 0 0 0\n\
            0 0 0 0\n").unwrap();

        assert_eq!(Propagation::Reduced,
            ArcConsistency::propagate(&mut board));
        assert!(!board.is_complete());
    }

    #[test]
    fn propagation_is_idempotent() {
        let mut board = Board::parse(
            "4\n\
            2 2\n\
            1 2 3 4\n\
            3 4 1 2\n\
            0 0 0 0\n\
            0 0 0 0\n").unwrap();

        ArcConsistency::propagate(&mut board);
        let reference = board.clone();

        assert_eq!(Propagation::Reduced,
            ArcConsistency::propagate(&mut board));
        assert_eq!(reference, board);
    }

    #[test]
    fn propagation_establishes_arc_consistency() {
        // blank out the right two thirds of the top two rows
        let mut values = complete_9x9_values();

        for row in 0..2 {
            for column in 3..9 {
                values[row * 9 + column] = 0;
            }
        }

        let mut board = Board::with_givens(3, 3, &values).unwrap();
        ArcConsistency::propagate(&mut board);
        let peers = peer_table(&board);

        for x in 0..board.cells().len() {
            if board.cell(x).is_assigned() {
                continue;
            }

            for &y in peers[x].iter() {
                if let Some(value) = board.cell(y).value() {
                    assert!(!board.cell(x).domain().contains(value));
                }
            }
        }
    }

    #[test]
    fn contradiction_detected_by_queue() {
        // cell (0, 0) shares groups that together exclude every symbol
        let text = "4\n\
            2 2\n\
            0 0 1 2\n\
            3 4 0 0\n\
            2 0 0 0\n\
            0 1 0 0\n";
        let mut board = Board::parse(&text).unwrap();

        assert_eq!(Propagation::Unsatisfiable,
            ArcConsistency::propagate(&mut board));
    }

    #[test]
    fn duplicate_givens_rejected() {
        let text = "4\n\
            2 2\n\
            1 2 3 4\n\
            3 4 1 2\n\
            1 0 0 1\n\
            0 3 2 0\n";

        let mut board = Board::parse(text).unwrap();
        assert_eq!(Propagation::Unsatisfiable,
            ArcConsistency::propagate(&mut board));

        board.reset();
        assert_eq!(Solution::Unsatisfiable,
            PropagatingSolver.solve(&mut board));
    }

    #[test]
    fn escalation_completes_propagated_board() {
        let mut board = Board::parse(
            "4\n\
            2 2\n\
            1 2 3 4\n\
            3 4 1 2\n\
            0 0 0 0\n\
            0 0 0 0\n").unwrap();

        assert_eq!(Solution::Solved, PropagatingSolver.solve(&mut board));
        assert!(board.is_solved());
        assert_eq!(Some(2),
            board.cell(board.index_of(0, 2).unwrap()).value());
    }
}
