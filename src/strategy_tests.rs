//! Integration tests that run every solving strategy against the same
//! puzzles and check that they agree: on satisfiability always, and on the
//! exact assignment whenever the completion is unique.

use crate::Board;
use crate::generator::Generator;
use crate::solver::{
    BacktrackingSolver,
    DomainPrunedSolver,
    PropagatingSolver,
    Solution,
    Solver
};

use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

fn strategies() -> Vec<Box<dyn Solver>> {
    vec![
        Box::new(BacktrackingSolver),
        Box::new(DomainPrunedSolver),
        Box::new(PropagatingSolver)
    ]
}

fn half_empty_4x4() -> Board {
    Board::parse(
        "4\n\
        2 2\n\
        1 2 3 4\n\
        3 4 1 2\n\
        0 0 0 0\n\
        0 0 0 0\n").unwrap()
}

#[test]
fn strategies_agree_on_half_empty_grid() {
    let mut board = half_empty_4x4();
    let mut results: Vec<Vec<Option<usize>>> = Vec::new();

    for strategy in strategies() {
        assert_eq!(Solution::Solved, strategy.solve(&mut board));
        assert!(board.is_solved());
        results.push(board.cells().iter().map(|c| c.value()).collect());
        board.reset();
    }

    assert_eq!(results[0], results[1]);
    assert_eq!(results[1], results[2]);
}

#[test]
fn strategies_agree_on_duplicate_clues() {
    // the two missing cells cannot repair the duplicate 1 in row 3
    let text = "4\n\
        2 2\n\
        1 2 3 4\n\
        3 4 1 2\n\
        1 0 0 1\n\
        0 3 2 0\n";

    for strategy in strategies() {
        let mut board = Board::parse(text).unwrap();
        assert_eq!(Solution::Unsatisfiable, strategy.solve(&mut board));
    }
}

#[test]
fn strategies_agree_on_unsatisfiable_grid() {
    // cell (0, 0) shares groups that together exclude every symbol, so the
    // puzzle is unsatisfiable even though the clues do not conflict
    let text = "4\n\
        2 2\n\
        0 0 1 2\n\
        3 4 0 0\n\
        2 0 0 0\n\
        0 1 0 0\n";

    for strategy in strategies() {
        let mut board = Board::parse(text).unwrap();
        assert_eq!(Solution::Unsatisfiable, strategy.solve(&mut board));
        assert!(!board.is_complete());
    }
}

fn puzzle_from_generated(blanks: &[(usize, usize)]) -> Board {
    let mut generator =
        Generator::new(ChaCha12Rng::seed_from_u64(987654321));
    let solution = generator.generate(3).unwrap();
    let mut values: Vec<usize> = solution.cells().iter()
        .map(|c| c.value().unwrap())
        .collect();

    for &(column, row) in blanks.iter() {
        values[solution.index_of(column, row).unwrap()] = 0;
    }

    Board::with_givens(3, 3, &values).unwrap()
}

#[test]
fn strategies_solve_generated_puzzle() {
    let blanks = [(0, 0), (4, 2), (7, 5), (3, 8)];

    for strategy in strategies() {
        let mut board = puzzle_from_generated(&blanks);
        assert_eq!(Solution::Solved, strategy.solve(&mut board));
        assert!(board.is_solved());
    }
}

#[test]
fn pruned_strategies_solve_sparser_puzzle() {
    let blanks = [
        (0, 0), (1, 0), (2, 0), (3, 1), (4, 1), (5, 1),
        (6, 2), (7, 2), (8, 2), (0, 4), (2, 4), (4, 4),
        (6, 4), (8, 4), (1, 6), (3, 6), (5, 6), (7, 6),
        (0, 8), (4, 8), (8, 8)
    ];
    let pruned: Vec<Box<dyn Solver>> =
        vec![Box::new(DomainPrunedSolver), Box::new(PropagatingSolver)];

    for strategy in pruned {
        let mut board = puzzle_from_generated(&blanks);
        assert_eq!(Solution::Solved, strategy.solve(&mut board));
        assert!(board.is_solved());
    }
}

#[test]
fn solving_after_reset_is_repeatable() {
    let mut board = half_empty_4x4();

    assert_eq!(Solution::Solved, DomainPrunedSolver.solve(&mut board));
    let first = board.clone();

    board.reset();
    assert!(!board.is_complete());

    assert_eq!(Solution::Solved, DomainPrunedSolver.solve(&mut board));
    assert_eq!(first, board);
}

#[test]
fn solving_a_generated_grid_is_a_no_op() {
    let mut generator = Generator::new(ChaCha12Rng::seed_from_u64(5));
    let mut board = generator.generate(2).unwrap();
    let reference = board.clone();

    for strategy in strategies() {
        assert_eq!(Solution::Solved, strategy.solve(&mut board));
        assert_eq!(reference.cells(), board.cells());
    }
}
