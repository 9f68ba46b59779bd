// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements an engine for generalized Sudoku-like puzzles: an
//! n×n board partitioned into rows, columns and boxes of a given width and
//! height, where every group must contain every symbol exactly once. It
//! supports the following key features:
//!
//! * Parsing and printing puzzles in a simple line-based text format
//! * Generating complete grids with a randomized, lookahead-pruned
//! backtracking search, optionally racing several attempts in parallel
//! * Solving puzzles with three interchangeable strategies: plain
//! backtracking, domain-pruned backtracking and arc-consistency propagation
//!
//! # The board model
//!
//! A [Board] owns its [Cell]s, which are constructed once and then mutated in
//! place during search. Every cell knows its row, column and box and carries
//! a domain of remaining candidate symbols. The groups are index tables built
//! at construction time.
//!
//! ```
//! use sudoku_csp::Board;
//!
//! let board = Board::new(3, 3).unwrap();
//! assert_eq!(9, board.size());
//! assert_eq!(81, board.cells().len());
//! ```
//!
//! # Solving puzzles
//!
//! Solvers implement the [Solver](solver::Solver) trait and work on a
//! mutable board; a solved board holds the full assignment in place. "No
//! solution" is an ordinary result value, not an error.
//!
//! ```
//! use sudoku_csp::Board;
//! use sudoku_csp::solver::{PropagatingSolver, Solution, Solver};
//!
//! let text = "4\n\
//!     2 2\n\
//!     1 2 3 4\n\
//!     3 4 1 2\n\
//!     0 0 0 0\n\
//!     0 0 0 0\n";
//! let mut board = Board::parse(text).unwrap();
//!
//! assert_eq!(Solution::Solved, PropagatingSolver.solve(&mut board));
//! assert!(board.is_solved());
//! ```
//!
//! # Generating grids
//!
//! A [Generator](generator::Generator) fills an empty board with square
//! boxes of a given dimension. It uses the `Rng` trait from the
//! [rand](https://rust-random.github.io/rand/rand/index.html) crate, with
//! [Generator::new_default](generator::Generator::new_default) providing a
//! thread-local RNG.
//!
//! ```
//! use sudoku_csp::generator::Generator;
//!
//! let mut generator = Generator::new_default();
//! let board = generator.generate(2).unwrap();
//!
//! assert!(board.is_solved());
//! ```

pub mod error;
pub mod generator;
pub mod solver;
pub mod util;

#[cfg(test)]
mod strategy_tests;

use error::{
    BoardError,
    BoardResult,
    LoadError,
    LoadResult,
    ParseError,
    ParseResult
};
use util::{contains_duplicate, SymbolSet, MAX_SYMBOLS};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;

/// The characters used to render symbols, where symbol `s` is rendered as the
/// character at index `s - 1`. Boards whose size exceeds this alphabet cannot
/// be displayed.
const SYMBOL_ALPHABET: &[u8] = b"123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The character used to render a cell that holds no symbol.
const PLACEHOLDER: char = '?';

pub(crate) fn index(column: usize, row: usize, size: usize) -> usize {
    row * size + column
}

/// A single cell of a [Board]. Cells are constructed once, when their board
/// is constructed, and afterwards only their value and domain are mutated in
/// place. A cell knows the coordinates of the groups it belongs to, its
/// initial clue (if any), its current value and the set of candidate symbols
/// that remains for it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Cell {
    column: usize,
    row: usize,
    box_index: usize,
    given: Option<usize>,
    value: Option<usize>,
    domain: SymbolSet
}

impl Cell {

    /// The column (x-coordinate) of this cell.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The row (y-coordinate) of this cell.
    pub fn row(&self) -> usize {
        self.row
    }

    /// The index of the box group this cell belongs to. Boxes are numbered in
    /// row-major order within the box grid.
    pub fn box_index(&self) -> usize {
        self.box_index
    }

    /// The clue this cell was constructed with, or `None` if the cell started
    /// out empty. [Board::reset] restores the value to this.
    pub fn given(&self) -> Option<usize> {
        self.given
    }

    /// The symbol currently held by this cell, or `None` if it is unassigned.
    pub fn value(&self) -> Option<usize> {
        self.value
    }

    /// The set of candidate symbols that remains for this cell.
    pub fn domain(&self) -> &SymbolSet {
        &self.domain
    }

    /// Indicates whether this cell was constructed with a clue.
    pub fn is_given(&self) -> bool {
        self.given.is_some()
    }

    /// Indicates whether this cell currently holds a symbol.
    pub fn is_assigned(&self) -> bool {
        self.value.is_some()
    }
}

/// A captured (value, domain) state of every cell on a board, as created by
/// [Board::snapshot]. Restoring a snapshot with [Board::restore] puts the
/// board back into the captured state exactly. Snapshots make the cost and
/// scope of search rollback explicit: a single assignment can shrink domains
/// across the entire board, so the whole board is captured.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snapshot {
    states: Vec<(Option<usize>, SymbolSet)>
}

/// A board is composed of cells that are organized into rows, columns and
/// boxes of a given width and height in a way that makes the entire grid a
/// square. The number of boxes in a box-row is equal to the box height and
/// vice versa. Each cell may or may not hold a symbol, represented by the
/// numbers `1` to `size`.
///
/// In ordinary Sudoku, the box width and height are both 3. Here, more
/// exotic variants are permitted, for example 3x2 boxes, which would result
/// in a 6×6 grid.
///
/// Cells and groups are built once at construction and never reallocated;
/// repeated searches on the same logical puzzle are enabled by
/// [Board::snapshot]/[Board::restore] and [Board::reset].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Board {
    box_width: usize,
    box_height: usize,
    size: usize,
    cells: Vec<Cell>,
    rows: Vec<Vec<usize>>,
    columns: Vec<Vec<usize>>,
    boxes: Vec<Vec<usize>>
}

fn to_char(value: Option<usize>) -> char {
    if let Some(symbol) = value {
        SYMBOL_ALPHABET[symbol - 1] as char
    }
    else {
        PLACEHOLDER
    }
}

fn line(board: &Board, start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let size = board.size();
    let mut result = String::new();

    for x in 0..size {
        if x == 0 {
            result.push(start);
        }
        else if x % board.box_width == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row(board: &Board) -> String {
    line(board, '╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line(board: &Board) -> String {
    line(board, '╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line(board: &Board) -> String {
    line(board, '╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row(board: &Board) -> String {
    line(board, '╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(board: &Board, y: usize) -> String {
    line(board, '║', '║', '│',
        |x| to_char(board.cells[index(x, y, board.size)].value), ' ', '║',
        true)
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();

        if size > SYMBOL_ALPHABET.len() {
            return Err(fmt::Error::default());
        }

        let top_row = top_row(self);
        let thin_separator_line = thin_separator_line(self);
        let thick_separator_line = thick_separator_line(self);
        let bottom_row = bottom_row(self);

        for y in 0..size {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % self.box_height == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn parse_number(line_number: usize, token: &str) -> ParseResult<usize> {
    token.parse::<usize>()
        .map_err(|_| ParseError::MalformedToken(line_number,
            String::from(token)))
}

impl Board {

    /// Creates a new, empty board where the boxes have the given dimensions.
    /// The total width and height of the board will be equal to the product
    /// of `box_width` and `box_height`. All cells are unassigned and all
    /// domains contain every symbol.
    ///
    /// # Arguments
    ///
    /// * `box_width`: The horizontal dimension of one box of the board. To
    /// ensure a square board, this is also the number of boxes that compose
    /// the board vertically. For an ordinary Sudoku board, this is 3. Must be
    /// greater than 0.
    /// * `box_height`: The vertical dimension of one box of the board. To
    /// ensure a square board, this is also the number of boxes that compose
    /// the board horizontally. For an ordinary Sudoku board, this is 3. Must
    /// be greater than 0.
    ///
    /// # Errors
    ///
    /// If `box_width` or `box_height` is zero, or their product exceeds
    /// [MAX_SYMBOLS](util::MAX_SYMBOLS). In that case,
    /// `BoardError::InvalidDimensions` is returned.
    pub fn new(box_width: usize, box_height: usize) -> BoardResult<Board> {
        if box_width == 0 || box_height == 0 {
            return Err(BoardError::InvalidDimensions);
        }

        let size = box_width * box_height;

        if size > MAX_SYMBOLS {
            return Err(BoardError::InvalidDimensions);
        }

        let boxes_per_row = size / box_width;
        let full_domain = SymbolSet::full(size).unwrap();
        let mut cells = Vec::with_capacity(size * size);
        let mut rows = vec![Vec::with_capacity(size); size];
        let mut columns = vec![Vec::with_capacity(size); size];
        let mut boxes = vec![Vec::with_capacity(size); size];

        for row in 0..size {
            for column in 0..size {
                let box_index = (row / box_height) * boxes_per_row +
                    column / box_width;
                let cell_index = cells.len();

                rows[row].push(cell_index);
                columns[column].push(cell_index);
                boxes[box_index].push(cell_index);
                cells.push(Cell {
                    column,
                    row,
                    box_index,
                    given: None,
                    value: None,
                    domain: full_domain
                });
            }
        }

        Ok(Board {
            box_width,
            box_height,
            size,
            cells,
            rows,
            columns,
            boxes
        })
    }

    /// Creates a new board with the given box dimensions whose cells are
    /// initialized from `values` in left-to-right, top-to-bottom order, where
    /// `0` denotes an empty cell and `1` to `size` denotes a given clue.
    /// Clues become the cells' given values, which [Board::reset] restores,
    /// and every domain reflects the clues of the cell's group-mates.
    ///
    /// # Errors
    ///
    /// * `BoardError::InvalidDimensions`: If `box_width` or `box_height` is
    /// zero or their product exceeds [MAX_SYMBOLS](util::MAX_SYMBOLS).
    /// * `BoardError::WrongNumberOfCells`: If `values` does not contain
    /// exactly `size * size` entries.
    /// * `BoardError::InvalidNumber`: If an entry is greater than the size.
    pub fn with_givens(box_width: usize, box_height: usize, values: &[usize])
            -> BoardResult<Board> {
        let mut board = Board::new(box_width, box_height)?;
        let size = board.size;

        if values.len() != size * size {
            return Err(BoardError::WrongNumberOfCells);
        }

        for (i, &value) in values.iter().enumerate() {
            if value > size {
                return Err(BoardError::InvalidNumber);
            }

            if value > 0 {
                board.cells[i].given = Some(value);
                board.cells[i].value = Some(value);
            }
        }

        board.rebuild_domains();
        Ok(board)
    }

    /// Parses a puzzle in the external text format. The first line contains
    /// the side length `n`, the second line the box width and box height
    /// (whose product must be `n`), followed by `n` lines of `n`
    /// space-separated integers each, where `0` denotes an empty cell and `1`
    /// to `n` a given clue.
    ///
    /// As an example, the following text parses to a 4×4 puzzle with 2x2
    /// boxes whose bottom half is empty:
    ///
    /// ```text
    /// 4
    /// 2 2
    /// 1 2 3 4
    /// 3 4 1 2
    /// 0 0 0 0
    /// 0 0 0 0
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `ParseError` (see that documentation). Each
    /// variant carries the 1-based number of the offending line. No partial
    /// board is produced on error.
    pub fn parse(text: &str) -> ParseResult<Board> {
        let mut lines = text.lines();
        let mut line_number = 0;
        let mut next_line = || {
            line_number += 1;
            (line_number, lines.next())
        };

        let (size_line_number, size_line) = next_line();
        let size_line = size_line
            .ok_or(ParseError::UnexpectedEnd(size_line_number))?;
        let size_token = size_line.split_whitespace().next()
            .ok_or_else(|| ParseError::MalformedToken(size_line_number,
                String::from(size_line)))?;
        let size = parse_number(size_line_number, size_token)?;

        if size == 0 || size > MAX_SYMBOLS {
            return Err(ParseError::InvalidSize(size_line_number));
        }

        let (box_line_number, box_line) = next_line();
        let box_line = box_line
            .ok_or(ParseError::UnexpectedEnd(box_line_number))?;
        let box_tokens: Vec<&str> = box_line.split_whitespace().collect();

        if box_tokens.len() != 2 {
            return Err(ParseError::MalformedBoxDimensions(box_line_number));
        }

        let box_width = parse_number(box_line_number, box_tokens[0])?;
        let box_height = parse_number(box_line_number, box_tokens[1])?;

        if box_width * box_height != size {
            return Err(ParseError::MalformedBoxDimensions(box_line_number));
        }

        let mut values = Vec::with_capacity(size * size);

        for _ in 0..size {
            let (row_line_number, row_line) = next_line();
            let row_line = row_line
                .ok_or(ParseError::UnexpectedEnd(row_line_number))?;
            let tokens: Vec<&str> = row_line.split_whitespace().collect();

            if tokens.len() != size {
                return Err(
                    ParseError::WrongNumberOfEntries(row_line_number));
            }

            for token in tokens {
                let value = parse_number(row_line_number, token)?;

                if value > size {
                    return Err(
                        ParseError::InvalidEntry(row_line_number, value));
                }

                values.push(value);
            }
        }

        match Board::with_givens(box_width, box_height, &values) {
            Ok(board) => Ok(board),
            Err(_) => Err(ParseError::InvalidSize(size_line_number))
        }
    }

    /// Reads a puzzle in the format described by [Board::parse] from the
    /// file at the given path.
    ///
    /// # Errors
    ///
    /// * `LoadError::SourceUnavailable`: If the file cannot be read. The
    /// error carries the attempted path.
    /// * `LoadError::Malformed`: If the content is rejected by
    /// [Board::parse].
    pub fn from_file(path: impl AsRef<Path>) -> LoadResult<Board> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|_|
                LoadError::SourceUnavailable(path.display().to_string()))?;
        Ok(Board::parse(&text)?)
    }

    /// Gets the width (number of columns) of one box of the board. To ensure
    /// a square board, this is also the number of boxes that compose the
    /// board vertically.
    pub fn box_width(&self) -> usize {
        self.box_width
    }

    /// Gets the height (number of rows) of one box of the board. To ensure a
    /// square board, this is also the number of boxes that compose the board
    /// horizontally.
    pub fn box_height(&self) -> usize {
        self.box_height
    }

    /// Gets the total size of the board on one axis (horizontally or
    /// vertically). Since a square board is enforced at construction time,
    /// this is guaranteed to be valid for both axes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Gets a reference to the cell with the given index in row-major order.
    /// Panics if the index is out of bounds.
    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// Computes the row-major cell index of the given coordinates.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` is greater than or equal to the size. In
    /// that case, `BoardError::OutOfBounds` is returned.
    pub fn index_of(&self, column: usize, row: usize) -> BoardResult<usize> {
        if column >= self.size || row >= self.size {
            Err(BoardError::OutOfBounds)
        }
        else {
            Ok(index(column, row, self.size))
        }
    }

    /// Gets the row groups of this board. Each group is the ordered list of
    /// cell indices that compose one row.
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// Gets the column groups of this board. Each group is the ordered list
    /// of cell indices that compose one column.
    pub fn columns(&self) -> &[Vec<usize>] {
        &self.columns
    }

    /// Gets the box groups of this board. Each group is the ordered list of
    /// cell indices that compose one box, where boxes are numbered in
    /// row-major order within the box grid.
    pub fn boxes(&self) -> &[Vec<usize>] {
        &self.boxes
    }

    fn check_cell_and_symbol(&self, index: usize, symbol: usize)
            -> BoardResult<()> {
        if index >= self.cells.len() {
            Err(BoardError::OutOfBounds)
        }
        else if symbol == 0 || symbol > self.size {
            Err(BoardError::InvalidNumber)
        }
        else {
            Ok(())
        }
    }

    /// Indicates whether the given symbol is legal for the cell with the
    /// given index, that is, whether no other cell sharing the cell's row,
    /// column or box currently holds that symbol. This is the legality
    /// predicate all solving strategies are built on; the symbol currently
    /// held by the cell itself is ignored.
    pub fn is_legal(&self, index: usize, symbol: usize) -> bool {
        let cell = &self.cells[index];
        let groups = [
            &self.rows[cell.row],
            &self.columns[cell.column],
            &self.boxes[cell.box_index]
        ];

        for group in groups.iter() {
            for &peer in group.iter() {
                if peer != index && self.cells[peer].value == Some(symbol) {
                    return false;
                }
            }
        }

        true
    }

    /// Computes the domain of the cell with the given index directly from
    /// the legality predicate: a symbol is a candidate if and only if no
    /// group-mate currently holds it. The cell's stored domain is not
    /// consulted or changed.
    pub fn computed_domain(&self, index: usize) -> SymbolSet {
        let mut domain = SymbolSet::empty(self.size).unwrap();

        for symbol in 1..=self.size {
            if self.is_legal(index, symbol) {
                domain.insert(symbol).unwrap();
            }
        }

        domain
    }

    /// Recomputes the stored domain of the cell with the given index from
    /// the legality predicate, as done by sweeping propagation. Returns
    /// `true` if the stored domain changed.
    pub fn refresh_domain(&mut self, index: usize) -> bool {
        let computed = self.computed_domain(index);
        let changed = self.cells[index].domain != computed;
        self.cells[index].domain = computed;
        changed
    }

    /// If the cell with the given index is unassigned and its stored domain
    /// contains exactly one symbol, assigns that symbol to the cell, clears
    /// the domain and returns the symbol. Otherwise, nothing happens and
    /// `None` is returned. This is the only way propagation fixes values.
    pub fn fix_singleton(&mut self, index: usize) -> Option<usize> {
        let cell = &mut self.cells[index];

        if cell.is_assigned() {
            return None;
        }

        let symbol = cell.domain.only()?;
        cell.value = Some(symbol);
        cell.domain.clear();
        Some(symbol)
    }

    /// Removes the given symbol from the domain of the cell with the given
    /// index and returns whether the domain changed.
    ///
    /// # Errors
    ///
    /// * `BoardError::OutOfBounds`: If `index` is not a valid cell index.
    /// * `BoardError::InvalidNumber`: If `symbol` is zero or greater than
    /// the size.
    pub fn remove_candidate(&mut self, index: usize, symbol: usize)
            -> BoardResult<bool> {
        self.check_cell_and_symbol(index, symbol)?;
        Ok(self.cells[index].domain.remove(symbol).unwrap())
    }

    /// Assigns the given symbol to the cell with the given index and removes
    /// the symbol from the domain of every other cell sharing the cell's
    /// row, column or box. This is the generator's only domain-mutating
    /// primitive: an assignment is legal only if the symbol is still in the
    /// cell's domain, and violating that contract is rejected as an error
    /// rather than silently tolerated.
    ///
    /// # Errors
    ///
    /// * `BoardError::OutOfBounds`: If `index` is not a valid cell index.
    /// * `BoardError::InvalidNumber`: If `symbol` is zero or greater than
    /// the size.
    /// * `BoardError::NotInDomain`: If the cell's domain does not contain
    /// `symbol`.
    pub fn assign(&mut self, index: usize, symbol: usize) -> BoardResult<()> {
        self.check_cell_and_symbol(index, symbol)?;

        if !self.cells[index].domain.contains(symbol) {
            return Err(BoardError::NotInDomain);
        }

        self.cells[index].value = Some(symbol);
        let cell = &self.cells[index];
        let row = cell.row;
        let column = cell.column;
        let box_index = cell.box_index;

        for group_index in 0..self.size {
            let in_row = self.rows[row][group_index];
            let in_column = self.columns[column][group_index];
            let in_box = self.boxes[box_index][group_index];

            for &peer in [in_row, in_column, in_box].iter() {
                if peer != index {
                    self.cells[peer].domain.remove(symbol).unwrap();
                }
            }
        }

        Ok(())
    }

    /// Sets the value of the cell with the given index without touching any
    /// domain. This is the solvers' primitive; solvers recompute domains on
    /// demand instead of maintaining them incrementally.
    ///
    /// # Errors
    ///
    /// * `BoardError::OutOfBounds`: If `index` is not a valid cell index.
    /// * `BoardError::InvalidNumber`: If `symbol` is zero or greater than
    /// the size.
    pub fn set_value(&mut self, index: usize, symbol: usize)
            -> BoardResult<()> {
        self.check_cell_and_symbol(index, symbol)?;
        self.cells[index].value = Some(symbol);
        Ok(())
    }

    /// Clears the value of the cell with the given index without touching
    /// any domain. If the cell is already unassigned, it is left that way.
    ///
    /// # Errors
    ///
    /// If `index` is not a valid cell index. In that case,
    /// `BoardError::OutOfBounds` is returned.
    pub fn clear_value(&mut self, index: usize) -> BoardResult<()> {
        if index >= self.cells.len() {
            return Err(BoardError::OutOfBounds);
        }

        self.cells[index].value = None;
        Ok(())
    }

    /// Captures the (value, domain) state of every cell on this board. The
    /// snapshot can later be handed to [Board::restore] to roll the board
    /// back exactly to the captured state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            states: self.cells.iter()
                .map(|c| (c.value, c.domain))
                .collect()
        }
    }

    /// Restores the (value, domain) state of every cell from a snapshot
    /// previously captured on this board by [Board::snapshot]. Panics if the
    /// snapshot stems from a board of different dimensions.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        assert_eq!(self.cells.len(), snapshot.states.len(),
            "snapshot stems from a board of different dimensions");

        for (cell, &(value, domain)) in
                self.cells.iter_mut().zip(snapshot.states.iter()) {
            cell.value = value;
            cell.domain = domain;
        }
    }

    fn rebuild_domains(&mut self) {
        for i in 0..self.cells.len() {
            let domain = if self.cells[i].is_assigned() {
                SymbolSet::empty(self.size).unwrap()
            }
            else {
                self.computed_domain(i)
            };

            self.cells[i].domain = domain;
        }
    }

    /// Restores every cell to its initial given-or-empty state and
    /// recomputes all domains, so the board is indistinguishable from a
    /// freshly constructed board with the same givens. Callers that run
    /// multiple solving strategies against the same logical puzzle must call
    /// this between runs; the engine provides no implicit isolation across
    /// successive solves sharing one board instance.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.value = cell.given;
        }

        self.rebuild_domains();
    }

    fn group_valid(&self, group: &[usize]) -> bool {
        !contains_duplicate(group.iter()
            .filter_map(|&i| self.cells[i].value))
    }

    /// Indicates whether no two assigned cells sharing a row, column or box
    /// hold the same symbol. Unassigned cells are ignored, so a partially
    /// filled board can be valid.
    pub fn is_valid(&self) -> bool {
        self.rows.iter()
            .chain(self.columns.iter())
            .chain(self.boxes.iter())
            .all(|group| self.group_valid(group))
    }

    /// Indicates whether every cell of this board holds a symbol.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Cell::is_assigned)
    }

    /// Indicates whether this board is completely filled and every row,
    /// column and box holds every symbol exactly once.
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.is_valid()
    }
}
