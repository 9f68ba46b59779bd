//! This module contains some error and result definitions used in this crate.

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not include errors that occur when
/// parsing puzzle text, see [ParseError](enum.ParseError.html) for that.
#[derive(Debug, Eq, PartialEq)]
pub enum BoardError {

    /// Indicates that the dimensions specified for a created board are
    /// invalid. This is the case if they are less than 1 or if the resulting
    /// side length exceeds the symbol alphabet.
    InvalidDimensions,

    /// Indicates that some symbol is invalid for the size of the board in
    /// question. This is the case if it is less than 1 or greater than the
    /// size.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the board in question. This is the case if they are greater than or
    /// equal to the size.
    OutOfBounds,

    /// Indicates that the number of initial values handed to a board
    /// constructor does not equal the number of cells of a board with the
    /// given dimensions.
    WrongNumberOfCells,

    /// Indicates that it was attempted to assign a symbol to a cell whose
    /// domain does not contain that symbol. Assignments outside the domain
    /// are contract violations on the caller's side and are rejected rather
    /// than silently tolerated.
    NotInDomain
}

/// Syntactic sugar for `Result<V, BoardError>`.
pub type BoardResult<V> = Result<V, BoardError>;

/// An enumeration of the errors that may occur when parsing puzzle text. All
/// variants that relate to a specific part of the input carry the 1-based
/// number of the offending line, so malformed input can be reported usefully.
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {

    /// Indicates that the input ended before all expected lines (size line,
    /// box dimension line and one line per row) were present. Contains the
    /// 1-based number of the first missing line.
    UnexpectedEnd(usize),

    /// Indicates that a token that should have been a number could not be
    /// parsed as one. Contains the 1-based line number and the token itself.
    MalformedToken(usize, String),

    /// Indicates that the box dimension line does not contain exactly two
    /// numbers or that their product does not equal the declared side length.
    /// Contains the 1-based line number.
    MalformedBoxDimensions(usize),

    /// Indicates that the declared side length is invalid, i.e. zero or
    /// larger than the symbol alphabet. Contains the 1-based line number.
    InvalidSize(usize),

    /// Indicates that a row line does not contain exactly as many entries as
    /// the declared side length. Contains the 1-based line number.
    WrongNumberOfEntries(usize),

    /// Indicates that a cell entry is out of range, i.e. greater than the
    /// declared side length (0 denotes an empty cell and is always allowed).
    /// Contains the 1-based line number and the offending value.
    InvalidEntry(usize, usize)
}

/// Syntactic sugar for `Result<V, ParseError>`.
pub type ParseResult<V> = Result<V, ParseError>;

/// An enumeration of the errors that may occur when loading puzzle text from
/// a file.
#[derive(Debug, Eq, PartialEq)]
pub enum LoadError {

    /// Indicates that the puzzle source could not be read at all. Contains
    /// the path whose read was attempted.
    SourceUnavailable(String),

    /// Indicates that the source was readable, but its content was rejected
    /// by the parser.
    Malformed(ParseError)
}

impl From<ParseError> for LoadError {
    fn from(e: ParseError) -> Self {
        LoadError::Malformed(e)
    }
}

/// Syntactic sugar for `Result<V, LoadError>`.
pub type LoadResult<V> = Result<V, LoadError>;
