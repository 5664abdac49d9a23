use std::fmt;

use thiserror::Error;

use crate::token::{Location, TokenKind};

/// Convenience alias used by every fallible operation in the engine.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the engine can surface, from syntax to execution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The source text could not be parsed; nothing was executed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A CREATE TABLE column type is not INT, FLOAT or TEXT, or a value
    /// literal could not be encoded for its column's type.
    #[error("Invalid datatype")]
    InvalidDataType,

    #[error("Table not found")]
    TableNotFound,

    #[error("Table already exists")]
    TableExists,

    #[error("Column not found")]
    ColumnNotFound,

    /// A predicate applied an operator to operand types it is not
    /// defined for, or to an absent operand.
    #[error("invalid operation")]
    InvalidOperation,
}

/// A syntax error with the source location of the offending token.
///
/// `location` is `None` when the parser was asked to omit it; otherwise
/// the rendered message is prefixed with `line L, col C: `.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: Option<Location>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = self.location {
            write!(f, "line {}, col {}: ", location.line, location.col)?;
        }
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ParseError {}

/// The reasons a parse can fail. Message strings are stable; tests pin
/// them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("invalid keyword {0:?}")]
    InvalidKeyword(String),

    #[error("expected {0}")]
    ExpectedToken(TokenKind),

    #[error("expected table name")]
    ExpectedTableName,

    #[error("expected column name")]
    ExpectedColumnName,

    #[error("expected column type")]
    ExpectedColumnType,

    #[error("expected value")]
    ExpectedValue,

    /// A SELECT or INSERT column list with no columns in it.
    #[error("must specify a column name")]
    EmptyColumnsList,

    /// A CREATE TABLE with an empty column definition list.
    #[error("must specify column definitions")]
    EmptyColumnDefinitions,

    /// An INSERT whose column and value lists differ in length.
    #[error("number of values must match number of columns")]
    ValueCountMismatch,

    #[error("no prefix parse function for {0}")]
    NoPrefixParser(TokenKind),
}
