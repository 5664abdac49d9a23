use std::fmt;

use crate::error::{Error, Result};

/// The storable column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Int,
    Float,
    Text,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColumnType::Int => "INT",
            ColumnType::Float => "FLOAT",
            ColumnType::Text => "TEXT",
        })
    }
}

/// A single encoded value at a row/column intersection.
///
/// TEXT cells hold the raw UTF-8 bytes of the value; INT and FLOAT cells
/// hold exactly eight big-endian bytes (two's complement and IEEE 754
/// respectively). The decoders are total over encoder output; decoding a
/// cell under the wrong type is a programming error and panics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell(Vec<u8>);

impl Cell {
    pub fn from_int(value: i64) -> Self {
        Cell(value.to_be_bytes().to_vec())
    }

    pub fn from_float(value: f64) -> Self {
        Cell(value.to_be_bytes().to_vec())
    }

    pub fn from_text(value: &str) -> Self {
        Cell(value.as_bytes().to_vec())
    }

    /// Parses a literal and encodes it for the given column type: INT by
    /// base-10 parse, FLOAT by decimal parse, TEXT verbatim.
    pub fn encode(literal: &str, column_type: ColumnType) -> Result<Cell> {
        match column_type {
            ColumnType::Int => literal
                .parse::<i64>()
                .map(Cell::from_int)
                .map_err(|_| Error::InvalidDataType),
            ColumnType::Float => literal
                .parse::<f64>()
                .map(Cell::from_float)
                .map_err(|_| Error::InvalidDataType),
            ColumnType::Text => Ok(Cell::from_text(literal)),
        }
    }

    pub fn as_int(&self) -> i64 {
        i64::from_be_bytes(
            self.0
                .as_slice()
                .try_into()
                .expect("an INT cell holds exactly 8 bytes"),
        )
    }

    pub fn as_float(&self) -> f64 {
        f64::from_be_bytes(
            self.0
                .as_slice()
                .try_into()
                .expect("a FLOAT cell holds exactly 8 bytes"),
        )
    }

    pub fn as_text(&self) -> &str {
        std::str::from_utf8(&self.0).expect("a TEXT cell holds valid UTF-8")
    }

    /// The wire bytes; their length is carried by the cell itself.
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}
