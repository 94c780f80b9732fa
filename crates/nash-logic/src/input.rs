//! Loading payoff matrices from JSON
//!
//! Accepted shape:
//! `{"rows": [[[p1, p2], [p1, p2]], [[p1, p2], [p1, p2]]]}`
//!
//! Cells are read as raw JSON values first so that a malformed cell is
//! reported with its position instead of as a generic parse failure.

use std::io::Read;
use serde::Deserialize;
use serde_json::Value;
use crate::error::{CellError, MatrixError, Result};
use crate::matrix::{check_shape, Cell, PayoffMatrix};

/// Unvalidated matrix document, as it appears on the wire
#[derive(Clone, Debug, Deserialize)]
pub struct MatrixDocument {
    pub rows: Vec<Vec<Value>>,
}

impl MatrixDocument {
    /// Validate shape, then every cell, then build the matrix.
    pub fn into_matrix(self) -> Result<PayoffMatrix> {
        check_shape(self.rows.iter().map(Vec::len))?;
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, value)| parse_cell(value).map_err(|e| MatrixError::cell(r, c, e)))
                    .collect::<Result<Vec<Cell>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        PayoffMatrix::new(rows)
    }
}

/// Read one `[p1, p2]` cell
fn parse_cell(value: &Value) -> std::result::Result<Cell, CellError> {
    let pair = value.as_array().ok_or(CellError::NotAPair)?;
    if pair.len() != 2 {
        return Err(CellError::WrongArity(pair.len()));
    }
    let p1 = parse_payoff(&pair[0])?;
    let p2 = parse_payoff(&pair[1])?;
    Ok(Cell::new(p1, p2))
}

fn parse_payoff(value: &Value) -> std::result::Result<f64, CellError> {
    value
        .as_f64()
        .ok_or_else(|| CellError::NotANumber(value.to_string()))
}

impl PayoffMatrix {
    /// Parse and validate a JSON matrix document
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: MatrixDocument = serde_json::from_str(json)?;
        doc.into_matrix()
    }

    /// Parse and validate a JSON matrix document from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let doc: MatrixDocument = serde_json::from_reader(reader)?;
        doc.into_matrix()
    }

    /// Validate an already-parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        let doc: MatrixDocument = serde_json::from_value(value)?;
        doc.into_matrix()
    }
}
