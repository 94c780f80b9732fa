//! Payoff matrix for a two-player normal-form game

use serde::{Deserialize, Serialize};
use crate::error::{CellError, MatrixError, Result, ShapeError};
use crate::input::MatrixDocument;

/// Payoffs of one strategy combination: (Player 1, Player 2)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Cell {
    pub p1: f64,
    pub p2: f64,
}

impl Cell {
    pub const fn new(p1: f64, p2: f64) -> Self {
        Self { p1, p2 }
    }

    /// Same payoffs seen from the other side of the table
    pub const fn swapped(self) -> Self {
        Self { p1: self.p2, p2: self.p1 }
    }
}

impl From<(f64, f64)> for Cell {
    fn from((p1, p2): (f64, f64)) -> Self {
        Self { p1, p2 }
    }
}

impl From<Cell> for (f64, f64) {
    fn from(cell: Cell) -> Self {
        (cell.p1, cell.p2)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.p1, self.p2)
    }
}

/// Zero-based (row, column) position.
///
/// `row` is Player 1's strategy, `col` is Player 2's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn transposed(self) -> Self {
        Self { row: self.col, col: self.row }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Validated R x C payoff matrix (R, C >= 1, every row C cells long,
/// every payoff finite).
///
/// Immutable once built. The only way in is through a validating
/// constructor, so downstream code indexes without bounds worries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixDocument")]
pub struct PayoffMatrix {
    rows: Vec<Vec<Cell>>,
}

impl PayoffMatrix {
    /// Build from rows of cells, checking shape and payoffs.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let cols = check_shape(rows.iter().map(Vec::len))?;
        debug_assert!(cols > 0);

        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                for payoff in [cell.p1, cell.p2] {
                    if !payoff.is_finite() {
                        return Err(MatrixError::cell(r, c, CellError::NotFinite(payoff)));
                    }
                }
            }
        }

        Ok(Self { rows })
    }

    /// Build from nested `(p1, p2)` tuples
    pub fn from_pairs<R, C>(rows: R) -> Result<Self>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = (f64, f64)>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(Cell::from).collect())
                .collect(),
        )
    }

    /// Number of Player 1 strategies
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of Player 2 strategies
    pub fn cols(&self) -> usize {
        self.rows[0].len()
    }

    pub fn cell(&self, at: Coord) -> Cell {
        self.rows[at.row][at.col]
    }

    pub fn get(&self, at: Coord) -> Option<Cell> {
        self.rows.get(at.row)?.get(at.col).copied()
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        &self.rows[row]
    }

    /// Cells of one column, top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().map(move |row| row[col])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// The same game with the players' roles exchanged.
    ///
    /// Cell (r, c) = (a, b) becomes cell (c, r) = (b, a).
    pub fn transposed(&self) -> Self {
        let rows = (0..self.cols())
            .map(|c| self.column(c).map(Cell::swapped).collect())
            .collect();
        Self { rows }
    }
}

impl Default for PayoffMatrix {
    /// [[(3,3), (1,4)], [(4,1), (2,2)]]
    fn default() -> Self {
        Self {
            rows: vec![
                vec![Cell::new(3.0, 3.0), Cell::new(1.0, 4.0)],
                vec![Cell::new(4.0, 1.0), Cell::new(2.0, 2.0)],
            ],
        }
    }
}

impl PayoffMatrix {
    /// The classic Prisoner's Dilemma.
    ///
    /// Strategy 1 is Cooperate, strategy 2 is Defect.
    pub fn prisoners_dilemma() -> Self {
        Self {
            rows: vec![
                vec![Cell::new(3.0, 3.0), Cell::new(0.0, 5.0)],
                vec![Cell::new(5.0, 0.0), Cell::new(1.0, 1.0)],
            ],
        }
    }
}

impl TryFrom<MatrixDocument> for PayoffMatrix {
    type Error = MatrixError;

    fn try_from(doc: MatrixDocument) -> Result<Self> {
        doc.into_matrix()
    }
}

/// Check R >= 1, C >= 1 and that every row has the first row's length.
///
/// Returns C.
pub(crate) fn check_shape(lengths: impl IntoIterator<Item = usize>) -> Result<usize> {
    let mut lengths = lengths.into_iter();
    let expected = lengths.next().ok_or(ShapeError::Empty)?;
    if expected == 0 {
        return Err(ShapeError::NoColumns.into());
    }
    for (i, found) in lengths.enumerate() {
        if found != expected {
            return Err(ShapeError::Ragged { row: i + 1, expected, found }.into());
        }
    }
    Ok(expected)
}
