//! Best-response sets
//!
//! Payoffs are compared with exact `==` against the slice maximum. No
//! epsilon is applied, so `0.1 + 0.2` and `0.3` are different payoffs.

use serde::{Deserialize, Serialize};
use crate::matrix::{Cell, Coord, PayoffMatrix};

/// One side of the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Chooses the row
    One,
    /// Chooses the column
    Two,
}

impl Player {
    pub fn payoff(self, cell: Cell) -> f64 {
        match self {
            Player::One => cell.p1,
            Player::Two => cell.p2,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Best responses of `player` against every strategy of the opponent
pub fn best_responses(matrix: &PayoffMatrix, player: Player) -> Vec<Coord> {
    match player {
        Player::One => best_responses_player1(matrix),
        Player::Two => best_responses_player2(matrix),
    }
}

/// Player 1's best responses.
///
/// For every column, every row whose `p1` equals the column maximum.
/// Ordered by column, then row.
pub fn best_responses_player1(matrix: &PayoffMatrix) -> Vec<Coord> {
    let mut responses = Vec::with_capacity(matrix.cols());
    for col in 0..matrix.cols() {
        let best = max_payoff(matrix.column(col).map(|cell| cell.p1));
        responses.extend(
            matrix
                .column(col)
                .enumerate()
                .filter(|(_, cell)| cell.p1 == best)
                .map(|(row, _)| Coord::new(row, col)),
        );
    }
    responses
}

/// Player 2's best responses.
///
/// For every row, every column whose `p2` equals the row maximum.
/// Ordered by row, then column.
pub fn best_responses_player2(matrix: &PayoffMatrix) -> Vec<Coord> {
    let mut responses = Vec::with_capacity(matrix.rows());
    for (row, cells) in matrix.iter_rows().enumerate() {
        let best = max_payoff(cells.iter().map(|cell| cell.p2));
        responses.extend(
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.p2 == best)
                .map(|(col, _)| Coord::new(row, col)),
        );
    }
    responses
}

/// Largest payoff in a non-empty slice of finite payoffs
fn max_payoff(payoffs: impl Iterator<Item = f64>) -> f64 {
    payoffs.fold(f64::NEG_INFINITY, f64::max)
}
