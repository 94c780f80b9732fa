//! Pure-strategy Nash equilibrium detection

use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use crate::matrix::{Cell, Coord, PayoffMatrix};
use crate::report::Report;
use crate::response::{best_responses_player1, best_responses_player2};

/// A cell where both strategies are mutual best responses
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Equilibrium {
    pub at: Coord,
    pub payoffs: Cell,
}

impl Equilibrium {
    /// Player 1's strategy, counted from 1
    pub fn player1_strategy(&self) -> usize {
        self.at.row + 1
    }

    /// Player 2's strategy, counted from 1
    pub fn player2_strategy(&self) -> usize {
        self.at.col + 1
    }
}

/// All pure-strategy Nash equilibria of `matrix`.
///
/// Intersects Player 1's and Player 2's best-response sets. The result
/// keeps the order of Player 1's set (column by column, rows ascending
/// within a column). Empty when no pure equilibrium exists.
pub fn find_equilibria(matrix: &PayoffMatrix) -> Vec<Equilibrium> {
    let responses_1 = best_responses_player1(matrix);
    let responses_2: HashSet<Coord> = best_responses_player2(matrix).into_iter().collect();

    let equilibria: Vec<Equilibrium> = responses_1
        .iter()
        .filter(|at| responses_2.contains(*at))
        .map(|&at| Equilibrium { at, payoffs: matrix.cell(at) })
        .collect();

    log::debug!(
        "{}x{} game: {} player 1 responses, {} player 2 responses, {} equilibria",
        matrix.rows(),
        matrix.cols(),
        responses_1.len(),
        responses_2.len(),
        equilibria.len(),
    );
    equilibria
}

/// Whether `at` is a pure Nash equilibrium: no player gains by deviating alone.
///
/// Out-of-range coordinates are never equilibria.
pub fn is_equilibrium(matrix: &PayoffMatrix, at: Coord) -> bool {
    let Some(cell) = matrix.get(at) else {
        return false;
    };
    let row_holds = matrix.column(at.col).all(|other| other.p1 <= cell.p1);
    let col_holds = matrix.row(at.row).iter().all(|other| other.p2 <= cell.p2);
    row_holds && col_holds
}

/// Run the detector and wrap the outcome for presentation
pub fn strict_equilibrium(matrix: &PayoffMatrix) -> Report {
    Report::new(find_equilibria(matrix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn game(rows: Vec<Vec<(f64, f64)>>) -> PayoffMatrix {
        PayoffMatrix::from_pairs(rows).unwrap()
    }

    fn positions(found: &[Equilibrium]) -> Vec<(usize, usize)> {
        found.iter().map(|e| (e.at.row, e.at.col)).collect()
    }

    #[test]
    fn test_reference_game() {
        let found = find_equilibria(&PayoffMatrix::default());
        assert_eq!(positions(&found), vec![(1, 1)]);
        assert_eq!(found[0].payoffs, Cell::new(2.0, 2.0));
        assert_eq!(found[0].player1_strategy(), 2);
        assert_eq!(found[0].player2_strategy(), 2);
    }

    #[test]
    fn test_prisoners_dilemma() {
        let m = game(vec![
            vec![(3.0, 3.0), (0.0, 5.0)],
            vec![(5.0, 0.0), (1.0, 1.0)],
        ]);
        let found = find_equilibria(&m);
        assert_eq!(positions(&found), vec![(1, 1)]);
        assert_eq!(found[0].payoffs, Cell::new(1.0, 1.0));
    }

    #[test]
    fn test_matching_pennies_has_none() {
        let m = game(vec![
            vec![(1.0, -1.0), (-1.0, 1.0)],
            vec![(-1.0, 1.0), (1.0, -1.0)],
        ]);
        assert!(find_equilibria(&m).is_empty());
    }

    #[test]
    fn test_single_cell() {
        let m = game(vec![vec![(5.0, 5.0)]]);
        let found = find_equilibria(&m);
        assert_eq!(positions(&found), vec![(0, 0)]);
        assert_eq!(found[0].payoffs, Cell::new(5.0, 5.0));
    }

    #[test]
    fn test_coordination_game_order() {
        // Two equilibria; reported in player 1's column-by-column order.
        let m = game(vec![
            vec![(0.0, 0.0), (2.0, 1.0)],
            vec![(1.0, 2.0), (0.0, 0.0)],
        ]);
        assert_eq!(positions(&find_equilibria(&m)), vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn test_ties_yield_multiple_equilibria() {
        let m = game(vec![
            vec![(1.0, 1.0), (1.0, 1.0)],
            vec![(1.0, 1.0), (1.0, 1.0)],
        ]);
        assert_eq!(positions(&find_equilibria(&m)), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_is_equilibrium() {
        let m = PayoffMatrix::default();
        assert!(is_equilibrium(&m, Coord::new(1, 1)));
        assert!(!is_equilibrium(&m, Coord::new(0, 0)));
        assert!(!is_equilibrium(&m, Coord::new(1, 0)));
        assert!(!is_equilibrium(&m, Coord::new(5, 0)));
    }

    #[test]
    fn test_strict_equilibrium_wraps_result() {
        let report = strict_equilibrium(&PayoffMatrix::default());
        assert_eq!(report.equilibria(), find_equilibria(&PayoffMatrix::default()).as_slice());
    }

    fn small_matrix() -> impl Strategy<Value = PayoffMatrix> {
        (1usize..5, 1usize..5).prop_flat_map(|(r, c)| {
            prop::collection::vec(prop::collection::vec((-2i8..3, -2i8..3), c), r).prop_map(
                |rows| {
                    PayoffMatrix::from_pairs(rows.into_iter().map(|row| {
                        row.into_iter().map(|(a, b)| (a as f64, b as f64)).collect::<Vec<_>>()
                    }))
                    .expect("generated matrix is rectangular")
                },
            )
        })
    }

    proptest! {
        #[test]
        fn prop_matches_definition(m in small_matrix()) {
            let found: HashSet<Coord> = find_equilibria(&m).into_iter().map(|e| e.at).collect();
            for row in 0..m.rows() {
                for col in 0..m.cols() {
                    let at = Coord::new(row, col);
                    prop_assert_eq!(found.contains(&at), is_equilibrium(&m, at));
                }
            }
        }

        #[test]
        fn prop_symmetric_under_transpose(m in small_matrix()) {
            let mut direct: Vec<Coord> = find_equilibria(&m).into_iter().map(|e| e.at.transposed()).collect();
            let mut swapped: Vec<Coord> = find_equilibria(&m.transposed()).into_iter().map(|e| e.at).collect();
            direct.sort();
            swapped.sort();
            prop_assert_eq!(direct, swapped);
        }

        #[test]
        fn prop_idempotent(m in small_matrix()) {
            prop_assert_eq!(find_equilibria(&m), find_equilibria(&m));
        }

        #[test]
        fn prop_payoffs_match_cells(m in small_matrix()) {
            for e in find_equilibria(&m) {
                prop_assert_eq!(e.payoffs, m.cell(e.at));
            }
        }
    }
}
