//! Human-readable equilibrium report

use serde::{Deserialize, Serialize};
use crate::equilibrium::Equilibrium;

/// Printed when the game has no pure-strategy equilibrium
pub const NO_EQUILIBRIUM: &str = "There is no Nash equilibrium in pure strategies.";

/// Outcome of one detector run, ready to print
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    equilibria: Vec<Equilibrium>,
}

impl Report {
    pub fn new(equilibria: Vec<Equilibrium>) -> Self {
        Self { equilibria }
    }

    pub fn equilibria(&self) -> &[Equilibrium] {
        &self.equilibria
    }

    pub fn is_empty(&self) -> bool {
        self.equilibria.is_empty()
    }

    /// One line per equilibrium, or the single "none" line
    pub fn lines(&self) -> Vec<String> {
        if self.equilibria.is_empty() {
            return vec![NO_EQUILIBRIUM.to_string()];
        }
        self.equilibria.iter().map(describe_equilibrium).collect()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Sentence for one equilibrium, with 1-based strategy numbers
pub fn describe_equilibrium(equilibrium: &Equilibrium) -> String {
    format!(
        "The combination of strategy {} (Player 1) and strategy {} (Player 2) \
         is a pure Nash equilibrium with payoffs {}.",
        equilibrium.player1_strategy(),
        equilibrium.player2_strategy(),
        equilibrium.payoffs,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equilibrium::strict_equilibrium;
    use crate::matrix::{Cell, Coord, PayoffMatrix};

    #[test]
    fn test_reference_game_text() {
        let report = strict_equilibrium(&PayoffMatrix::default());
        assert_eq!(
            report.to_string(),
            "The combination of strategy 2 (Player 1) and strategy 2 (Player 2) \
             is a pure Nash equilibrium with payoffs (2, 2).\n"
        );
    }

    #[test]
    fn test_no_equilibrium_text() {
        let report = Report::new(Vec::new());
        assert!(report.is_empty());
        assert_eq!(report.lines(), vec![NO_EQUILIBRIUM.to_string()]);
        assert_eq!(report.to_string(), "There is no Nash equilibrium in pure strategies.\n");
    }

    #[test]
    fn test_fractional_payoffs() {
        let line = describe_equilibrium(&Equilibrium {
            at: Coord::new(0, 2),
            payoffs: Cell::new(-1.5, 0.25),
        });
        assert_eq!(
            line,
            "The combination of strategy 1 (Player 1) and strategy 3 (Player 2) \
             is a pure Nash equilibrium with payoffs (-1.5, 0.25)."
        );
    }

    #[test]
    fn test_multiple_lines_in_order() {
        let m = PayoffMatrix::from_pairs(vec![
            vec![(0.0, 0.0), (2.0, 1.0)],
            vec![(1.0, 2.0), (0.0, 0.0)],
        ])
        .unwrap();
        let lines = strict_equilibrium(&m).lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("The combination of strategy 2 (Player 1) and strategy 1"));
        assert!(lines[1].starts_with("The combination of strategy 1 (Player 1) and strategy 2"));
        assert!(lines[1].ends_with("with payoffs (2, 1)."));
    }

    #[test]
    fn test_json_form() {
        let report = strict_equilibrium(&PayoffMatrix::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "equilibria": [{ "at": { "row": 1, "col": 1 }, "payoffs": [2.0, 2.0] }]
            })
        );
    }
}
