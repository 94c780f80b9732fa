//! Nash Logic
//!
//! Pure-strategy Nash equilibria of two-player normal-form games.
//! This crate is compiled to:
//! - Native (for the `nash-report` CLI)
//! - WASM (for browser frontends, `wasm` feature)

mod error;
mod matrix;
mod input;
mod response;
mod equilibrium;
mod report;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{CellError, MatrixError, Result, ShapeError};
pub use matrix::{Cell, Coord, PayoffMatrix};
pub use input::MatrixDocument;
pub use response::{best_responses, best_responses_player1, best_responses_player2, Player};
pub use equilibrium::{find_equilibria, is_equilibrium, strict_equilibrium, Equilibrium};
pub use report::{describe_equilibrium, Report, NO_EQUILIBRIUM};
