#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited
#![allow(clippy::missing_errors_doc)] // error strings are self-describing
#![allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)] // small grids, counts fit

pub mod board;
pub mod parse;
pub mod scramble;
pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::Board;
pub use crate::parse::{load_board_from_file, parse_board};
pub use crate::scramble::scramble;
pub use crate::solver::{Solver, TwinPrune};
