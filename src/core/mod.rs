//! Board primitives shared by move generation, the advisor and the tour controller.
//!
//! - [`position`]: signed `(row, col)` squares and the fixed knight delta table.
//! - [`board`]: the N×N visit-order grid.

pub mod board;
pub mod position;
