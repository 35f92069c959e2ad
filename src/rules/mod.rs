//! Knight move rules on a bounded board.

pub mod movegen;
