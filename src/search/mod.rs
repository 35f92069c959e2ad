//! Move advice: the Warnsdorff advisor and walks that follow it.

pub mod walk;
pub mod warnsdorff;
