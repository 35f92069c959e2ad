//! A knight's-tour engine: move generation, a one-ply Warnsdorff advisor and a tour
//! controller that tracks visits and detects the end of the game.

pub mod config;
pub mod core;
pub mod game;
pub mod input;
pub mod render;
pub mod rules;
pub mod search;
pub mod state;
pub mod telemetry;
