//! This module contains the complete, self-contained implementation for the Mines game.

pub mod game;
pub mod run;
pub mod state;
pub mod ui;

// Publicly re-export the functions needed by the central command handler.
pub use run::{register, run_slash};
