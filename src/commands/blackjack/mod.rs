//! This module contains the complete, self-contained implementation for the Blackjack game.
//!
//! The code is split by responsibility: `state` holds the rules, `game` adapts
//! them to the session engine, `ui` renders, and `run` starts a session.
pub mod game;
pub mod run;
pub mod state;
pub mod ui;

// Publicly re-export the functions needed by the central command handler.
pub use run::{register, run_slash};
