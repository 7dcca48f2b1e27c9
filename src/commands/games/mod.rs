//! This module contains the shared game engine and common utilities for all games.
//!
//! It declares the sub-modules for the session engine, cards, and card sources,
//! and re-exports the pieces every interactive game needs.

pub mod card;
pub mod engine;
pub mod shoe;

pub use engine::{Dispatch, Game, GameManager, GamePayout, GameUpdate};
