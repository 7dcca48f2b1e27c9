//! This module acts as a central router for all component interactions.
//!
//! The main `handler.rs` file delegates here based on the component's custom_id
//! "family" (`mines_…`, `bj_…`). Game families go to the session manager.

pub mod game_handler;
pub mod ids;
pub mod util;
