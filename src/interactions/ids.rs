//! Centralized custom_id string constants for interaction components.
//! Consolidating here reduces typos and keeps routing and rendering in agreement.

// Mines grid
pub const MINES_PREFIX: &str = "mines_";
pub const MINES_CELL_PREFIX: &str = "mines_cell_"; // followed by cell index 0..25

// Blackjack actions
pub const BJ_PREFIX: &str = "bj_";
pub const BJ_HIT: &str = "bj_hit";
pub const BJ_STAND: &str = "bj_stand";

/// Component families routed to the session manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Mines,
    Blackjack,
}

pub fn family(id: &str) -> Option<Family> {
    if id.starts_with(MINES_PREFIX) {
        Some(Family::Mines)
    } else if id.starts_with(BJ_PREFIX) {
        Some(Family::Blackjack)
    } else {
        None
    }
}

pub fn mines_cell_id(idx: usize) -> String {
    format!("{MINES_CELL_PREFIX}{idx}")
}

/// Parse a mines cell custom_id into its index.
/// Expected form: `mines_cell_<idx>`.
pub fn parse_mines_cell(id: &str) -> Option<usize> {
    id.strip_prefix(MINES_CELL_PREFIX)?.parse::<usize>().ok()
}
