//! Handles all rendering for the Mines game.

use super::state::{BoardStatus, Cell, MinesBoard};
use crate::constants::{MINES_CELLS, MINES_ROW_WIDTH};
use crate::interactions::ids::mines_cell_id;
use crate::ui::buttons::Btn;
use crate::ui::style::{EMOJI_BOMB, EMOJI_GEM, EMOJI_HIDDEN, coins};
use serenity::builder::{CreateActionRow, CreateButton};
use serenity::model::application::ButtonStyle;

pub fn intro(board: &MinesBoard) -> String {
    format!(
        "{EMOJI_GEM} Mines Game 5x5! Avoid the {} bombs and click safely. ({}/{} safe)",
        board.bomb_count(),
        board.safe_revealed(),
        board.safe_total()
    )
}

pub fn busted(wager: i64) -> String {
    format!("💥 You hit a bomb! Lost {}.", coins(wager))
}

pub fn cleared(winnings: i64) -> String {
    format!("🎉 Cleared the board! You won {}!", coins(winnings))
}

fn cell_button(board: &MinesBoard, idx: usize) -> CreateButton {
    let id = mines_cell_id(idx);
    let revealed = board.is_revealed(idx);
    let finished = board.status() != BoardStatus::InProgress;
    let (emoji, style) = match (board.cell(idx), revealed) {
        (Some(Cell::Safe), true) => (EMOJI_GEM, ButtonStyle::Success),
        (Some(Cell::Bomb), true) => (EMOJI_BOMB, ButtonStyle::Danger),
        // Bombs are shown once the board is over.
        (Some(Cell::Bomb), false) if finished => (EMOJI_BOMB, ButtonStyle::Secondary),
        _ => (EMOJI_HIDDEN, ButtonStyle::Secondary),
    };
    Btn::tile(&id, emoji, style, finished || revealed)
}

/// Five rows of five cells. Every cell is locked once the board is over.
pub fn grid(board: &MinesBoard) -> Vec<CreateActionRow> {
    (0..MINES_CELLS)
        .collect::<Vec<_>>()
        .chunks(MINES_ROW_WIDTH)
        .map(|row| CreateActionRow::Buttons(row.iter().map(|&i| cell_button(board, i)).collect()))
        .collect()
}
