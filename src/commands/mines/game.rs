//! The `Game` implementation for a Mines session.

use super::state::{BoardStatus, MinesBoard, Reveal};
use super::ui;
use crate::commands::games::{Game, GamePayout, GameUpdate};
use crate::constants::{MINES_CLEAR_MULTIPLIER, MINES_SESSION_TIMEOUT};
use crate::error::MoveError;
use crate::interactions::ids::parse_mines_cell;
use crate::services::wager::Wager;
use serenity::builder::CreateActionRow;
use serenity::model::id::UserId;
use std::time::Duration;

pub struct MinesGame {
    pub wager: Wager,
    pub board: MinesBoard,
}

impl MinesGame {
    pub fn new(wager: Wager, board: MinesBoard) -> Self {
        Self { wager, board }
    }
}

impl Game for MinesGame {
    fn owner(&self) -> UserId {
        self.wager.user_id
    }

    fn timeout(&self) -> Duration {
        MINES_SESSION_TIMEOUT
    }

    fn handle_action(&mut self, custom_id: &str) -> Result<GameUpdate, MoveError> {
        let idx = parse_mines_cell(custom_id).ok_or(MoveError::UnknownAction)?;
        match self.board.reveal(idx)? {
            Reveal::Safe { .. } => Ok(GameUpdate::ReRender),
            Reveal::Busted => Ok(GameUpdate::GameOver { payouts: vec![] }),
            Reveal::Cleared => Ok(GameUpdate::GameOver {
                payouts: vec![GamePayout {
                    wager: self.wager,
                    multiplier: MINES_CLEAR_MULTIPLIER,
                }],
            }),
        }
    }

    fn render(&self) -> (String, Vec<CreateActionRow>) {
        let content = match self.board.status() {
            BoardStatus::InProgress => ui::intro(&self.board),
            BoardStatus::Busted => ui::busted(self.wager.amount),
            BoardStatus::Cleared => ui::cleared(self.wager.payout(MINES_CLEAR_MULTIPLIER)),
        };
        (content, ui::grid(&self.board))
    }
}
