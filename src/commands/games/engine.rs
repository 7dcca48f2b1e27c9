//! This module contains the core, generic game engine components.
//! It defines the `Game` trait that interactive games implement, and the
//! `GameManager` which tracks live sessions and routes button presses to them.
//!
//! The manager never performs I/O. `dispatch` applies a press and returns what
//! should happen next; the interaction handler does the Discord calls and the
//! balance settlement after the lock is released.

use crate::error::{AccessError, MoveError};
use crate::services::wager::Wager;
use serenity::builder::CreateActionRow;
use serenity::model::id::{MessageId, UserId};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Credit owed to a player when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GamePayout {
    pub wager: Wager,
    pub multiplier: i64,
}

pub enum GameUpdate {
    ReRender,
    GameOver { payouts: Vec<GamePayout> },
}

pub trait Game: Send + Sync {
    /// The only user allowed to press this game's buttons.
    fn owner(&self) -> UserId;
    fn timeout(&self) -> Duration;
    fn handle_action(&mut self, custom_id: &str) -> Result<GameUpdate, MoveError>;
    /// Message content and buttons for the current state.
    fn render(&self) -> (String, Vec<CreateActionRow>);
}

/// What the interaction handler should do with a button press.
pub enum Dispatch {
    /// Tell only the presser; nothing changed.
    Rejected(String),
    Updated {
        content: String,
        components: Vec<CreateActionRow>,
    },
    /// The session has been removed; settle `payouts`, then show the final state.
    Finished {
        content: String,
        components: Vec<CreateActionRow>,
        payouts: Vec<GamePayout>,
    },
}

struct Session {
    game: Box<dyn Game>,
    started: Instant,
}

#[derive(Default)]
pub struct GameManager {
    active_games: HashMap<MessageId, Session>,
}

impl GameManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_game(&mut self, message_id: MessageId, game: Box<dyn Game>) {
        self.start_game_at(message_id, game, Instant::now());
    }

    pub fn start_game_at(&mut self, message_id: MessageId, game: Box<dyn Game>, started: Instant) {
        self.active_games.insert(message_id, Session { game, started });
    }

    pub fn is_active(&self, message_id: &MessageId) -> bool {
        self.active_games.contains_key(message_id)
    }

    pub fn active_count(&self) -> usize {
        self.active_games.len()
    }

    /// Removes a session that ran out of time. Returns its last rendering if it
    /// was still live.
    pub fn expire(&mut self, message_id: &MessageId) -> Option<String> {
        self.active_games
            .remove(message_id)
            .map(|session| session.game.render().0)
    }

    pub fn dispatch(
        &mut self,
        message_id: MessageId,
        user_id: UserId,
        custom_id: &str,
        now: Instant,
    ) -> Dispatch {
        let Some(session) = self.active_games.get_mut(&message_id) else {
            return Dispatch::Rejected(AccessError::NoSuchGame.to_string());
        };
        if session.game.owner() != user_id {
            return Dispatch::Rejected(AccessError::NotYourGame.to_string());
        }
        if now.saturating_duration_since(session.started) > session.game.timeout() {
            self.active_games.remove(&message_id);
            return Dispatch::Rejected(AccessError::Expired.to_string());
        }

        match session.game.handle_action(custom_id) {
            Err(e) => Dispatch::Rejected(e.to_string()),
            Ok(GameUpdate::ReRender) => {
                let (content, components) = session.game.render();
                Dispatch::Updated {
                    content,
                    components,
                }
            }
            Ok(GameUpdate::GameOver { payouts }) => {
                let (content, components) = session.game.render();
                self.active_games.remove(&message_id);
                Dispatch::Finished {
                    content,
                    components,
                    payouts,
                }
            }
        }
    }
}
