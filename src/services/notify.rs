//! Best-effort direct messages to players.

use crate::error::NotifyError;
use async_trait::async_trait;
use serenity::http::Http;
use serenity::model::id::UserId;
use std::sync::Arc;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, user_id: UserId, content: &str) -> Result<(), NotifyError>;
}

/// Sends a DM through the Discord REST API.
pub struct DiscordNotifier {
    http: Arc<Http>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn notify(&self, user_id: UserId, content: &str) -> Result<(), NotifyError> {
        let http = self.http.as_ref();
        let channel = user_id.create_dm_channel(http).await?;
        channel.id.say(http, content).await?;
        Ok(())
    }
}

/// Drops every notification. Used before the Discord client exists and in tests.
pub struct SilentNotifier;

#[async_trait]
impl Notifier for SilentNotifier {
    async fn notify(&self, _user_id: UserId, _content: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Disabled)
    }
}
