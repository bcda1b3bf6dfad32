use std::time::Duration;

use async_trait::async_trait;

use crate::{
    domain::{ChatId, Cursor},
    Result,
};

/// Port for the homework review API.
///
/// Implementations return the decoded JSON body untouched; shape checks live in
/// [`crate::homework`].
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    async fn fetch(&self, cursor: Cursor) -> Result<serde_json::Value>;
}

/// Port for delivering a plain-text message to a chat.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, chat_id: &ChatId, text: &str) -> Result<()>;
}

/// Port for the pause between poll cycles, so tests can skip real waiting.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, period: Duration);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, period: Duration) {
        tokio::time::sleep(period).await;
    }
}
