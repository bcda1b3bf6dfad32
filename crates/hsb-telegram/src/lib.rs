//! Telegram adapter (teloxide).
//!
//! Implements the `hsb-core` [`Notifier`] port over the Telegram Bot API.

use async_trait::async_trait;

use teloxide::{prelude::*, types::Recipient};

use tokio::time::sleep;

use hsb_core::{config::Config, domain::ChatId, errors::Error, ports::Notifier, Result};

#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(Bot::new(cfg.telegram_token.clone()))
    }

    /// Numeric ids go out as chat ids; anything else (`@channel`) as a username.
    fn recipient(chat_id: &ChatId) -> Recipient {
        match chat_id.0.trim().parse::<i64>() {
            Ok(id) => Recipient::Id(teloxide::types::ChatId(id)),
            Err(_) => Recipient::ChannelUsername(chat_id.0.trim().to_string()),
        }
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::Delivery(format!("telegram error: {e}"))
    }

    async fn with_retry<T, Fut>(&self, mut op: impl FnMut() -> Fut) -> Result<T>
    where
        Fut: std::future::IntoFuture<Output = std::result::Result<T, teloxide::RequestError>>,
        Fut::IntoFuture: Send,
    {
        // One extra attempt, only when Telegram asks us to back off.
        const MAX_RETRIES: usize = 1;
        let mut attempts = 0usize;
        loop {
            match op().await {
                Ok(v) => return Ok(v),
                Err(e) => match e {
                    teloxide::RequestError::RetryAfter(d) if attempts < MAX_RETRIES => {
                        attempts += 1;
                        sleep(d).await;
                        continue;
                    }
                    other => return Err(Self::map_err(other)),
                },
            }
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, chat_id: &ChatId, text: &str) -> Result<()> {
        let recipient = Self::recipient(chat_id);
        let sent = self
            .with_retry(|| self.bot.send_message(recipient.clone(), text.to_string()))
            .await;

        match sent {
            Ok(_) => {
                tracing::debug!("Сообщение успешно доставлено.");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Сообщение не было доставлено: {text:?}: {e}");
                Err(e)
            }
        }
    }
}
