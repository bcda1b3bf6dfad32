//! The fetch → check → parse → compare → notify → sleep loop.
//!
//! A cycle may fail for any reason (network, payload shape, delivery); the
//! failure is logged and the loop always proceeds to the fixed sleep.

use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    domain::{ChatId, Cursor},
    homework::{check_response, parse_status},
    ports::{HomeworkApi, Notifier, Sleeper},
    Result,
};

/// What a successful cycle did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    NoHomeworks,
    Unchanged,
    Notified,
}

pub struct Poller {
    api: Arc<dyn HomeworkApi>,
    notifier: Arc<dyn Notifier>,
    sleeper: Arc<dyn Sleeper>,
    chat_id: ChatId,
    retry_period: Duration,
    // Set once at startup; every request reuses it.
    cursor: Cursor,
    last_message: String,
}

impl Poller {
    pub fn new(
        api: Arc<dyn HomeworkApi>,
        notifier: Arc<dyn Notifier>,
        sleeper: Arc<dyn Sleeper>,
        chat_id: ChatId,
        retry_period: Duration,
        cursor: Cursor,
    ) -> Self {
        Self {
            api,
            notifier,
            sleeper,
            chat_id,
            retry_period,
            cursor,
            last_message: String::new(),
        }
    }

    pub fn from_config(
        cfg: &Config,
        api: Arc<dyn HomeworkApi>,
        notifier: Arc<dyn Notifier>,
        sleeper: Arc<dyn Sleeper>,
        cursor: Cursor,
    ) -> Self {
        Self::new(
            api,
            notifier,
            sleeper,
            cfg.telegram_chat_id.clone(),
            cfg.retry_period,
            cursor,
        )
    }

    /// Last successfully delivered status message (empty before the first one).
    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Poll forever.
    pub async fn run(&mut self) {
        tracing::info!(
            cursor = self.cursor.0,
            retry_period_secs = self.retry_period.as_secs(),
            "poll loop started"
        );
        loop {
            self.tick().await;
        }
    }

    /// One cycle followed by the sleep. Cycle errors are logged, never returned.
    pub async fn tick(&mut self) {
        if let Err(e) = self.run_cycle().await {
            tracing::error!("Сбой в работе программы: {e}");
        }
        self.sleeper.sleep(self.retry_period).await;
    }

    pub async fn run_cycle(&mut self) -> Result<CycleOutcome> {
        let response = self.api.fetch(self.cursor).await?;
        let homeworks = check_response(&response)?;

        let Some(latest) = homeworks.first() else {
            tracing::info!("Статус не обновлен");
            return Ok(CycleOutcome::NoHomeworks);
        };

        let message = parse_status(latest)?;
        if message == self.last_message {
            tracing::info!("{message}");
            return Ok(CycleOutcome::Unchanged);
        }

        // Left stale on failure so the next cycle retries delivery.
        self.notifier.notify(&self.chat_id, &message).await?;
        self.last_message = message;
        Ok(CycleOutcome::Notified)
    }
}
