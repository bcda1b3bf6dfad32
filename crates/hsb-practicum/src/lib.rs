//! Homework API adapter (reqwest).
//!
//! Implements the `hsb-core` [`HomeworkApi`] port over the Practicum
//! `homework_statuses` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use hsb_core::{config::Config, domain::Cursor, errors::Error, ports::HomeworkApi, Result};

#[derive(Clone, Debug)]
pub struct PracticumClient {
    endpoint: String,
    token: String,
    http: reqwest::Client,
}

impl PracticumClient {
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("http client build failed: {e}")))?;
        Ok(Self {
            endpoint: endpoint.into(),
            token: token.into(),
            http,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::new(
            cfg.endpoint.clone(),
            cfg.practicum_token.clone(),
            cfg.request_timeout,
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch(&self, cursor: Cursor) -> Result<serde_json::Value> {
        let resp = self
            .http
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", cursor.0)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Эндпоинт {} недоступен: {e}", self.endpoint);
                Error::ApiUnavailable(format!("{}: {e}", self.endpoint))
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::error!("Код ответа API: {status}");
            return Err(Error::InvalidHttpStatus(status.as_u16()));
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Ошибка чтения ответа API: {e}");
            Error::ApiUnavailable(format!("body read error: {e}"))
        })?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Ошибка преобразования к формату json: {e}");
            Error::MalformedPayload(format!(
                "{e}: {}",
                body.chars().take(200).collect::<String>()
            ))
        })
    }
}
