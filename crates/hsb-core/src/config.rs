use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{domain::ChatId, errors::Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);
pub const DEFAULT_LOG_FILE: &str = "program.log";

/// Typed configuration, built once at startup and passed down explicitly.
#[derive(Clone, Debug)]
pub struct Config {
    // Credentials
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: ChatId,

    // Homework API
    pub endpoint: String,
    pub request_timeout: Option<Duration>,

    // Poll loop
    pub retry_period: Duration,

    // Logging
    pub log_file: PathBuf,
}

impl Config {
    /// Load `.env` (without overriding the real environment) and read the
    /// process environment.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| lookup(key).and_then(non_empty);

        let practicum_token = required("PRACTICUM_TOKEN");
        let telegram_token = required("TELEGRAM_TOKEN");
        let telegram_chat_id = required("TELEGRAM_CHAT_ID");

        let missing: Vec<String> = [
            ("PRACTICUM_TOKEN", practicum_token.is_none()),
            ("TELEGRAM_TOKEN", telegram_token.is_none()),
            ("TELEGRAM_CHAT_ID", telegram_chat_id.is_none()),
        ]
        .into_iter()
        .filter(|(_, absent)| *absent)
        .map(|(key, _)| key.to_string())
        .collect();

        let (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) =
            (practicum_token, telegram_token, telegram_chat_id)
        else {
            return Err(Error::ConfigMissing(missing));
        };

        let endpoint = lookup("PRACTICUM_ENDPOINT")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let request_timeout = parse_u64(&lookup, "REQUEST_TIMEOUT_SECS")?.map(Duration::from_secs);

        let retry_period = match parse_u64(&lookup, "RETRY_PERIOD")? {
            Some(0) => {
                return Err(Error::Config(
                    "RETRY_PERIOD must be at least 1 second".to_string(),
                ))
            }
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_RETRY_PERIOD,
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id: ChatId(telegram_chat_id.trim().to_string()),
            endpoint,
            request_timeout,
            retry_period,
            log_file: log_file_from(&lookup),
        })
    }
}

/// Log file location, resolvable before the rest of the config so that a
/// fatal config error still reaches the log.
pub fn log_file_path() -> PathBuf {
    log_file_from(&|key: &str| env::var(key).ok())
}

fn log_file_from(lookup: &dyn Fn(&str) -> Option<String>) -> PathBuf {
    lookup("LOG_FILE")
        .and_then(non_empty)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

fn parse_u64(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<u64>> {
    let Some(raw) = lookup(key).and_then(non_empty) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u64>()
        .map(Some)
        .map_err(|e| Error::Config(format!("{key}={raw:?} is not a whole number of seconds: {e}")))
}

/// Seed the process environment from a dotenv file. Existing variables win.
pub fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (key, val) in parse_dotenv(&contents) {
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        out.push((key.to_string(), val));
    }
    out
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
