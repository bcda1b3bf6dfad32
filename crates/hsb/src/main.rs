use std::{path::Path, sync::Arc};

use hsb_core::{
    config::{self, Config},
    domain::Cursor,
    errors::Error,
    poller::Poller,
    ports::TokioSleeper,
};
use hsb_practicum::PracticumClient;
use hsb_telegram::TelegramNotifier;

#[tokio::main]
async fn main() -> Result<(), Error> {
    config::load_dotenv_if_present(Path::new(".env"));
    hsb_core::logging::init("hsb", &config::log_file_path())?;

    let cfg = Config::load().inspect_err(|e| {
        tracing::error!("{}", config_failure(e));
    })?;

    let api = Arc::new(PracticumClient::from_config(&cfg)?);
    let notifier = Arc::new(TelegramNotifier::from_config(&cfg));

    tracing::info!(
        endpoint = %api.endpoint(),
        chat_id = %cfg.telegram_chat_id.0,
        "homework status bot started"
    );

    let mut poller = Poller::from_config(&cfg, api, notifier, Arc::new(TokioSleeper), Cursor::now());
    poller.run().await;

    Ok(())
}

fn config_failure(e: &Error) -> String {
    match e {
        Error::ConfigMissing(_) => format!("Отсутствуют переменные окружения: {e}"),
        other => other.to_string(),
    }
}
