use std::io;
use std::process::ExitCode;

use next_train::app::{AppError, run};
use next_train::config::AppConfig;
use next_train::domain::SystemClock;
use next_train::mbta::{MbtaClient, MockMbtaClient};
use next_train::predict::Predictor;
use next_train::select::Menu;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so they don't interleave with the menu on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match lookup().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn lookup() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock());

    match &config.mock_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "serving fixtures instead of the live API");
            let api = MockMbtaClient::new(dir).map_err(AppError::Client)?;
            run(&Predictor::new(api, SystemClock), &mut menu).await?;
        }
        None => {
            let api = MbtaClient::new(config.mbta).map_err(AppError::Client)?;
            run(&Predictor::new(api, SystemClock), &mut menu).await?;
        }
    }

    Ok(())
}
