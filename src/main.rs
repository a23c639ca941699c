use std::process::ExitCode;

use octocrab::Octocrab;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use relbot::closer;
use relbot::settings::Settings;
use relbot::Result;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let settings = Settings::new()?;

    let mut builder =
        octocrab::OctocrabBuilder::default().personal_token(settings.github_token.clone());
    if let Some(api_url) = &settings.github_api_url {
        builder = builder.base_uri(api_url)?;
    }
    let octocrab: Octocrab = builder.build()?;

    closer::close_bug_report_issue(&octocrab, &settings).await?;
    Ok(())
}
