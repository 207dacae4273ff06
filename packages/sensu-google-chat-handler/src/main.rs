//! Sensu handler entry point: event JSON on stdin, one message to Google Chat.

use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use sensu_google_chat_handler::config::{DASHBOARD_ENV, WEBHOOK_ENV};
use sensu_google_chat_handler::{handle_event, Event, HandlerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "sensu-google-chat-handler",
    about = "Sensu Google Chat Handler",
    version
)]
struct Args {
    /// The webhook URL to post the message to
    #[arg(short = 'w', long, env = WEBHOOK_ENV, default_value = "", hide_env_values = true)]
    webhook: String,

    /// URL prefix to dashboard with namespace
    #[arg(short = 'd', long, env = DASHBOARD_ENV, default_value = "")]
    dashboard: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    // stdout belongs to the Sensu pipeline
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sensu_google_chat_handler=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "Handler failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let config = HandlerConfig::new(args.webhook, args.dashboard);

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read event from stdin")?;
    let event: Event = serde_json::from_str(&input).context("failed to parse event JSON")?;

    tracing::debug!(
        namespace = %event.namespace(),
        entity = %event.resolved_entity(),
        check = %event.check_name(),
        "Received event"
    );

    let config = config.with_annotations(&event);
    handle_event(&config, &event).await?;

    Ok(())
}
