//! Cat-vs-dog classifier binary.
//!
//! `catvdog <image>` classifies one image and exits; without arguments it
//! starts an interactive prompt.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use catvdog_app::command::HELP;
use catvdog_app::{render, Command, Session};
use catvdog_client::PredictionClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let client = match PredictionClient::from_env() {
        Ok(c) => Arc::new(c),
        Err(e) => {
            error!("Failed to create prediction client: {}", e);
            std::process::exit(1);
        }
    };

    let config = client.config();
    info!(
        "Client config: endpoint={}, deadline={:?}, max_upload_bytes={:?}",
        client.endpoint(),
        config.request_deadline(),
        config.max_upload_bytes
    );

    let mut session = Session::new(client);

    match std::env::args().nth(1) {
        Some(image) => {
            let ok = run_once(&mut session, image).await;
            std::process::exit(if ok { 0 } else { 1 });
        }
        None => run_interactive(&mut session).await,
    }
}

/// Logs go to stderr so they don't interleave with the prompt.
fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("catvdog_client=warn,catvdog_app=warn"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }
}

async fn run_once(session: &mut Session, image: String) -> bool {
    session.select_image(image);
    if let Err(e) = session.send().await {
        eprintln!("{}", e);
        return false;
    }

    match session.wait_for_result().await {
        Some(result) => {
            println!("{}", result);
            result.is_label()
        }
        None => false,
    }
}

async fn run_interactive(session: &mut Session) -> anyhow::Result<()> {
    println!("{}", HELP);
    println!("{}", render(session.state()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let command = match Command::parse(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };

                match command {
                    Command::Select(path) => session.select_image(path),
                    Command::Send => {
                        if let Err(e) = session.send().await {
                            println!("{}", e);
                        }
                    }
                    Command::Status => {}
                    Command::Help => {
                        println!("{}", HELP);
                        continue;
                    }
                    Command::Quit => break,
                }
                println!("{}", render(session.state()));
            }
            Some(delivery) = session.next_delivery() => {
                if session.apply(delivery) {
                    println!("{}", render(session.state()));
                }
            }
        }
    }

    info!("Session closed");
    Ok(())
}
