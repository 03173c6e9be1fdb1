use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use futures::StreamExt;
use reading_core::{
    load_settings, load_settings_from, spawn_session, CommandOutcome, HttpCatalog, SessionSettings,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod input;
mod render;

use input::{parse_line, to_command, Action, HELP};

#[derive(Parser, Debug)]
#[command(about = "Three-card tarot reading in the terminal")]
struct Args {
    /// Base URL of the card catalog, overriding settings and environment.
    #[arg(long)]
    catalog_url: Option<String>,
    /// Settings file to read instead of ./tarot.toml.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fixed seed for reproducible draws.
    #[arg(long)]
    seed: Option<u64>,
}

fn settings_for(args: &Args) -> SessionSettings {
    let mut settings = match &args.config {
        Some(path) => load_settings_from(path, |key| std::env::var(key).ok()),
        None => load_settings(),
    };
    if let Some(url) = &args.catalog_url {
        settings = settings.with_catalog_base_url(url.clone());
    }
    if let Some(seed) = args.seed {
        settings = settings.with_seed(seed);
    }
    settings
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let settings = settings_for(&args);
    settings.validate().context("invalid reader settings")?;
    let catalog = HttpCatalog::new(&settings.catalog_base_url)
        .context("failed to configure card catalog")?;
    info!(url = %catalog.cards_url(), "starting reading session");

    let (handle, session_task) = spawn_session(settings, Arc::new(catalog));
    let mut snapshots = WatchStream::new(handle.subscribe());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{HELP}");

    loop {
        tokio::select! {
            snapshot = snapshots.next() => {
                let Some(snapshot) = snapshot else { break };
                print!("{}", render::render(&snapshot));
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read input")? else { break };
                let action = match parse_line(&line) {
                    Ok(Some(action)) => action,
                    Ok(None) => continue,
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                };
                match action {
                    Action::Quit => break,
                    Action::Help => {
                        println!("{HELP}");
                        continue;
                    }
                    _ => {}
                }

                let command = match to_command(action, &handle.snapshot()) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                };
                if let CommandOutcome::Ignored(reason) = handle.dispatch(command).await? {
                    debug!(?reason, "command had no effect");
                    println!("(komut uygulanamadı: {reason:?})");
                }
            }
        }
    }

    drop(snapshots);
    drop(handle);
    session_task.await.context("reading session task failed")?;
    Ok(())
}
