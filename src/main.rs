use girus::cli::{Cli, Command, CreateTarget};
use girus::commands;
use girus::platform::OperatingSystem;
use girus::runtime::probe::CommandProbe;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Debug log for `--verbose`, in `$XDG_STATE_HOME/girus/debug.log`.
fn setup_verbose_logging(os: OperatingSystem, command: &Command) -> Result<()> {
    let dir = state_dir();
    std::fs::create_dir_all(&dir)
        .map_err(|e| eyre!("Failed to create log directory {dir:?}: {e}"))?;
    let log_path = dir.join("debug.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| eyre!("Failed to open log file {log_path:?}: {e}"))?;
    tracing_subscriber::fmt()
        .with_writer(file)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let (action, runtime) = match command {
        Command::Create {
            target: CreateTarget::Cluster { runtime, .. },
        } => ("create cluster", runtime.map_or("auto", |rt| rt.binary())),
        Command::Instructions { runtime, .. } => ("instructions", runtime.binary()),
    };
    tracing::info!(
        "girus v{} on {os:?}: {action}, runtime {runtime}",
        env!("CARGO_PKG_VERSION")
    );
    Ok(())
}

fn state_dir() -> PathBuf {
    std::env::var_os("XDG_STATE_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".local/state")))
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("girus")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    let os = OperatingSystem::current();
    if args.verbose {
        setup_verbose_logging(os, &args.command)?;
    }

    let color = args.color.enabled();
    let mut stdout = io::stdout().lock();

    match args.command {
        Command::Create {
            target: CreateTarget::Cluster {
                runtime,
                probe_timeout,
            },
        } => {
            let probe = CommandProbe::new(Duration::from_secs(probe_timeout));
            commands::create_cluster(&mut stdout, &probe, os, runtime, color).await?;
        }
        Command::Instructions {
            os: requested,
            runtime,
        } => {
            commands::print_instructions(&mut stdout, requested.unwrap_or(os), runtime)?;
        }
    }

    Ok(())
}
