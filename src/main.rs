//! Binary entry point: resolves config, installs logging, runs the window or a
//! headless command.

use std::io;

use anyhow::Context;
use clap::Parser;

use contact_book::{
    cli::{Cli, Commands},
    commands,
    config::AppConfig,
    logging::{LogTarget, init_tracing, open_log_file},
    persist::sqlite::SqliteContactStore,
    ui,
    view::ContactView,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli);
    let command = cli.command.unwrap_or(Commands::Ui);

    if command == Commands::Ui {
        init_window_logging(&config);
    } else {
        init_tracing(LogTarget::Stderr);
    }
    tracing::info!(db = %config.db_path.display(), policy = ?config.failure_policy, "starting");

    let store = SqliteContactStore::new(&config.db_path);
    let policy = config.failure_policy;
    policy
        .settle(store.ensure_schema())
        .context("preparing contact database")?;

    match command {
        Commands::Ui => {
            let mut view = ContactView::new(store, policy);
            ui::app::run(&mut view).context("terminal error")?;
        }
        command => {
            let mut out = io::stdout().lock();
            commands::execute(&store, policy, command, &mut out)?;
        }
    }
    Ok(())
}

fn init_window_logging(config: &AppConfig) {
    let candidates = config.log_candidates();
    match open_log_file(&candidates) {
        Some((path, file)) => {
            init_tracing(LogTarget::File(file));
            if path != config.log_file {
                tracing::warn!(
                    requested = %config.log_file.display(),
                    using = %path.display(),
                    "log file unavailable, using fallback"
                );
            }
        }
        None => eprintln!(
            "warning: cannot open log file {}, window runs without a log",
            config.log_file.display()
        ),
    }
}
