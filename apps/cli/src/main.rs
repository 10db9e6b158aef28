//! `flashcards`: interactive term/definition trainer.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use flashcard_core::{Flashcards, Session};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_filter_directive())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = Session::new(stdin.lock(), stdout.lock());
    let mut app = Flashcards::new(session);

    if let Some(path) = cli.import_from.as_deref() {
        tracing::info!(path = %path.display(), "importing startup file");
        app.import_cards(Some(path))
            .context("failed to import startup file")?;
    }

    app.run(cli.export_to.as_deref())
        .context("flashcard session failed")?;

    Ok(())
}
