use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use smartdo::cli::args::{Cli, Commands};
use smartdo::cli::commands;
use smartdo::config::{Config, Paths};
use smartdo::storage::TaskStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| format!("smartdo={level}").into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = Paths::default();
    let config = Config::load(&paths).context("Could not load smartdo settings")?;
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);
    let store = TaskStore::new(config.tasks_file(&paths, cli.file.as_deref()));
    tracing::debug!(tasks_file = %store.path().display(), "resolved task file");

    let output = match cli.command {
        Commands::Add(args) => commands::add(&store, &args, format)?,
        Commands::List => commands::list(&store, format)?,
        Commands::Filter { term } => commands::filter(&store, &term, format)?,
        Commands::Edit(args) => commands::edit(&store, args, format)?,
        Commands::Done { position } => commands::done(&store, position, format)?,
        Commands::Delete { position } => commands::delete(&store, position, format)?,
        Commands::Quote(args) => commands::quote(config.quote, args, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
