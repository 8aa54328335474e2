use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::EngineConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A portfolio website that lives in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Page description file (defaults to ~/.config/folio/page.toml)
    #[arg(short = 'p', long = "page")]
    page: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the viewer
    Run,
    /// Write the sample page file to get started
    Init {
        /// Where to write it (defaults to the standard page path)
        path: Option<PathBuf>,
    },
    /// Validate a page file and report layout issues
    Check {
        /// Page file to check (defaults to the standard page path)
        path: Option<PathBuf>,
    },
    /// Show or set the persisted theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the stored preference
    Show,
    /// Store a preference: dark or light
    Set { theme: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the screen, so its logs go to a file instead of stderr
    let interactive = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(interactive)?;

    // Load configuration
    let config = EngineConfig::load()?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, cli.page),
        Some(Commands::Init { path }) => commands::init::run(path),
        Some(Commands::Check { path }) => commands::check::run(path.or(cli.page)),
        Some(Commands::Theme { action }) => match action {
            Some(ThemeAction::Set { theme }) => commands::theme::set(&theme),
            Some(ThemeAction::Show) | None => commands::theme::show(),
        },
    }
}

fn init_logging(to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
    );

    if to_file {
        let data_dir = EngineConfig::data_dir();
        std::fs::create_dir_all(&data_dir)?;
        let file = std::fs::File::create(data_dir.join("folio.log"))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }

    Ok(())
}
