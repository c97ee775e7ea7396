use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use foxtab_sessions::{Locator, Session, SessionError, SessionStore};

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "foxtab",
    about = "List, snapshot, and read Firefox session tabs",
    version
)]
struct Cli {
    /// Session to operate on: a path, or a substring of a session path
    #[arg(long, global = true)]
    session: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List sessions or tabs
    List {
        /// List open tabs (the default)
        #[arg(long)]
        tabs: bool,

        /// List session files instead of tabs
        #[arg(long)]
        sessions: bool,

        /// List tabs from all live and saved sessions
        #[arg(long)]
        all: bool,
    },

    /// Snapshot the live session into the saved-session store
    Save,

    /// Copy a saved snapshot over the live session (no backup is taken)
    Restore,

    /// Delete the resolved session file
    Clear,

    /// Fetch the page at a tab entry and print it as readable text
    Read {
        /// Entry address, `tab:entry`
        idx: String,
    },

    /// Open a tab entry's URL in the system browser
    Open {
        /// Entry address, `tab:entry`
        idx: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        // Documented error kinds become diagnostics, not crashes.
        match err.downcast_ref::<SessionError>() {
            Some(SessionError::NotFound(what)) => {
                eprintln!("{} {}", "Not found:".bright_red(), what);
            }
            Some(SessionError::MalformedIndex(idx)) => {
                eprintln!("{} {}", "Invalid index:".bright_red(), idx);
            }
            _ => return Err(err),
        }
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let store = SessionStore::new()?;
    // The store directory exists before any command runs.
    store.ensure_dir()?;
    let locator = Locator::new(store.saved_dir().to_path_buf())?;

    match cli.command {
        Command::List {
            tabs: _,
            sessions,
            all,
        } => {
            if sessions {
                commands::list_sessions(&locator)
            } else if all {
                commands::list_all_tabs(&locator)
            } else {
                let session = load_resolved(&locator, cli.session.as_deref())?;
                commands::list_tabs(&session)
            }
        }
        Command::Save => commands::save(&locator, &store),
        Command::Restore => commands::restore(&locator, &store, cli.session.as_deref()),
        Command::Clear => {
            let path = locator.resolve(cli.session.as_deref())?;
            commands::clear(&store, &path)
        }
        Command::Read { idx } => {
            let session = load_resolved(&locator, cli.session.as_deref())?;
            commands::read(&session, &idx).await
        }
        Command::Open { idx } => {
            let session = load_resolved(&locator, cli.session.as_deref())?;
            commands::open_entry(&session, &idx)
        }
    }
}

fn load_resolved(locator: &Locator, identifier: Option<&str>) -> Result<Session> {
    let path = locator.resolve(identifier)?;
    Ok(Session::load(&path)?)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}
