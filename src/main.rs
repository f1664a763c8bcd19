
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use geoedit::action::Action;
use geoedit::config::{RotateModeConfig, parse_handle_divisor};
use geoedit::error::GeoEditError;
use geoedit::rotate::RotateMode;
use geoedit::session::Session;

#[derive(Parser, Debug)]
#[command(name = "geoedit", about = "Replay rotate-mode editing sessions")]
struct Cli {
    /// Cursor requested while the rotate handle is hovered
    /// (overrides GEOEDIT_ROTATE_CURSOR).
    #[arg(long)]
    rotate_cursor: Option<String>,

    /// Longest box edge divided by this gives the rotate line length
    /// (overrides GEOEDIT_HANDLE_DIVISOR).
    #[arg(long)]
    handle_divisor: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a session and print each edit action as a JSON line.
    Replay { session: PathBuf },
    /// Print the guides for a session's initial state.
    Guides { session: PathBuf },
}

impl Cli {
    /// Environment first, then command-line flags on top.
    fn mode_config(&self) -> Result<RotateModeConfig, GeoEditError> {
        let mut config = RotateModeConfig::from_env()?;
        if let Some(cursor) = &self.rotate_cursor {
            config.rotate_cursor.clone_from(cursor);
        }
        if let Some(raw) = &self.handle_divisor {
            config.handle_divisor = parse_handle_divisor(raw)?;
        }
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<(), GeoEditError> {
    let mut mode = RotateMode::new(cli.mode_config()?);
    match &cli.command {
        Command::Replay { session } => {
            let session = Session::load(session)?;
            let replay = session.replay(&mut mode);
            for action in &replay.actions {
                match action {
                    Action::Edit(edit) => println!("{}", serde_json::to_string(edit)?),
                    Action::SetCursor(cursor) => tracing::debug!(?cursor, "cursor"),
                    Action::CancelPan => tracing::trace!("pan cancelled"),
                }
            }
        }
        Command::Guides { session } => {
            let session = Session::load(session)?;
            println!("{}", serde_json::to_string_pretty(&session.initial_guides(&mode))?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "geoedit failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
