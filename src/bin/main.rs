use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::warn;

use taconnect::config::{self, LoggingConfig};
use taconnect::export::Exporter;
use taconnect::storage::JsonContactStorage;
use taconnect::{cli, telemetry, ContactStore, Logic};

#[derive(Parser, Debug)]
#[command(
    name = "tac",
    version,
    about = "TAConnect contact manager for teaching assistants"
)]
struct Cli {
    /// Contacts data file (default: from config or the data directory).
    #[arg(long, value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// CSV export directory (default: from config or the data directory).
    #[arg(long, value_name = "PATH")]
    export_dir: Option<PathBuf>,

    /// Errors only.
    #[arg(short = 'q', long, default_value_t = false)]
    quiet: bool,

    /// Debug output (repeat for more).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let config = match config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            config::Config::default()
        }
    };

    let logging = if args.quiet {
        LoggingConfig {
            stdout: false,
            ..config.logging.clone()
        }
    } else {
        config.logging.clone()
    };
    telemetry::init(args.verbose, &logging);

    let data_file = args.data_file.unwrap_or_else(|| config.data_file());
    let export_dir = args.export_dir.unwrap_or_else(|| config.export_dir());

    let storage = Box::new(JsonContactStorage::new(data_file.clone()));
    let mut logic = match Logic::new(storage, Exporter::new(export_dir.clone())) {
        Ok(logic) => logic,
        Err(err) => {
            warn!("{err}; starting with an empty contact list");
            let storage = Box::new(JsonContactStorage::new(data_file));
            Logic::with_store(ContactStore::new(), storage, Exporter::new(export_dir))
        }
    };

    println!(
        "TAConnect {} - type 'help' for commands, 'exit' to leave",
        env!("CARGO_PKG_VERSION")
    );
    match cli::run(&mut logic) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
