use std::path::PathBuf;

mod bom;
mod codes;
mod decode;
mod frame;
mod terminal;

use clap::ArgAction;
use extrude::Config;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load(path).map_err(|e| {
                anyhow::anyhow!("failed to load config file {}: {e}", path.display())
            })?,
            None => Config::default(),
        };

        self.command.run(&config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
enum Command {
    /// Decode a single part number
    Decode(decode::Decode),

    /// Extract and decode part numbers from a BOM spreadsheet
    Bom(bom::Bom),

    /// Generate the extrusion order list for a printer frame
    Frame(frame::Frame),

    /// List the alteration codes in the catalog
    Codes(codes::Codes),
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Decode(command) => command.run(config),
            Self::Bom(command) => command.run(config),
            Self::Frame(command) => command.run(config),
            Self::Codes(command) => command.run(config),
        }
    }
}
