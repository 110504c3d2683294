use challenges_cli::application::{load_script, replay, write_schemas};
use challenges_cli::{CliError, LogConfig, Result};
use challenges_core::ImageCatalog;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "challenges-cli")]
#[command(version, about = "Challenge board CLI - script replay and schema export")]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the images offered by the creation dialog
    Images {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a JSON array of commands through a fresh board
    Replay {
        /// Script file
        #[arg(short, long)]
        script: PathBuf,

        /// Print the final partitions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write JSON schemas for challenges and commands
    Schema {
        /// Output directory
        #[arg(short, long, default_value = "schemas")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LogConfig::from_flags(cli.verbose, cli.json_logs)
        .init()
        .map_err(CliError::InvalidConfig)?;

    match cli.command {
        Commands::Images { json } => print_images(json)?,
        Commands::Replay { script, json } => run_replay(script, json)?,
        Commands::Schema { out } => {
            let written = write_schemas(&out)?;
            for file in written {
                println!("{}", file.path.display());
            }
        }
    }

    Ok(())
}

fn print_images(json: bool) -> Result<()> {
    let catalog = ImageCatalog::default();

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.images())?);
    } else {
        for image in catalog.images() {
            println!("{:<28} {}", image.src, image.alt);
        }
    }

    Ok(())
}

fn run_replay(script: PathBuf, json: bool) -> Result<()> {
    let commands = load_script(&script)?;
    info!("Replaying {} commands from {}", commands.len(), script.display());

    let report = replay(commands);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}
