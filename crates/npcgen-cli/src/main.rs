//! CLI frontend for the NPC generator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "npcgen",
    about = "Roll random NPCs: alignment, traits, class, species, and a tarot card",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log every roll to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one or more NPCs
    Generate {
        /// NPC type (see `npcgen types`)
        #[arg(short = 't', long = "type")]
        npc_type: Option<String>,

        /// Directory containing the six table files (default: built-in tables)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// RNG seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of NPCs to generate
        #[arg(
            short = 'n',
            long,
            default_value = "1",
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        count: u64,

        /// Output format: json, table
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// List the NPC types that have alignment scenarios
    Types {
        /// Directory containing the six table files (default: built-in tables)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Validate table files and report inconsistencies
    Check {
        /// Directory containing the six table files (default: built-in tables)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let fallback = if verbose {
        "npcgen=debug,npcgen_core=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            npc_type,
            data,
            seed,
            count,
            format,
        } => commands::generate::run(
            data.as_deref(),
            npc_type.as_deref(),
            seed,
            count,
            &format,
        ),
        Commands::Types { data } => commands::types::run(data.as_deref()),
        Commands::Check { data } => commands::check::run(data.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
