//! Glued-Trees Command-Line Interface
//!
//! Builds the randomized glued-trees instance and the cropped Pauli
//! operator list that feed a Hamiltonian-evolution experiment.

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{oracle, pauli};

/// Glued trees - exponential quantum advantage on coupled oscillators
#[derive(Parser)]
#[command(name = "gluedtrees")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a glued-trees adjacency oracle with opaque node keys
    Oracle {
        /// Tree depth (dim >= 1)
        #[arg(short, long)]
        dim: u32,

        /// RNG seed for a reproducible instance
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output file for the neighbor map
        #[arg(short, long, default_value = "glued-trees.json")]
        output: String,
    },

    /// Generate the cropped Pauli operator list for a register width
    Pauli {
        /// Total qubit count (>= 3; dim = qubits - 2)
        #[arg(short, long)]
        qubits: u32,

        /// RNG seed for a reproducible instance
        #[arg(short, long)]
        seed: Option<u64>,

        /// Operator cache file, read before and written after
        #[arg(short, long, default_value = "glued_trees_cache.json")]
        cache: String,

        /// Maximum number of Pauli terms kept
        #[arg(short, long, default_value = "200")]
        budget: usize,

        /// Output file for the operator list (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Oracle { dim, seed, output } => oracle::execute(dim, seed, &output),

        Commands::Pauli {
            qubits,
            seed,
            cache,
            budget,
            output,
        } => pauli::execute(qubits, seed, &cache, budget, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
