//! Pauli command implementation.

use std::fs;

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use gluedtrees_pauli::{DenseDecomposer, JsonFileCache, PauliListBuilder};

/// Execute the pauli command.
pub fn execute(
    qubits: u32,
    seed: Option<u64>,
    cache_path: &str,
    budget: usize,
    output: Option<&str>,
) -> Result<()> {
    println!(
        "{} Generating operator list for {} qubits (budget {})",
        style("→").cyan().bold(),
        style(qubits).yellow(),
        budget
    );

    let cache = JsonFileCache::new(cache_path);
    let mut builder = PauliListBuilder::new().budget(budget);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }

    let list = builder.operator_list(qubits, &cache, &DenseDecomposer)?;
    info!(qubits, ?seed, budget, n_terms = list.len(), "operator list ready");

    println!(
        "{} {} Pauli terms on {} qubits",
        style("✓").green().bold(),
        list.len(),
        qubits
    );
    println!("  Cache: {}", style(cache_path).green());

    let json = serde_json::to_string_pretty(&list).context("serializing operator list")?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {path}"))?;
            println!("  Output: {}", style(path).green());
        }
        None => println!("{json}"),
    }

    Ok(())
}
