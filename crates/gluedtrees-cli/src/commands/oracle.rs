//! Oracle command implementation.

use std::fs;

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use gluedtrees_graph::{GluedTrees, KeyOracle, START_KEY};

/// Execute the oracle command.
pub fn execute(dim: u32, seed: Option<u64>, output: &str) -> Result<()> {
    println!(
        "{} Building glued-trees oracle at depth {}",
        style("→").cyan().bold(),
        style(dim).yellow()
    );

    let graph = GluedTrees::with_seed(dim, seed)?;
    info!(
        dim,
        ?seed,
        n_nodes = graph.n_nodes(),
        n_edges = graph.n_edges(),
        "built glued-trees instance"
    );
    println!(
        "  Instance: {} nodes, {} edges",
        graph.n_nodes(),
        graph.n_edges()
    );

    let oracle = KeyOracle::with_seed(&graph, seed);
    let json = serde_json::to_string_pretty(oracle.neighbor_map())
        .context("serializing neighbor map")?;
    fs::write(output, json).with_context(|| format!("writing {output}"))?;

    println!("{} Oracle written", style("✓").green().bold());
    if let Some(first_hops) = oracle.neighbors(START_KEY) {
        println!("  {} -> {}", START_KEY, style(first_hops.join(", ")).green());
    }
    println!("  Exit key: {}", style(oracle.exit_key()).green());
    println!("  Output: {}", style(output).green());

    Ok(())
}
