use clap::Parser;
use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;
use env_logger::Env;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process;

use netnotes::topology::generate_network;
use netnotes::vault::write_network;

/// Generates a random network topology as linked Markdown notes for an Obsidian vault
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the Obsidian vault directory the notes are written into
    vault: PathBuf,

    /// Seed for the topology generator; omit for a fresh random topology
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments, exiting with status 1 on usage errors
    let args = Args::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        process::exit(1);
    });

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting netnotes vault generator");
    info!("Vault directory: {:?}", args.vault);

    if !args.vault.is_dir() {
        bail!("'{}' is not a valid directory", args.vault.display());
    }
    let vault_path = args
        .vault
        .canonicalize()
        .wrap_err_with(|| format!("Failed to resolve vault path '{}'", args.vault.display()))?;

    let mut rng = match args.seed {
        Some(seed) => {
            info!("Generating topology from fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let network = generate_network(&mut rng);
    info!("Generated topology with {} nodes", network.nodes.len());
    network
        .validate()
        .wrap_err("Generated topology failed structural validation")?;

    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    write_network(&network, &vault_path, &generated_at)?;

    info!("Vault generation completed successfully");
    Ok(())
}
