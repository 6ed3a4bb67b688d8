//! Topology registry generation.
//!
//! Alongside the per-node notes, each run emits a single JSON document
//! describing the whole generated topology: every node with its category,
//! subtype, and sorted peer list. The registry is output only; nothing
//! ever reads it back during a run.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use serde::Serialize;
use std::path::Path;

use crate::topology::types::Network;

/// File name of the registry document inside the network directory
pub const REGISTRY_FILE: &str = "network_registry.json";

#[derive(Serialize, Debug)]
struct NodeRecord {
    name: String,
    node_type: String,
    category: String,
    peers: Vec<String>,
}

#[derive(Serialize, Debug)]
struct NetworkRegistry {
    generated_at: String,
    node_count: usize,
    nodes: Vec<NodeRecord>,
}

/// Serialize `network` to `<base_dir>/network_registry.json`.
pub fn write_registry(network: &Network, base_dir: &Path, generated_at: &str) -> Result<()> {
    let registry = NetworkRegistry {
        generated_at: generated_at.to_string(),
        node_count: network.nodes.len(),
        nodes: network
            .nodes
            .iter()
            .map(|node| NodeRecord {
                name: node.name.clone(),
                node_type: node.node_type.to_string(),
                category: node.category.subdir().to_string(),
                peers: network
                    .peers_of(&node.name)
                    .iter()
                    .map(|peer| peer.to_string())
                    .collect(),
            })
            .collect(),
    };

    let registry_json =
        serde_json::to_string_pretty(&registry).wrap_err("Failed to serialize network registry")?;
    let registry_path = base_dir.join(REGISTRY_FILE);
    std::fs::write(&registry_path, &registry_json)
        .wrap_err_with(|| format!("Failed to write registry '{}'", registry_path.display()))?;
    info!("Wrote topology registry: {:?}", registry_path);

    Ok(())
}
