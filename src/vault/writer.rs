//! Vault writing.
//!
//! Creates the category folder hierarchy under the vault and writes one
//! Markdown note per node, plus the JSON topology registry. Existing notes
//! with the same name are overwritten without warning; there is no
//! partial-write cleanup when a filesystem error aborts the run.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs;
use std::path::Path;

use crate::registry;
use crate::topology::types::{Category, Network};
use crate::vault::document;

/// Name of the container directory created under the vault root
pub const NETWORK_DIR: &str = "Network";

/// A subfolder is created for every category on each run
const CATEGORIES: [Category; 3] = [Category::Router, Category::Connector, Category::Device];

/// Write the Markdown notes for `network` into `<vault_path>/Network/`.
///
/// Directories are created idempotently with parents as needed. Prints a
/// completion summary to stdout once every note has been written.
pub fn write_network(network: &Network, vault_path: &Path, generated_at: &str) -> Result<()> {
    let base_dir = vault_path.join(NETWORK_DIR);
    fs::create_dir_all(&base_dir)
        .wrap_err_with(|| format!("Failed to create network directory '{}'", base_dir.display()))?;
    for category in CATEGORIES {
        let category_dir = base_dir.join(category.subdir());
        fs::create_dir_all(&category_dir).wrap_err_with(|| {
            format!(
                "Failed to create category directory '{}'",
                category_dir.display()
            )
        })?;
    }

    for node in &network.nodes {
        let peers = network.peers_of(&node.name);
        let content = document::render_note(node, &peers, generated_at);
        let note_path = base_dir
            .join(node.category.subdir())
            .join(format!("{}.md", node.name));
        fs::write(&note_path, content)
            .wrap_err_with(|| format!("Failed to write note '{}'", note_path.display()))?;
    }
    info!("Wrote {} node notes", network.nodes.len());

    registry::write_registry(network, &base_dir, generated_at)?;

    println!(
        "Created {} node files organized into:",
        network.nodes.len()
    );
    for category in CATEGORIES {
        println!("   {}", base_dir.join(category.subdir()).display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::types::Node;
    use tempfile::tempdir;

    fn tiny_network() -> Network {
        let nodes = vec![
            Node {
                name: "Router".to_string(),
                node_type: "Router",
                category: Category::Router,
            },
            Node {
                name: "Hub 1".to_string(),
                node_type: "Hub",
                category: Category::Connector,
            },
        ];
        let mut network = Network::new(nodes);
        network.add_edge("Router", "Hub 1");
        network
    }

    #[test]
    fn test_creates_category_hierarchy() {
        let vault = tempdir().unwrap();
        write_network(&tiny_network(), vault.path(), "2026-08-05 12:00:00").unwrap();

        let base = vault.path().join(NETWORK_DIR);
        assert!(base.is_dir());
        for sub in ["Router", "Connectors", "Devices"] {
            assert!(base.join(sub).is_dir(), "missing subfolder {}", sub);
        }
    }

    #[test]
    fn test_notes_land_in_matching_category_folder() {
        let vault = tempdir().unwrap();
        write_network(&tiny_network(), vault.path(), "2026-08-05 12:00:00").unwrap();

        let base = vault.path().join(NETWORK_DIR);
        assert!(base.join("Router").join("Router.md").is_file());
        assert!(base.join("Connectors").join("Hub 1.md").is_file());
    }

    #[test]
    fn test_rerun_overwrites_existing_notes() {
        let vault = tempdir().unwrap();
        let network = tiny_network();
        write_network(&network, vault.path(), "2026-08-05 12:00:00").unwrap();
        write_network(&network, vault.path(), "2026-08-06 09:30:00").unwrap();

        let note = fs::read_to_string(
            vault
                .path()
                .join(NETWORK_DIR)
                .join("Router")
                .join("Router.md"),
        )
        .unwrap();
        assert!(note.contains("2026-08-06 09:30:00"));
        assert!(!note.contains("2026-08-05 12:00:00"));
    }

    #[test]
    fn test_parent_directories_created_as_needed() {
        let vault = tempdir().unwrap();
        let nested = vault.path().join("does-not-exist-yet");
        assert!(write_network(&tiny_network(), &nested, "2026-08-05 12:00:00").is_ok());
        assert!(nested.join(NETWORK_DIR).join("Router").is_dir());
    }
}
