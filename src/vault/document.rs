//! Note rendering.
//!
//! Pure string construction for per-node Markdown notes; no filesystem
//! access happens here. Rendering is deterministic for a fixed node, peer
//! list, and timestamp.

use crate::topology::types::Node;

/// Placeholder shown in the connections section of a node with no peers
pub const NO_CONNECTIONS_PLACEHOLDER: &str = "*(No direct connections)*";

/// Create a small Mermaid graph for a node's local connections.
///
/// Only edges from the node's own perspective are drawn; the reverse edge
/// lives in the peer's note.
pub fn mermaid_snippet(node_name: &str, peers: &[&str]) -> String {
    let mut lines = vec!["```mermaid".to_string(), "graph LR".to_string()];
    lines.push(format!("    \"{}\"", node_name));
    for peer in peers {
        lines.push(format!("    \"{}\" --> \"{}\"", node_name, peer));
    }
    lines.push("```".to_string());
    lines.join("\n")
}

/// Render the full Markdown note for one node.
///
/// `peers` must already be sorted; the writer obtains it from the ordered
/// adjacency map.
pub fn render_note(node: &Node, peers: &[&str], generated_at: &str) -> String {
    let peer_links = if peers.is_empty() {
        NO_CONNECTIONS_PLACEHOLDER.to_string()
    } else {
        peers
            .iter()
            .map(|peer| format!("- [[{}]]", peer))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let mermaid_block = mermaid_snippet(&node.name, peers);

    format!(
        "# {name}\n\
         *Type:* **{node_type}**  \n\
         *Category:* **{category}**  \n\
         *Generated:* {generated_at}  \n\
         \n\
         ## Connections\n\
         {peer_links}\n\
         \n\
         ## Local Topology\n\
         {mermaid_block}\n",
        name = node.name,
        node_type = node.node_type,
        category = node.category.subdir(),
        generated_at = generated_at,
        peer_links = peer_links,
        mermaid_block = mermaid_block,
    )
}
