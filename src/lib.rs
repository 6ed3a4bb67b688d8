//! # Netnotes - Obsidian vault generator for random network topologies
//!
//! This library generates a small random computer network (one router, a
//! handful of connector hardware, a larger set of end devices) and renders
//! it as one linked Markdown note per node inside an Obsidian vault:
//!
//! ```text
//! Network/
//! |-- Router/
//! |-- Connectors/
//! \-- Devices/
//! ```
//!
//! Each note carries the node's type and category, one link per directly
//! connected peer, and a Mermaid diagram of the node's own outgoing edges.
//! A `network_registry.json` document summarizing the whole topology is
//! written alongside the notes.
//!
//! ## Architecture
//!
//! The library is organized into three modules:
//!
//! - `topology`: node and category types, the adjacency relation, random
//!   topology generation, and structural validation
//! - `vault`: note rendering and the category folder hierarchy
//! - `registry`: JSON summary of the generated topology
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use netnotes::topology::generate_network;
//! use netnotes::vault::write_network;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let network = generate_network(&mut rng);
//! write_network(&network, std::path::Path::new("/path/to/vault"), "2026-08-05 12:00:00")?;
//! # Ok::<(), color_eyre::eyre::Report>(())
//! ```
//!
//! ## Error Handling
//!
//! Filesystem work returns `color_eyre::Result` with path context attached
//! via `wrap_err_with`. Structural topology problems are reported through
//! the `thiserror`-derived `TopologyError`.

pub mod registry;
pub mod topology;
pub mod vault;
