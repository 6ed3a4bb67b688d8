//! Random topology generation.
//!
//! Builds a realistic-looking home/office network: one router, a random
//! layer of connector hardware, and a larger set of end devices, wired up
//! in three phases of random edge sampling.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::topology::types::{Category, Network, Node};

/// Subtype labels end devices are drawn from
pub const END_DEVICE_TYPES: [&str; 7] = [
    "Laptop",
    "Desktop",
    "Smartphone",
    "Printer",
    "Tablet",
    "SmartTV",
    "Camera",
];

/// Subtype labels connectors are drawn from
pub const CONNECTOR_TYPES: [&str; 3] = ["Switch", "Hub", "Extender"];

/// Name and subtype label of the single router node
pub const ROUTER_TYPE: &str = "Router";

/// Generate a random network with categorized nodes and readable names.
///
/// Node counts are uniform: connectors in [1,25], end devices in [5,100].
/// Subtype labels are drawn independently per node; the sequential index
/// is per category, so names never collide. Edges are added in three
/// phases:
///
/// 1. The router connects to 1-5 distinct first-layer targets (connectors,
///    or devices when no connector exists).
/// 2. Each connector connects to 0-3 distinct other connectors.
/// 3. Each device connects to one random connector, or to the router when
///    no connector exists.
///
/// All randomness flows through `rng`, so a seeded generator reproduces
/// the same network.
pub fn generate_network<R: Rng + ?Sized>(rng: &mut R) -> Network {
    let num_connectors = rng.gen_range(1..=25);
    let num_devices = rng.gen_range(5..=100);
    debug!(
        "Generating topology with {} connectors and {} end devices",
        num_connectors, num_devices
    );

    let router = Node {
        name: ROUTER_TYPE.to_string(),
        node_type: ROUTER_TYPE,
        category: Category::Router,
    };

    let connectors: Vec<Node> = (1..=num_connectors)
        .map(|i| {
            let subtype = CONNECTOR_TYPES[rng.gen_range(0..CONNECTOR_TYPES.len())];
            Node {
                name: format!("{} {}", subtype, i),
                node_type: subtype,
                category: Category::Connector,
            }
        })
        .collect();

    let devices: Vec<Node> = (1..=num_devices)
        .map(|i| {
            let subtype = END_DEVICE_TYPES[rng.gen_range(0..END_DEVICE_TYPES.len())];
            Node {
                name: format!("{} {}", subtype, i),
                node_type: subtype,
                category: Category::Device,
            }
        })
        .collect();

    let mut nodes = Vec::with_capacity(1 + connectors.len() + devices.len());
    nodes.push(router);
    nodes.extend(connectors.iter().cloned());
    nodes.extend(devices.iter().cloned());
    let mut network = Network::new(nodes);

    // Phase 1: router to first layer (connectors, or devices if none)
    let first_layer = if connectors.is_empty() {
        devices.as_slice()
    } else {
        connectors.as_slice()
    };
    let fanout = rng.gen_range(1..=5).min(first_layer.len());
    for target in first_layer.choose_multiple(rng, fanout) {
        network.add_edge(ROUTER_TYPE, &target.name);
    }

    // Phase 2: random mesh among the connectors
    for connector in &connectors {
        let others: Vec<&Node> = connectors
            .iter()
            .filter(|other| other.name != connector.name)
            .collect();
        let mesh_degree = rng.gen_range(0..=3).min(others.len());
        for other in others.choose_multiple(rng, mesh_degree) {
            network.add_edge(&connector.name, &other.name);
        }
    }

    // Phase 3: each device attaches to one connector (or the router)
    for device in &devices {
        match connectors.choose(rng) {
            Some(connector) => network.add_edge(&device.name, &connector.name),
            None => network.add_edge(&device.name, ROUTER_TYPE),
        }
    }

    network
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_node_counts_within_bounds() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let network = generate_network(&mut rng);

            let routers = network
                .nodes
                .iter()
                .filter(|node| node.category == Category::Router)
                .count();
            let connectors = network
                .nodes
                .iter()
                .filter(|node| node.category == Category::Connector)
                .count();
            let devices = network
                .nodes
                .iter()
                .filter(|node| node.category == Category::Device)
                .count();

            assert_eq!(routers, 1, "seed {} produced {} routers", seed, routers);
            assert!(
                (1..=25).contains(&connectors),
                "seed {} produced {} connectors",
                seed,
                connectors
            );
            assert!(
                (5..=100).contains(&devices),
                "seed {} produced {} devices",
                seed,
                devices
            );
        }
    }

    #[test]
    fn test_generated_networks_are_structurally_valid() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let network = generate_network(&mut rng);
            network
                .validate()
                .unwrap_or_else(|err| panic!("seed {} produced invalid topology: {}", seed, err));
        }
    }

    #[test]
    fn test_router_has_at_most_five_first_layer_peers() {
        // At least one connector always exists, so devices never attach to
        // the router and its degree equals the phase 1 fanout.
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let network = generate_network(&mut rng);
            let degree = network.peers_of(ROUTER_TYPE).len();
            assert!(
                (1..=5).contains(&degree),
                "seed {} gave the router {} peers",
                seed,
                degree
            );
        }
    }

    #[test]
    fn test_names_use_sequential_per_category_indices() {
        let mut rng = StdRng::seed_from_u64(3);
        let network = generate_network(&mut rng);

        for category in [Category::Connector, Category::Device] {
            let names: Vec<&str> = network
                .nodes
                .iter()
                .filter(|node| node.category == category)
                .map(|node| node.name.as_str())
                .collect();
            for (position, name) in names.iter().enumerate() {
                let (subtype, index) = name.rsplit_once(' ').expect("name has an index suffix");
                assert_eq!(index, (position + 1).to_string());
                let table: &[&str] = match category {
                    Category::Connector => &CONNECTOR_TYPES,
                    _ => &END_DEVICE_TYPES,
                };
                assert!(table.contains(&subtype), "unexpected subtype '{}'", subtype);
            }
        }
    }

    #[test]
    fn test_every_device_has_exactly_one_attachment_edge_minimum() {
        let mut rng = StdRng::seed_from_u64(11);
        let network = generate_network(&mut rng);
        for node in &network.nodes {
            if node.category == Category::Device {
                assert!(
                    !network.peers_of(&node.name).is_empty(),
                    "device '{}' is isolated",
                    node.name
                );
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_network() {
        let mut first_rng = StdRng::seed_from_u64(42);
        let mut second_rng = StdRng::seed_from_u64(42);
        let first = generate_network(&mut first_rng);
        let second = generate_network(&mut second_rng);

        let first_names: Vec<&String> = first.nodes.iter().map(|node| &node.name).collect();
        let second_names: Vec<&String> = second.nodes.iter().map(|node| &node.name).collect();
        assert_eq!(first_names, second_names);
        assert_eq!(first.adjacency, second.adjacency);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut first_rng = StdRng::seed_from_u64(1);
        let mut second_rng = StdRng::seed_from_u64(2);
        let first = generate_network(&mut first_rng);
        let second = generate_network(&mut second_rng);
        assert_ne!(first.adjacency, second.adjacency);
    }
}
