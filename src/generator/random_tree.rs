/*
random_tree.rs

Copyright 2025 Hervé Quatremain

This file is part of Connections.

Connections is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Connections is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Connections. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Generate a random spanning tree.

use log::debug;
use rand::Rng;

use super::edges::Edge;
use super::nodes::{Node, NodeId};

/// Build a random spanning tree over the given nodes.
///
/// The first node starts the tree. Then, at each step, a random node already in the tree is
/// joined to a random node not yet in the tree.
/// The tree has exactly `nodes.len() - 1` edges, numbered from `first_id`.
pub fn generate(nodes: &[Node], first_id: usize, rng: &mut impl Rng) -> Vec<Edge> {
    let mut edges: Vec<Edge> = Vec::with_capacity(nodes.len().saturating_sub(1));
    let mut unvisited: Vec<NodeId> = nodes.iter().map(|n| n.id).collect();
    if unvisited.is_empty() {
        return edges;
    }
    let mut visited: Vec<NodeId> = vec![unvisited.remove(0)];

    while !unvisited.is_empty() {
        let u: NodeId = visited[rng.random_range(0..visited.len())];
        let v: NodeId = unvisited.swap_remove(rng.random_range(0..unvisited.len()));

        edges.push(Edge::new(first_id + edges.len(), u, v));
        visited.push(v);
    }
    debug!("Spanning tree of {} edges", edges.len());
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::constraints::Constraint;
    use crate::generator::nodes::create_level_layout;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_tree_is_connected() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in 1..=20 {
            let nodes = create_level_layout(count, 800.0, 600.0);
            let edges = generate(&nodes, 0, &mut rng);
            assert_eq!(edges.len(), count - 1);
            assert!(
                Constraint::Connectivity
                    .validate(&nodes, &edges, None)
                    .is_valid()
            );
        }
    }

    #[test]
    fn test_tree_has_no_loop() {
        let mut rng = StdRng::seed_from_u64(99);
        let nodes = create_level_layout(12, 800.0, 600.0);
        let edges = generate(&nodes, 5, &mut rng);
        for (i, e) in edges.iter().enumerate() {
            assert_ne!(e.a, e.b);
            assert_eq!(e.id, 5 + i);
            // A tree stays a tree only if each edge is a bridge
            assert!(
                !Constraint::Connectivity
                    .validate(&nodes, &edges, Some(e))
                    .is_valid()
            );
        }
    }

    #[test]
    fn test_empty_graph() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate(&[], 0, &mut rng).is_empty());
    }
}
