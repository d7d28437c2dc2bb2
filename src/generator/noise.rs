/*
noise.rs

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

//! Add noise edges on top of the solution.
//!
//! Noise edges are the edges the player must find and remove.

use log::debug;
use rand::Rng;

use super::edges::{Edge, has_edge};
use super::nodes::{Node, NodeId};

/// Maximum number of random draws before giving up on adding noise edges.
const MAX_ATTEMPTS: usize = 1000;

/// Number of noise edges to add for the given level.
///
/// From level 2, the total number of edges is capped to 70% of the edges of the complete graph.
pub fn noise_quota(level: usize, node_count: usize, solution_count: usize) -> usize {
    if level <= 1 {
        return node_count * 3 / 2;
    }
    let quota: usize = node_count + level / 2;
    let max_allowed: usize = max_allowed_edges(node_count);
    if solution_count + quota > max_allowed {
        max_allowed.saturating_sub(solution_count)
    } else {
        quota
    }
}

/// 70% of the number of edges of the complete graph.
pub fn max_allowed_edges(node_count: usize) -> usize {
    node_count * node_count.saturating_sub(1) / 2 * 7 / 10
}

/// Return the solution edges followed by the noise edges.
///
/// The noise edges are random, never duplicate an existing pair, and never loop on a node.
/// Fewer edges than the quota are added when the random draws keep failing.
pub fn add_noise(
    nodes: &[Node],
    solution: &[Edge],
    level: usize,
    rng: &mut impl Rng,
) -> Vec<Edge> {
    let mut edges: Vec<Edge> = solution.to_vec();
    if nodes.is_empty() {
        return edges;
    }
    let target: usize = solution.len() + noise_quota(level, nodes.len(), solution.len());
    let mut attempts: usize = 0;

    while edges.len() < target && attempts < MAX_ATTEMPTS {
        attempts += 1;
        let u: NodeId = nodes[rng.random_range(0..nodes.len())].id;
        let v: NodeId = nodes[rng.random_range(0..nodes.len())].id;

        if u == v || has_edge(&edges, u, v) {
            continue;
        }
        edges.push(Edge::new(edges.len(), u, v));
    }
    debug!(
        "Noise: {} edges added in {attempts} attempts (target {})",
        edges.len() - solution.len(),
        target - solution.len()
    );
    edges
}
