/*
synthesis.rs

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

//! Choose the constraints of a level.
//!
//! Constraints accumulate with the level number:
//!
//! | Level | Added constraint |
//! |---|---|
//! | 1 | connectivity and minimum degree of 1 |
//! | 2 | `level / 2` required pairs |
//! | 3 | one hub with at least 3 connections |
//! | 4 | one maximum distance of 2 hops between two nodes |

use log::debug;
use rand::Rng;

use super::constraints::{Constraint, DEFAULT_MIN_DEGREE};
use super::nodes::{Node, NodeId, NodeTag};

/// Minimum number of connections of a hub.
const HUB_MIN_CONNECTIONS: usize = 3;

/// Maximum number of hops for the maximum distance constraint.
const MAX_HOPS: usize = 2;

/// Return the constraints for the given level.
///
/// The hub node, if any, is tagged in `nodes`.
pub fn generate_constraints(
    level: usize,
    nodes: &mut [Node],
    rng: &mut impl Rng,
) -> Vec<Constraint> {
    let mut constraints: Vec<Constraint> = vec![
        Constraint::Connectivity,
        Constraint::MinDegree {
            min_degree: DEFAULT_MIN_DEGREE,
        },
    ];
    let node_count: usize = nodes.len();

    // All the other constraints need two distinct nodes
    if node_count < 2 {
        return constraints;
    }

    if level >= 2 {
        let pairs: Vec<(NodeId, NodeId)> = random_pairs(level / 2, node_count, rng);
        if !pairs.is_empty() {
            constraints.push(Constraint::SpecificConnection { pairs });
        }
    }

    if level >= 3 {
        let hub: NodeId = random_id(node_count, rng);
        constraints.push(Constraint::Hub {
            node: hub,
            min_connections: HUB_MIN_CONNECTIONS,
        });
        if let Some(n) = nodes.iter_mut().find(|n| n.id == hub) {
            n.tag = NodeTag::Hub;
        }
    }

    if level >= 4 {
        let (a, b) = random_distinct_ids(node_count, rng);
        constraints.push(Constraint::MaxDistance {
            a,
            b,
            max_hops: MAX_HOPS,
        });
    }

    debug!(
        "Level {level} constraints: {:?}",
        constraints.iter().map(|c| c.kind()).collect::<Vec<_>>()
    );
    constraints
}

/// Return a random node ID between 1 and `node_count`.
fn random_id(node_count: usize, rng: &mut impl Rng) -> NodeId {
    rng.random_range(1..=node_count)
}

/// Return two different random node IDs.
fn random_distinct_ids(node_count: usize, rng: &mut impl Rng) -> (NodeId, NodeId) {
    let id1: NodeId = random_id(node_count, rng);
    let mut id2: NodeId = random_id(node_count, rng);
    while id1 == id2 {
        id2 = random_id(node_count, rng);
    }
    (id1, id2)
}

/// Draw `draws` random pairs and return the ones that are not duplicated.
///
/// A pair that was already drawn is dropped, so fewer than `draws` pairs can be returned.
fn random_pairs(draws: usize, node_count: usize, rng: &mut impl Rng) -> Vec<(NodeId, NodeId)> {
    let mut pairs: Vec<(NodeId, NodeId)> = Vec::with_capacity(draws);

    for _ in 0..draws {
        let (id1, id2) = random_distinct_ids(node_count, rng);
        if pairs
            .iter()
            .any(|&(u, v)| (u == id1 && v == id2) || (u == id2 && v == id1))
        {
            debug!("Dropping duplicated pair {id1}-{id2}");
        } else {
            pairs.push((id1, id2));
        }
    }
    pairs
}
