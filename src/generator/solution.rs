/*
solution.rs

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

//! Build a minimal graph that satisfies all the constraints of a level.
//!
//! The solution starts from a random spanning tree, which makes the graph connected.
//! Edges are then added until the specific connection, hub, and maximum distance constraints
//! are satisfied.
//! Finally the graph is pruned: edges are visited in a random order and each edge that can go
//! without breaking a constraint is deleted.
//!
//! The result is locally minimal: no single edge can be removed from it.
//! It is not necessarily the smallest possible graph.

use log::{Level, debug, log_enabled};
use rand::Rng;
use rand::seq::SliceRandom;

use super::constraints::Constraint;
use super::edges::{Adjacency, Edge, degree, has_edge};
use super::nodes::{Node, NodeId};
use super::random_tree;
use crate::validator::validate_all;

/// Generate and return the solution edges for the given nodes and constraints.
pub fn generate(nodes: &[Node], constraints: &[Constraint], rng: &mut impl Rng) -> Vec<Edge> {
    let mut edges: Vec<Edge> = random_tree::generate(nodes, 0, rng);

    for constraint in constraints {
        match constraint {
            Constraint::SpecificConnection { pairs } => force_pairs(&mut edges, pairs),
            Constraint::Hub {
                node,
                min_connections,
            } => force_hub(nodes, &mut edges, *node, *min_connections, rng),
            _ => (),
        }
    }

    // Maximum distances are forced last so that the other added edges can already shorten
    // the paths.
    for constraint in constraints {
        if let Constraint::MaxDistance { a, b, .. } = constraint
            && !constraint.validate(nodes, &edges, None).is_valid()
            && !has_edge(&edges, *a, *b)
        {
            debug!("Adding shortcut {a}-{b}");
            push_edge(&mut edges, *a, *b);
        }
    }

    debug!("Solution before pruning: {} edges", edges.len());
    prune(nodes, edges, constraints, rng)
}

/// Add an edge at the end of the list, with the next free ID.
fn push_edge(edges: &mut Vec<Edge>, u: NodeId, v: NodeId) {
    let id: usize = edges.iter().map(|e| e.id + 1).max().unwrap_or(0);
    edges.push(Edge::new(id, u, v));
}

/// Add the required pairs that are not already edges.
fn force_pairs(edges: &mut Vec<Edge>, pairs: &[(NodeId, NodeId)]) {
    for (u, v) in pairs {
        if !has_edge(edges, *u, *v) {
            debug!("Adding required pair {u}-{v}");
            push_edge(edges, *u, *v);
        }
    }
}

/// Connect the hub to random nodes until it has enough edges.
///
/// If the hub is already connected to all the other nodes, give up.
fn force_hub(
    nodes: &[Node],
    edges: &mut Vec<Edge>,
    hub: NodeId,
    min_connections: usize,
    rng: &mut impl Rng,
) {
    let mut current: usize = degree(edges, hub, None);

    while current < min_connections {
        let candidates: Vec<NodeId> = nodes
            .iter()
            .map(|n| n.id)
            .filter(|&id| id != hub && !has_edge(edges, hub, id))
            .collect();
        if candidates.is_empty() {
            debug!("Hub {hub} saturated at {current} connections (needs {min_connections})");
            break;
        }
        let v: NodeId = candidates[rng.random_range(0..candidates.len())];
        debug!("Adding hub edge {hub}-{v}");
        push_edge(edges, hub, v);
        current += 1;
    }
}

/// Remove all the edges that are not needed to satisfy the constraints.
///
/// The edges are shuffled, and then visited from the end of the list.
/// An edge is deleted as soon as all the constraints pass without it, so the following checks
/// see the pruned graph.
pub fn prune(
    nodes: &[Node],
    mut edges: Vec<Edge>,
    constraints: &[Constraint],
    rng: &mut impl Rng,
) -> Vec<Edge> {
    edges.shuffle(rng);

    let mut i: usize = edges.len();
    while i > 0 {
        i -= 1;
        if validate_all(nodes, &edges, constraints, Some(&edges[i])).is_valid() {
            let e: Edge = edges.remove(i);
            debug!("    Edge {}-{} pruned", e.a, e.b);
        }
    }

    if log_enabled!(Level::Debug) {
        debug!("Solution after pruning: {} edges", edges.len());
        Adjacency::build(nodes, &edges, None).debug();
    }
    edges
}
