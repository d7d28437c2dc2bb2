/*
edges.rs

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

//! Edges between nodes in the puzzle graph.
//!
//! An [`Edge`] is identified by its [`EdgeId`] handle, not by its endpoints.
//! Once a level is built, the handle of an edge is its index in the level's edge list.
//!
//! Constraint checks never delete edges.
//! Instead, they build an [`Adjacency`] map that skips inactive edges and the edge being
//! hypothetically removed, so the same edge list can be checked repeatedly.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

use super::nodes::{Node, NodeId, find_node};

/// Handle of an edge.
pub type EdgeId = usize;

/// Position in the viewport.
pub type Point = (f64, f64);

/// An undirected edge between two nodes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Edge {
    /// Edge handle.
    pub id: EdgeId,

    /// First endpoint.
    pub a: NodeId,

    /// Second endpoint.
    pub b: NodeId,

    /// Whether the edge is still in play.
    /// Once an edge is deactivated, it stays inactive until the end of the level.
    pub active: bool,

    /// Whether the pointer is over the edge. Only used by the presentation layer.
    #[serde(skip)]
    pub hovered: bool,
}

impl Edge {
    /// Create an active [`Edge`] object.
    pub fn new(id: EdgeId, a: NodeId, b: NodeId) -> Self {
        Self {
            id,
            a,
            b,
            active: true,
            hovered: false,
        }
    }

    /// Whether the edge joins the two given nodes, in any order.
    pub fn connects(&self, u: NodeId, v: NodeId) -> bool {
        (self.a == u && self.b == v) || (self.a == v && self.b == u)
    }

    /// Whether the given node is one of the endpoints.
    pub fn touches(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }

    /// Whether the edge counts for a constraint check that excludes `excluded`.
    pub fn is_live(&self, excluded: Option<EdgeId>) -> bool {
        self.active && excluded != Some(self.id)
    }

    /// Return the segment between the two endpoints, or `None` if an endpoint is unknown.
    pub fn segment(&self, nodes: &[Node]) -> Option<Segment> {
        let start: &Node = find_node(nodes, self.a)?;
        let end: &Node = find_node(nodes, self.b)?;
        Some(Segment {
            start: start.position(),
            end: end.position(),
        })
    }
}

/// Whether an edge between the two given nodes exists in the list (active or not).
pub fn has_edge(edges: &[Edge], u: NodeId, v: NodeId) -> bool {
    edges.iter().any(|e| e.connects(u, v))
}

/// Number of live edges touching the given node.
pub fn degree(edges: &[Edge], node: NodeId, excluded: Option<EdgeId>) -> usize {
    edges
        .iter()
        .filter(|e| e.is_live(excluded) && e.touches(node))
        .count()
}

/// Number of active edges.
pub fn count_active(edges: &[Edge]) -> usize {
    edges.iter().filter(|e| e.active).count()
}

/// Adjacency map of the live edges.
#[derive(Debug, Clone)]
pub struct Adjacency {
    /// For each node, the list of the adjacent nodes.
    adjacent: HashMap<NodeId, Vec<NodeId>>,
}

impl Adjacency {
    /// Build the adjacency map from the active edges, skipping the `excluded` edge.
    ///
    /// Every node gets an entry, even isolated ones.
    pub fn build(nodes: &[Node], edges: &[Edge], excluded: Option<EdgeId>) -> Self {
        let mut adjacent: HashMap<NodeId, Vec<NodeId>> =
            nodes.iter().map(|n| (n.id, Vec::new())).collect();

        for e in edges.iter().filter(|e| e.is_live(excluded)) {
            adjacent.entry(e.a).or_default().push(e.b);
            adjacent.entry(e.b).or_default().push(e.a);
        }
        Self { adjacent }
    }

    /// For the given node, return the adjacent nodes.
    pub fn neighbours(&self, node: NodeId) -> &[NodeId] {
        self.adjacent.get(&node).map_or(&[], Vec::as_slice)
    }

    /// Return the set of the nodes reachable from `start`, including `start`.
    pub fn reachable(&self, start: NodeId) -> HashSet<NodeId> {
        let mut visited: HashSet<NodeId> = HashSet::with_capacity(self.adjacent.len());
        let mut queue: VecDeque<NodeId> = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            for &v in self.neighbours(current) {
                if visited.insert(v) {
                    queue.push_back(v);
                }
            }
        }
        visited
    }

    /// Return the number of hops of the shortest path between the two nodes, or `None` if
    /// `to` cannot be reached from `from`.
    pub fn distance(&self, from: NodeId, to: NodeId) -> Option<usize> {
        let mut visited: HashSet<NodeId> = HashSet::with_capacity(self.adjacent.len());
        let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();

        visited.insert(from);
        queue.push_back((from, 0));
        while let Some((current, dist)) = queue.pop_front() {
            // Nodes are dequeued level by level, so the first visit is the shortest
            if current == to {
                return Some(dist);
            }
            for &v in self.neighbours(current) {
                if visited.insert(v) {
                    queue.push_back((v, dist + 1));
                }
            }
        }
        None
    }

    /// Print the adjacency map.
    pub fn debug(&self) {
        let mut s: String = String::new();
        let mut v: Vec<_> = self.adjacent.iter().collect();

        v.sort_by_key(|a| a.0);
        for (v1, e) in v {
            s.clear();
            s.push_str(&format!("{v1:>3} -->"));
            for v2 in e {
                s.push_str(&format!(" {v2}"));
            }
            debug!("{s}");
        }
    }
}

/// A finite segment between two points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Distance between the point and the closest point of the segment.
    ///
    /// When the projection of the point falls outside the segment, the distance to the
    /// nearest endpoint is returned. A zero-length segment measures the distance to its start.
    pub fn distance_to(&self, point: Point) -> f64 {
        let (x1, y1) = self.start;
        let (x2, y2) = self.end;
        let (x, y) = point;
        let dx: f64 = x2 - x1;
        let dy: f64 = y2 - y1;
        let len_sq: f64 = dx * dx + dy * dy;

        let param: f64 = if len_sq != 0.0 {
            ((x - x1) * dx + (y - y1) * dy) / len_sq
        } else {
            -1.0
        };

        let (xx, yy) = if param < 0.0 {
            (x1, y1)
        } else if param > 1.0 {
            (x2, y2)
        } else {
            (x1 + param * dx, y1 + param * dy)
        };
        (x - xx).hypot(y - yy)
    }
}

/// Whether the point is closer than `tolerance` to the segment.
pub fn hit_test(segment: Segment, point: Point, tolerance: f64) -> bool {
    segment.distance_to(point) < tolerance
}
