/*
constraints.rs

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

//! Structural constraints that the graph must satisfy while the player removes edges.
//!
//! Each [`Constraint`] variant is a pure predicate over the graph.
//! [`Constraint::validate`] receives the edge that the player wants to remove and treats it as
//! removed without touching the edge list.
//! With no edge to remove, the current graph is checked as is.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum_macros::IntoStaticStr;

use super::edges::{Adjacency, Edge, EdgeId, degree};
use super::nodes::{Node, NodeId};

/// Minimum degree used by the constraint that every level carries.
pub const DEFAULT_MIN_DEGREE: usize = 1;

/// Result of a constraint check.
///
/// The reason of an `Invalid` result is a sentence shown as is to the player.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Validation {
    Valid,
    Invalid(String),
}

impl Validation {
    /// Whether the check passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// Return the reason of the failure, or `None` if the check passed.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(r) => Some(r),
        }
    }
}

/// Constraint on the graph.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, IntoStaticStr)]
pub enum Constraint {
    /// All the nodes must be reachable from any node.
    Connectivity,

    /// Every node must keep at least `min_degree` edges.
    MinDegree { min_degree: usize },

    /// The edges between the given pairs of nodes can never be removed.
    SpecificConnection { pairs: Vec<(NodeId, NodeId)> },

    /// The hub node must keep at least `min_connections` edges.
    Hub {
        node: NodeId,
        min_connections: usize,
    },

    /// The shortest path between `a` and `b` must not be longer than `max_hops` edges.
    ///
    /// The whole graph is searched, so a pair that is reachable but too far apart gets the
    /// distance message, and only a pair with no path at all gets the connection message.
    MaxDistance {
        a: NodeId,
        b: NodeId,
        max_hops: usize,
    },
}

impl Constraint {
    /// Check the constraint against the graph, with the `to_remove` edge treated as removed.
    pub fn validate(&self, nodes: &[Node], edges: &[Edge], to_remove: Option<&Edge>) -> Validation {
        let excluded: Option<EdgeId> = to_remove.map(|e| e.id);

        match self {
            Constraint::Connectivity => {
                let Some(start) = nodes.first() else {
                    return Validation::Valid;
                };
                let adjacency: Adjacency = Adjacency::build(nodes, edges, excluded);
                let visited: HashSet<NodeId> = adjacency.reachable(start.id);
                if visited.len() == nodes.len() {
                    Validation::Valid
                } else {
                    Validation::Invalid("Graph must remain connected".to_string())
                }
            }

            Constraint::MinDegree { min_degree } => match to_remove {
                // Only the endpoints of the removed edge lose a connection
                Some(e) => {
                    if degree(edges, e.a, excluded) < *min_degree
                        || degree(edges, e.b, excluded) < *min_degree
                    {
                        Validation::Invalid(format!(
                            "Nodes must have at least {min_degree} connection(s)"
                        ))
                    } else {
                        Validation::Valid
                    }
                }
                None => {
                    if nodes
                        .iter()
                        .any(|n| degree(edges, n.id, None) < *min_degree)
                    {
                        Validation::Invalid(format!(
                            "All nodes must have at least {min_degree} connection(s)"
                        ))
                    } else {
                        Validation::Valid
                    }
                }
            },

            Constraint::SpecificConnection { pairs } => match to_remove {
                Some(e) if pairs.iter().any(|(u, v)| e.connects(*u, *v)) => {
                    Validation::Invalid(format!(
                        "Must keep connection between {} and {}",
                        e.a, e.b
                    ))
                }
                _ => Validation::Valid,
            },

            Constraint::Hub {
                node,
                min_connections,
            } => {
                if degree(edges, *node, excluded) < *min_connections {
                    Validation::Invalid(format!(
                        "Node {node} must have at least {min_connections} connections"
                    ))
                } else {
                    Validation::Valid
                }
            }

            Constraint::MaxDistance { a, b, max_hops } => {
                let adjacency: Adjacency = Adjacency::build(nodes, edges, excluded);
                match adjacency.distance(*a, *b) {
                    Some(d) if d <= *max_hops => Validation::Valid,
                    Some(_) => Validation::Invalid(format!(
                        "Distance between {a} and {b} must be ≤ {max_hops} hops"
                    )),
                    None => Validation::Invalid(format!("Nodes {a} and {b} must remain connected")),
                }
            }
        }
    }

    /// Return the requirement lines that describe the constraint to the player.
    ///
    /// Connectivity and minimum degree are the rules of every level and are not listed.
    pub fn requirements(&self) -> Vec<String> {
        match self {
            Constraint::Connectivity | Constraint::MinDegree { .. } => Vec::new(),
            Constraint::SpecificConnection { pairs } => pairs
                .iter()
                .map(|(u, v)| format!("Connect {u} ↔ {v}"))
                .collect(),
            Constraint::Hub {
                node,
                min_connections,
            } => vec![format!("Node {node}: Min {min_connections} links")],
            Constraint::MaxDistance { a, b, max_hops } => {
                vec![format!("{a} ↔ {b} (≤ {max_hops} hops)")]
            }
        }
    }

    /// Name of the constraint variant, for log messages.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::nodes::create_level_layout;

    fn line(ids: &[NodeId]) -> Vec<Edge> {
        ids.windows(2)
            .enumerate()
            .map(|(i, w)| Edge::new(i, w[0], w[1]))
            .collect()
    }

    #[test]
    fn test_connectivity() {
        let nodes = create_level_layout(4, 100.0, 100.0);
        let edges = line(&[1, 2, 3, 4]);
        let c = Constraint::Connectivity;

        assert!(c.validate(&nodes, &edges, None).is_valid());
        let v = c.validate(&nodes, &edges, Some(&edges[1]));
        assert_eq!(v.reason(), Some("Graph must remain connected"));
    }

    #[test]
    fn test_connectivity_with_cycle() {
        let nodes = create_level_layout(4, 100.0, 100.0);
        let mut edges = line(&[1, 2, 3, 4]);
        edges.push(Edge::new(3, 4, 1));
        let c = Constraint::Connectivity;

        for e in &edges {
            assert!(c.validate(&nodes, &edges, Some(e)).is_valid());
        }
    }

    #[test]
    fn test_connectivity_ignores_inactive_edges() {
        let nodes = create_level_layout(3, 100.0, 100.0);
        let mut edges = line(&[1, 2, 3]);
        edges[0].active = false;
        let v = Constraint::Connectivity.validate(&nodes, &edges, None);
        assert!(!v.is_valid());
    }

    #[test]
    fn test_min_degree_checks_endpoints_only() {
        let nodes = create_level_layout(4, 100.0, 100.0);
        // Node 4 is isolated, but only the endpoints of the removed edge are checked
        let edges = vec![Edge::new(0, 1, 2), Edge::new(1, 2, 3), Edge::new(2, 3, 1)];
        let c = Constraint::MinDegree { min_degree: 1 };

        assert!(c.validate(&nodes, &edges, Some(&edges[0])).is_valid());
        assert_eq!(
            c.validate(&nodes, &edges, None).reason(),
            Some("All nodes must have at least 1 connection(s)")
        );
    }

    #[test]
    fn test_min_degree_rejects_leaf() {
        let nodes = create_level_layout(3, 100.0, 100.0);
        let edges = line(&[1, 2, 3]);
        let c = Constraint::MinDegree { min_degree: 1 };
        assert_eq!(
            c.validate(&nodes, &edges, Some(&edges[0])).reason(),
            Some("Nodes must have at least 1 connection(s)")
        );
    }

    #[test]
    fn test_specific_connection() {
        let nodes = create_level_layout(4, 100.0, 100.0);
        let edges = vec![Edge::new(0, 3, 1), Edge::new(1, 1, 2)];
        let c = Constraint::SpecificConnection {
            pairs: vec![(1, 3)],
        };

        assert!(c.validate(&nodes, &edges, None).is_valid());
        assert!(c.validate(&nodes, &edges, Some(&edges[1])).is_valid());
        assert_eq!(
            c.validate(&nodes, &edges, Some(&edges[0])).reason(),
            Some("Must keep connection between 3 and 1")
        );
    }

    #[test]
    fn test_hub() {
        let nodes = create_level_layout(5, 100.0, 100.0);
        let edges = vec![
            Edge::new(0, 1, 2),
            Edge::new(1, 1, 3),
            Edge::new(2, 1, 4),
            Edge::new(3, 4, 5),
        ];
        let c = Constraint::Hub {
            node: 1,
            min_connections: 3,
        };

        assert!(c.validate(&nodes, &edges, None).is_valid());
        assert!(c.validate(&nodes, &edges, Some(&edges[3])).is_valid());
        assert_eq!(
            c.validate(&nodes, &edges, Some(&edges[0])).reason(),
            Some("Node 1 must have at least 3 connections")
        );
    }

    #[test]
    fn test_max_distance_on_line() {
        let nodes = create_level_layout(5, 100.0, 100.0);
        let edges = line(&[1, 2, 3, 4, 5]);

        let c = Constraint::MaxDistance {
            a: 1,
            b: 5,
            max_hops: 4,
        };
        assert!(c.validate(&nodes, &edges, None).is_valid());

        let c = Constraint::MaxDistance {
            a: 1,
            b: 5,
            max_hops: 3,
        };
        let v = c.validate(&nodes, &edges, None);
        assert!(!v.is_valid());
        let reason = v.reason().unwrap_or_default();
        assert!(reason.contains('1') && reason.contains('5'), "{reason}");
        assert_eq!(reason, "Distance between 1 and 5 must be ≤ 3 hops");
    }

    #[test]
    fn test_max_distance_far_but_reachable() {
        let nodes = create_level_layout(5, 100.0, 100.0);
        let mut edges = line(&[1, 2, 3, 4, 5]);
        edges.push(Edge::new(4, 5, 1));
        let c = Constraint::MaxDistance {
            a: 1,
            b: 5,
            max_hops: 1,
        };

        assert!(c.validate(&nodes, &edges, None).is_valid());
        // Without the shortcut, 5 is still reachable from 1, four hops away
        assert_eq!(
            c.validate(&nodes, &edges, Some(&edges[4])).reason(),
            Some("Distance between 1 and 5 must be ≤ 1 hops")
        );
    }

    #[test]
    fn test_max_distance_disconnected() {
        let nodes = create_level_layout(5, 100.0, 100.0);
        let edges = line(&[1, 2, 3, 4, 5]);
        let c = Constraint::MaxDistance {
            a: 1,
            b: 5,
            max_hops: 4,
        };
        assert_eq!(
            c.validate(&nodes, &edges, Some(&edges[3])).reason(),
            Some("Nodes 1 and 5 must remain connected")
        );
    }

    #[test]
    fn test_requirements() {
        assert!(Constraint::Connectivity.requirements().is_empty());
        let c = Constraint::SpecificConnection {
            pairs: vec![(1, 4), (2, 3)],
        };
        assert_eq!(c.requirements(), vec!["Connect 1 ↔ 4", "Connect 2 ↔ 3"]);
        let c = Constraint::MaxDistance {
            a: 2,
            b: 6,
            max_hops: 2,
        };
        assert_eq!(c.requirements(), vec!["2 ↔ 6 (≤ 2 hops)"]);
        assert_eq!(c.kind(), "MaxDistance");
    }
}
