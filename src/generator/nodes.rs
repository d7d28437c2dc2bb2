/*
nodes.rs

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

//! Nodes of the puzzle graph and their layout in the viewport.

use log::{Level, debug, log_enabled};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Fraction of the smallest viewport dimension used as the layout circle radius.
const LAYOUT_RADIUS_RATIO: f64 = 0.3;

/// Identifier of a node. Identifiers start at 1.
pub type NodeId = usize;

/// Cosmetic tag of a node.
///
/// - a `Normal` node is drawn with the default color.
/// - a `Hub` node is the subject of a hub constraint and is highlighted.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq)]
pub enum NodeTag {
    #[default]
    Normal,
    Hub,
}

/// A node in the puzzle graph.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Node {
    /// Node identifier, stable for the lifetime of the level.
    pub id: NodeId,

    /// Horizontal position in the viewport.
    pub x: f64,

    /// Vertical position in the viewport.
    pub y: f64,

    /// Color tag.
    pub tag: NodeTag,
}

impl Node {
    /// Create a [`Node`] object.
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            tag: NodeTag::Normal,
        }
    }

    /// Return the position of the node as an `(x, y)` tuple.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Number of nodes for the given level.
pub fn node_count(level: usize) -> usize {
    level + 3
}

/// Place `node_count` nodes evenly on a circle centered in the viewport.
///
/// The radius of the circle is 30% of the smallest viewport dimension.
/// The node at index `i` is placed at the angle `2π·i/node_count` and gets the ID `i + 1`.
pub fn create_level_layout(node_count: usize, width: f64, height: f64) -> Vec<Node> {
    let center_x: f64 = width / 2.0;
    let center_y: f64 = height / 2.0;
    let radius: f64 = width.min(height) * LAYOUT_RADIUS_RATIO;

    let nodes: Vec<Node> = (0..node_count)
        .map(|i| {
            let angle: f64 = (i as f64 / node_count as f64) * PI * 2.0;
            Node::new(
                i + 1,
                center_x + angle.cos() * radius,
                center_y + angle.sin() * radius,
            )
        })
        .collect();

    if log_enabled!(Level::Debug) {
        debug!("Layout of {node_count} nodes, radius {radius:.1}");
        for n in &nodes {
            debug!("{:>3} --> ({:.1}, {:.1})", n.id, n.x, n.y);
        }
    }
    nodes
}

/// Return the node with the given ID.
pub fn find_node(nodes: &[Node], id: NodeId) -> Option<&Node> {
    nodes.iter().find(|n| n.id == id)
}
