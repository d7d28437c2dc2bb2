/*
draw.rs

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

//! Draw the puzzle as text for the terminal.

use std::fmt::Write;

use crate::config::STARTING_LIVES;
use crate::game::{Session, Status};
use crate::generator::constraints::Constraint;
use crate::generator::level::Level;
use crate::generator::nodes::{Node, NodeTag, find_node};

/// Marker for the lives that remain and the lives that are lost.
const LIFE: char = '⬢';
const LOST_LIFE: char = '⬡';

/// Return the text representation of a node.
fn node_label(node: &Node) -> String {
    match node.tag {
        NodeTag::Hub => format!("[{}*]", node.id),
        NodeTag::Normal => format!("[{}]", node.id),
    }
}

/// Return the requirement lines, one per line, or an empty string.
fn requirements(constraints: &[Constraint]) -> String {
    let mut s: String = String::new();
    let lines: Vec<String> = constraints.iter().flat_map(|c| c.requirements()).collect();

    if !lines.is_empty() {
        s.push_str("Requirements:\n");
        for line in lines {
            let _ = writeln!(s, "  - {line}");
        }
    }
    s
}

/// Return a generated level, with the solution and noise edges separated.
///
/// This representation reveals the solution and is intended for developers.
pub fn draw_level(level: &Level) -> String {
    let mut s: String = String::new();

    let _ = writeln!(
        s,
        "Level {}: {} nodes, {} edges, target {}",
        level.number,
        level.nodes.len(),
        level.edges.len(),
        level.target_complexity
    );
    let nodes: Vec<String> = level.nodes.iter().map(node_label).collect();
    let _ = writeln!(s, "Nodes: {}", nodes.join(" "));
    s.push_str(&requirements(&level.constraints));

    let solution: Vec<String> = level
        .solution_edges()
        .iter()
        .map(|e| format!("{}-{}", e.a, e.b))
        .collect();
    let noise: Vec<String> = level
        .noise_edges()
        .iter()
        .map(|e| format!("{}-{}", e.a, e.b))
        .collect();
    let _ = writeln!(s, "Solution: {}", solution.join(" "));
    let _ = writeln!(s, "Noise: {}", noise.join(" "));
    if !level.is_consistent() {
        s.push_str("WARNING: the level does not satisfy its constraints\n");
    }
    s
}

/// Return the board of the level in progress, as shown to the player.
pub fn draw_session(session: &Session) -> String {
    let mut s: String = String::new();

    let lives: String = (0..STARTING_LIVES)
        .map(|i| if i < session.lives() { LIFE } else { LOST_LIFE })
        .collect();
    let _ = writeln!(
        s,
        "Level {}   complexity {} / target {}   lives {lives}",
        session.level_number(),
        session.complexity(),
        session.target_complexity()
    );
    s.push_str(&requirements(session.constraints()));

    for e in session.edges().iter().filter(|e| e.active) {
        let (Some(a), Some(b)) = (
            find_node(session.nodes(), e.a),
            find_node(session.nodes(), e.b),
        ) else {
            continue;
        };
        let _ = writeln!(s, "  {:>3}: {} -- {}", e.id, node_label(a), node_label(b));
    }

    match session.status() {
        Status::Playing => (),
        Status::Won => s.push_str(">> SEQUENCE_COMPLETE: CONNECTION_ESTABLISHED\n"),
        Status::Lost => s.push_str(">> SYSTEM_FAILURE: SIGNAL_LOST. REBOOT_REQUIRED.\n"),
    }
    s
}
