/*
validator.rs

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

//! Approve or reject the removal of an edge.

use log::debug;

use crate::generator::constraints::{Constraint, Validation};
use crate::generator::edges::Edge;
use crate::generator::nodes::Node;

/// Run all the constraints, in order, and return the first failure.
///
/// The `to_remove` edge, if any, is treated as removed.
pub fn validate_all(
    nodes: &[Node],
    edges: &[Edge],
    constraints: &[Constraint],
    to_remove: Option<&Edge>,
) -> Validation {
    for constraint in constraints {
        let v: Validation = constraint.validate(nodes, edges, to_remove);
        if !v.is_valid() {
            return v;
        }
    }
    Validation::Valid
}

/// Whether the player can remove the `candidate` edge from the graph.
///
/// Only the active edges take part in the checks.
/// The reason of a rejection is the reason of the first constraint that fails.
pub fn validate_removal(
    nodes: &[Node],
    edges: &[Edge],
    constraints: &[Constraint],
    candidate: &Edge,
) -> Validation {
    let v: Validation = validate_all(nodes, edges, constraints, Some(candidate));
    if let Validation::Invalid(reason) = &v {
        debug!(
            "Cannot remove edge {} ({}-{}): {reason}",
            candidate.id, candidate.a, candidate.b
        );
    }
    v
}
