/*
level.rs

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

//! Generate a complete level.

use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::constraints::Constraint;
use super::edges::Edge;
use super::nodes::{self, Node};
use super::{noise, solution, synthesis};
use crate::config::GENERATION_ATTEMPTS;
use crate::validator::validate_all;

/// A generated level.
///
/// The edges of the solution come first in [`Level::edges`], followed by the noise edges.
/// The handle of each edge is its index in that list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Level {
    /// Level number, starting at 1.
    pub number: usize,

    /// Nodes laid out on a circle.
    pub nodes: Vec<Node>,

    /// Starting graph.
    pub edges: Vec<Edge>,

    /// Constraints, in the order they are checked.
    pub constraints: Vec<Constraint>,

    /// Number of edges in the solution. The player wins when the number of active edges drops
    /// to that value.
    pub target_complexity: usize,
}

impl Level {
    /// Return the edges of the solution.
    pub fn solution_edges(&self) -> &[Edge] {
        &self.edges[..self.target_complexity.min(self.edges.len())]
    }

    /// Return the noise edges.
    pub fn noise_edges(&self) -> &[Edge] {
        &self.edges[self.target_complexity.min(self.edges.len())..]
    }

    /// Whether both the solution and the starting graph satisfy all the constraints.
    pub fn is_consistent(&self) -> bool {
        validate_all(&self.nodes, self.solution_edges(), &self.constraints, None).is_valid()
            && validate_all(&self.nodes, &self.edges, &self.constraints, None).is_valid()
    }
}

/// Generate the level.
///
/// Levels below 1 are generated as level 1.
/// If the generated level does not satisfy its own constraints, it is generated again with new
/// random draws, up to [`GENERATION_ATTEMPTS`] times.
/// When all the attempts fail, the last level is returned anyway.
pub fn generate_level(level: usize, width: f64, height: f64, rng: &mut impl Rng) -> Level {
    let level: usize = level.max(1);
    let mut attempt: usize = 1;

    loop {
        let l: Level = build(level, width, height, rng);
        if l.is_consistent() {
            info!(
                "Level {level}: {} nodes, {} edges, target {}",
                l.nodes.len(),
                l.edges.len(),
                l.target_complexity
            );
            return l;
        }
        if attempt >= GENERATION_ATTEMPTS {
            warn!("Level {level} is inconsistent after {attempt} attempts");
            return l;
        }
        debug!("Level {level} is inconsistent, attempt {attempt}: generating again");
        attempt += 1;
    }
}

/// Generate the level once.
fn build(level: usize, width: f64, height: f64, rng: &mut impl Rng) -> Level {
    let mut nodes: Vec<Node> =
        nodes::create_level_layout(nodes::node_count(level), width, height);
    let constraints: Vec<Constraint> = synthesis::generate_constraints(level, &mut nodes, rng);

    let mut solution: Vec<Edge> = solution::generate(&nodes, &constraints, rng);
    for (i, e) in solution.iter_mut().enumerate() {
        e.id = i;
    }
    let target_complexity: usize = solution.len();
    let edges: Vec<Edge> = noise::add_noise(&nodes, &solution, level, rng);

    Level {
        number: level,
        nodes,
        edges,
        constraints,
        target_complexity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::solution::prune;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn levels_are_consistent(number in 1..30usize, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let level = generate_level(number, 800.0, 600.0, &mut rng);
            prop_assert_eq!(level.nodes.len(), number + 3);
            prop_assert!(level.is_consistent());
            for (i, e) in level.edges.iter().enumerate() {
                prop_assert_eq!(e.id, i);
                prop_assert!(e.active);
            }
        }
    }

    #[rstest]
    fn test_solution_is_locally_minimal(#[values(1, 3, 4, 7)] number: usize) {
        let mut rng = StdRng::seed_from_u64(number as u64);
        let level = generate_level(number, 800.0, 600.0, &mut rng);
        let solution: Vec<Edge> = level.solution_edges().to_vec();
        let again = prune(&level.nodes, solution.clone(), &level.constraints, &mut rng);
        assert_eq!(again.len(), solution.len());
    }

    #[test]
    fn test_level_zero_is_level_one() {
        let mut rng = StdRng::seed_from_u64(0);
        let level = generate_level(0, 800.0, 600.0, &mut rng);
        assert_eq!(level.number, 1);
        assert_eq!(level.nodes.len(), 4);
    }

    #[test]
    fn test_same_seed_same_level() {
        let a = generate_level(6, 800.0, 600.0, &mut StdRng::seed_from_u64(77));
        let b = generate_level(6, 800.0, 600.0, &mut StdRng::seed_from_u64(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_split_between_solution_and_noise() {
        let mut rng = StdRng::seed_from_u64(5);
        let level = generate_level(5, 800.0, 600.0, &mut rng);
        assert_eq!(level.solution_edges().len(), level.target_complexity);
        assert_eq!(
            level.solution_edges().len() + level.noise_edges().len(),
            level.edges.len()
        );
    }
}
