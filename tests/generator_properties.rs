/*
generator_properties.rs

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

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

use connections::generator::constraints::{Constraint, Validation};
use connections::generator::edges::{Edge, hit_test};
use connections::generator::level::generate_level;
use connections::generator::noise::{add_noise, max_allowed_edges, noise_quota};
use connections::generator::nodes::{NodeId, create_level_layout};
use connections::generator::random_tree;
use connections::generator::solution::prune;
use connections::validator::{validate_all, validate_removal};

// Return the first pair found twice, or a self-loop, if any.
fn duplicated_pair(edges: &[Edge]) -> Option<(NodeId, NodeId)> {
    let mut pairs: HashSet<(NodeId, NodeId)> = HashSet::new();
    edges
        .iter()
        .find(|e| e.a == e.b || !pairs.insert((e.a.min(e.b), e.a.max(e.b))))
        .map(|e| (e.a, e.b))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn spanning_tree_connects_all_nodes(node_count in 1..40usize, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let nodes = create_level_layout(node_count, 640.0, 480.0);
        let tree = random_tree::generate(&nodes, 0, &mut rng);

        prop_assert_eq!(tree.len(), node_count - 1);
        prop_assert_eq!(
            Constraint::Connectivity.validate(&nodes, &tree, None),
            Validation::Valid
        );
        prop_assert_eq!(duplicated_pair(&tree), None);
    }

    #[test]
    fn solution_is_valid_and_locally_minimal(level in 1..30usize, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let l = generate_level(level, 800.0, 600.0, &mut rng);

        // Both base constraints are always there
        prop_assert!(l.constraints.contains(&Constraint::Connectivity));
        prop_assert!(l.constraints.contains(&Constraint::MinDegree { min_degree: 1 }), "missing MinDegree {{ min_degree: 1 }} constraint");
        prop_assert!(l.is_consistent());

        let solution: Vec<Edge> = l.solution_edges().to_vec();
        prop_assert!(validate_all(&l.nodes, &solution, &l.constraints, None).is_valid());
        for e in &solution {
            prop_assert!(!validate_all(&l.nodes, &solution, &l.constraints, Some(e)).is_valid());
        }
        let again = prune(&l.nodes, solution.clone(), &l.constraints, &mut rng);
        prop_assert_eq!(again.len(), solution.len());
    }

    #[test]
    fn noise_is_disjoint_and_capped(level in 1..30usize, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let l = generate_level(level, 800.0, 600.0, &mut rng);
        let node_count: usize = l.nodes.len();
        let solution_count: usize = l.target_complexity;

        prop_assert_eq!(duplicated_pair(&l.edges), None);
        for (i, e) in l.edges.iter().enumerate() {
            prop_assert_eq!(e.id, i);
        }
        prop_assert!(
            l.edges.len() <= solution_count + noise_quota(level, node_count, solution_count)
        );
        if level >= 2 {
            prop_assert!(l.edges.len() <= max_allowed_edges(node_count).max(solution_count));
        }
    }

    #[test]
    fn noise_on_a_tree_never_repeats_a_pair(
        node_count in 2..40usize,
        level in 1..30usize,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let nodes = create_level_layout(node_count, 800.0, 600.0);
        let tree = random_tree::generate(&nodes, 0, &mut rng);
        let edges = add_noise(&nodes, &tree, level, &mut rng);

        prop_assert_eq!(duplicated_pair(&edges), None);
        prop_assert_eq!(&edges[..tree.len()], &tree[..]);
        prop_assert!(edges.len() <= node_count * (node_count - 1) / 2);
    }

    #[test]
    fn removal_checks_are_repeatable(level in 1..12usize, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let l = generate_level(level, 800.0, 600.0, &mut rng);

        for e in &l.edges {
            let first = validate_removal(&l.nodes, &l.edges, &l.constraints, e);
            let second = validate_removal(&l.nodes, &l.edges, &l.constraints, e);
            prop_assert_eq!(first, second);
        }
    }
}

#[test]
fn test_distance_on_line() {
    let nodes = create_level_layout(5, 800.0, 600.0);
    let edges: Vec<Edge> = (1..5).map(|i| Edge::new(i - 1, i, i + 1)).collect();

    let ok = Constraint::MaxDistance {
        a: 1,
        b: 5,
        max_hops: 4,
    };
    assert!(ok.validate(&nodes, &edges, None).is_valid());

    let too_far = Constraint::MaxDistance {
        a: 1,
        b: 5,
        max_hops: 3,
    };
    let v = too_far.validate(&nodes, &edges, None);
    let reason: &str = v.reason().unwrap_or_default();
    assert!(reason.contains('1') && reason.contains('5'));
}

#[test]
fn test_every_edge_can_be_hit() {
    let mut rng = StdRng::seed_from_u64(10);
    let level = generate_level(3, 800.0, 600.0, &mut rng);

    for e in &level.edges {
        let Some(s) = e.segment(&level.nodes) else {
            panic!("edge {} has an unknown endpoint", e.id);
        };
        assert!(hit_test(s, s.start, 1.0));
        assert!(hit_test(s, s.end, 1.0));
    }
}
