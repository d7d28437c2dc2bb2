/*
game.rs

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

//! Manage the status of a level in progress.
//!
//! The [`Session`] object owns the level being played and the random source used to generate
//! levels.
//! Each player move goes through [`Session::attempt_removal`], which approves or rejects the
//! removal, updates the number of lives, and detects the end of the level.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::{POINTER_TOLERANCE, STARTING_LIVES};
use crate::generator::constraints::{Constraint, Validation};
use crate::generator::edges::{self, Edge, EdgeId, Point};
use crate::generator::level::{Level, generate_level};
use crate::generator::nodes::Node;
use crate::validator::validate_removal;

/// Status of the level.
///
/// `Won` and `Lost` are final: the edges do not change anymore until a level is started.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

/// Result of a removal attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RemovalOutcome {
    /// The edge is removed and the level goes on.
    Removed,

    /// The edge is removed and the target complexity is reached.
    Won,

    /// A constraint rejected the removal. The player loses a life.
    Rejected(String),

    /// A constraint rejected the removal and the player has no more lives.
    Lost(String),

    /// Nothing happened: the level is over, or the edge is unknown or already removed.
    Ignored,
}

/// Level in progress.
pub struct Session {
    /// Level being played.
    level: Level,

    /// Number of active edges.
    complexity: usize,

    /// Remaining lives.
    lives: usize,

    /// Whether the level is in progress, won, or lost.
    status: Status,

    /// Viewport width used for the layout.
    width: f64,

    /// Viewport height used for the layout.
    height: f64,

    /// Random source for all the level generations of the session.
    rng: StdRng,
}

impl Session {
    /// Create a [`Session`] object and start the given level.
    ///
    /// With a `seed`, the sequence of generated levels is reproducible.
    pub fn new(level: usize, width: f64, height: f64, seed: Option<u64>) -> Self {
        let mut rng: StdRng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        let level: Level = generate_level(level, width, height, &mut rng);
        let complexity: usize = edges::count_active(&level.edges);

        Self {
            level,
            complexity,
            lives: STARTING_LIVES,
            status: Status::Playing,
            width,
            height,
            rng,
        }
    }

    /// Replace the level in progress with a new level.
    pub fn start_level(&mut self, number: usize) {
        self.level = generate_level(number, self.width, self.height, &mut self.rng);
        self.lives = STARTING_LIVES;
        self.status = Status::Playing;
        self.update_complexity();
        debug!(
            "Starting level {}: complexity {} target {}",
            self.level.number, self.complexity, self.level.target_complexity
        );
    }

    /// Start the current level again, with a newly generated graph.
    pub fn restart_level(&mut self) {
        self.start_level(self.level.number);
    }

    /// Start the next level.
    pub fn next_level(&mut self) {
        self.start_level(self.level.number + 1);
    }

    /// Try to remove the given edge.
    pub fn attempt_removal(&mut self, edge_id: EdgeId) -> RemovalOutcome {
        if self.status != Status::Playing {
            debug!("Level is over: ignoring edge {edge_id}");
            return RemovalOutcome::Ignored;
        }
        let edge: &Edge = match self.level.edges.get(edge_id) {
            Some(e) if e.active => e,
            _ => {
                debug!("Edge {edge_id} is not in play");
                return RemovalOutcome::Ignored;
            }
        };

        match validate_removal(
            &self.level.nodes,
            &self.level.edges,
            &self.level.constraints,
            edge,
        ) {
            Validation::Valid => {
                self.level.edges[edge_id].active = false;
                self.update_complexity();
                if self.complexity <= self.level.target_complexity {
                    info!("Level {} complete", self.level.number);
                    self.status = Status::Won;
                    RemovalOutcome::Won
                } else {
                    RemovalOutcome::Removed
                }
            }
            Validation::Invalid(reason) => {
                self.lives = self.lives.saturating_sub(1);
                debug!("Lives: {}", self.lives);
                if self.lives == 0 {
                    info!("Level {} lost", self.level.number);
                    self.status = Status::Lost;
                    RemovalOutcome::Lost(reason)
                } else {
                    RemovalOutcome::Rejected(reason)
                }
            }
        }
    }

    /// Return the first active edge under the given point.
    pub fn edge_at(&self, point: Point) -> Option<EdgeId> {
        self.level
            .edges
            .iter()
            .filter(|e| e.active)
            .find(|e| {
                e.segment(&self.level.nodes)
                    .is_some_and(|s| edges::hit_test(s, point, POINTER_TOLERANCE))
            })
            .map(|e| e.id)
    }

    /// Mark the edge under the given point as hovered, and clear the other edges.
    ///
    /// Return the hovered edge.
    pub fn hover(&mut self, point: Point) -> Option<EdgeId> {
        let hovered: Option<EdgeId> = self.edge_at(point);
        for e in self.level.edges.iter_mut() {
            e.hovered = Some(e.id) == hovered;
        }
        hovered
    }

    /// Return the requirement lines for all the constraints.
    pub fn requirements(&self) -> Vec<String> {
        self.level
            .constraints
            .iter()
            .flat_map(|c| c.requirements())
            .collect()
    }

    fn update_complexity(&mut self) {
        self.complexity = edges::count_active(&self.level.edges);
    }

    /// Return the level in progress.
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Return the level number.
    pub fn level_number(&self) -> usize {
        self.level.number
    }

    pub fn nodes(&self) -> &[Node] {
        &self.level.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.level.edges
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.level.constraints
    }

    /// Return the number of active edges.
    pub fn complexity(&self) -> usize {
        self.complexity
    }

    pub fn target_complexity(&self) -> usize {
        self.level.target_complexity
    }

    pub fn lives(&self) -> usize {
        self.lives
    }

    pub fn status(&self) -> Status {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Return the ID of an edge that the constraints do not allow to remove, if any.
    fn rejected_edge(session: &Session) -> Option<EdgeId> {
        let level: &Level = session.level();
        level.edges.iter().map(|e| e.id).find(|&id| {
            !validate_removal(
                &level.nodes,
                &level.edges,
                &level.constraints,
                &level.edges[id],
            )
            .is_valid()
        })
    }

    #[test]
    fn test_new_session() {
        let session = Session::new(2, 800.0, 600.0, Some(1));
        assert_eq!(session.level_number(), 2);
        assert_eq!(session.lives(), STARTING_LIVES);
        assert_eq!(session.status(), Status::Playing);
        assert_eq!(session.complexity(), session.edges().len());
        assert!(session.complexity() > session.target_complexity());
    }

    #[test]
    fn test_unknown_edge_is_ignored() {
        let mut session = Session::new(1, 800.0, 600.0, Some(2));
        assert_eq!(session.attempt_removal(999), RemovalOutcome::Ignored);
        assert_eq!(session.lives(), STARTING_LIVES);
    }

    #[test]
    fn test_removed_edge_is_ignored() {
        let mut session = Session::new(1, 800.0, 600.0, Some(3));
        let noise: EdgeId = session.level().noise_edges()[0].id;
        assert_ne!(session.attempt_removal(noise), RemovalOutcome::Ignored);
        assert_eq!(session.attempt_removal(noise), RemovalOutcome::Ignored);
    }

    #[test]
    fn test_rejection_costs_a_life() {
        // Level 3 always has a required pair, which can never be removed
        let mut session = Session::new(3, 800.0, 600.0, Some(4));
        let Some(id) = rejected_edge(&session) else {
            panic!("no edge is protected");
        };
        let before: usize = session.complexity();

        match session.attempt_removal(id) {
            RemovalOutcome::Rejected(reason) => assert!(!reason.is_empty()),
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(session.lives(), STARTING_LIVES - 1);
        assert_eq!(session.complexity(), before);
        assert!(session.edges()[id].active);
    }

    #[test]
    fn test_restart_resets_lives() {
        let mut session = Session::new(4, 800.0, 600.0, Some(5));
        if let Some(id) = rejected_edge(&session) {
            session.attempt_removal(id);
        }
        session.restart_level();
        assert_eq!(session.lives(), STARTING_LIVES);
        assert_eq!(session.level_number(), 4);
        assert_eq!(session.complexity(), session.edges().len());
        session.next_level();
        assert_eq!(session.level_number(), 5);
    }

    #[test]
    fn test_edge_at_and_hover() {
        let mut session = Session::new(1, 800.0, 600.0, Some(6));
        let e: Edge = session.edges()[0].clone();
        let Some(s) = e.segment(session.nodes()) else {
            panic!("edge without segment");
        };
        let middle: Point = ((s.start.0 + s.end.0) / 2.0, (s.start.1 + s.end.1) / 2.0);

        let found = session.edge_at(middle);
        assert_eq!(found, Some(e.id));
        assert_eq!(session.hover(middle), found);
        let hovered: Vec<EdgeId> = session
            .edges()
            .iter()
            .filter(|e| e.hovered)
            .map(|e| e.id)
            .collect();
        assert_eq!(hovered.len(), 1);

        // Far away from the graph
        assert_eq!(session.hover((-500.0, -500.0)), None);
        assert!(session.edges().iter().all(|e| !e.hovered));
    }

    #[test]
    fn test_requirements_follow_constraints() {
        let session = Session::new(4, 800.0, 600.0, Some(7));
        let expected: usize = session
            .constraints()
            .iter()
            .map(|c| c.requirements().len())
            .sum();
        assert_eq!(session.requirements().len(), expected);
        assert!(expected >= 3);
    }
}
