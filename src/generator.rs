/*
generator.rs

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

//! Puzzle graph and level generation.
//!
//! The graph is made of [`nodes::Node`] objects laid out on a circle, and of [`edges::Edge`]
//! objects between them.
//! A level also carries a list of [`constraints::Constraint`] objects that the graph must
//! satisfy at all times.
//!
//! [`level::generate_level`] builds a level in several steps:
//!
//! * The nodes are placed on a circle ([`nodes::create_level_layout`]).
//! * The constraints are chosen according to the level number
//!   ([`synthesis::generate_constraints`]).
//! * A minimal solution is built ([`solution::generate`]).
//!   It starts from a random spanning tree ([`random_tree::generate`]), receives the edges
//!   that the constraints require, and is then pruned.
//!   The number of edges of the solution is the target complexity of the level.
//! * Noise edges are added on top of the solution ([`noise::add_noise`]).
//!   The player must find and remove them.
//!
//! All the random draws use the random source given to [`level::generate_level`], so that a
//! seeded source produces the same levels.

pub mod constraints;
pub mod edges;
pub mod level;
pub mod nodes;
pub mod noise;
pub mod random_tree;
pub mod solution;
pub mod synthesis;
