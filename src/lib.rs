/*
lib.rs

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

//! Connections is a graph-pruning puzzle.
//!
//! The player is shown a graph and removes edges, one at a time, until the number of edges
//! drops to a target.
//! Each removal must keep the graph connected and satisfy the rules of the level, such as
//! required connections, hub nodes, or maximum distances between two nodes.
//! A rejected removal costs a life.
//!
//! * [`generator`] builds the levels.
//! * [`validator`] approves or rejects a removal.
//! * [`game`] manages the level in progress.

pub mod cli_options;
pub mod config;
pub mod draw;
pub mod game;
pub mod generator;
pub mod saver;
pub mod validator;
