/*
config.rs

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

//! Application settings.

use std::env;
use std::path::PathBuf;

pub static PKGNAME: &str = env!("CARGO_PKG_NAME");
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
pub static COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// Default viewport width.
pub const DEFAULT_WIDTH: f64 = 800.0;

/// Default viewport height.
pub const DEFAULT_HEIGHT: f64 = 600.0;

/// Number of lives at the start of each level.
pub const STARTING_LIVES: usize = 3;

/// Distance under which the pointer selects an edge.
pub const POINTER_TOLERANCE: f64 = 20.0;

/// Number of times a level is generated before accepting an inconsistent one.
pub const GENERATION_ATTEMPTS: usize = 8;

/// Return the directory where the progress is saved.
///
/// Use `$XDG_DATA_HOME/connections`, then `$HOME/.local/share/connections`, and finally the
/// current directory.
pub fn data_dir() -> PathBuf {
    if let Some(d) = env::var_os("XDG_DATA_HOME").filter(|d| !d.is_empty()) {
        let mut p: PathBuf = PathBuf::from(d);
        p.push(PKGNAME);
        return p;
    }
    if let Some(h) = env::var_os("HOME").filter(|h| !h.is_empty()) {
        let mut p: PathBuf = PathBuf::from(h);
        p.push(".local/share");
        p.push(PKGNAME);
        return p;
    }
    PathBuf::from(".")
}
