/*
progress.rs

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

//! Save and restore the level the player reached.
//!
//! The saved object is a [`Progress`] object serialized in JSON format by using [`serde`].

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::{File, create_dir_all, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

/// Progress of the player.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Last level started.
    pub level: usize,
}

impl Progress {
    /// Whether the player can continue from a level other than the first one.
    pub fn can_continue(&self) -> bool {
        self.level > 1
    }
}

/// Object to save and restore the progress.
pub struct SaverProgress {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverProgress {
    /// Create a [`SaverProgress`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the progress must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("progress.json");
        debug!("Progress file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`Progress`] object from the progress file.
    ///
    /// Return None if the progress file does not exist.
    pub fn get_progress(&self) -> Result<Option<Progress>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let progress: Progress = serde_json::from_reader(reader)?;
        Ok(Some(progress))
    }

    /// Save the provided [`Progress`] object.
    ///
    /// The parent directory is created if needed.
    pub fn save_progress(&self, progress: &Progress) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, progress)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the progress file.
    ///
    /// A missing file is not an error.
    pub fn delete_save(&self) -> Result<(), Box<dyn Error>> {
        match remove_file(&self.save_file) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(Box::new(error)),
        }
    }
}
