/*
cli_options.rs

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

//! Process command-line options.
//!
//! Without options, Connections starts a game in the terminal, from the level saved during the
//! previous run.
//! With the `--level` option, Connections generates levels and prints them, which is useful
//! to inspect the generator.
//!
//! # Examples
//!
//! Generate three level 5 puzzles, in a reproducible way, and print some statistics:
//!
//! ```text
//! $ connections --level 5 --count 3 --seed 42 --summary
//! ```
//!
//! Play from level 4:
//!
//! ```text
//! $ connections --play --level 4
//! ```
//!
//! Forget the saved progress and play from level 1:
//!
//! ```text
//! $ connections --reset
//! ```

use clap::Parser;
use log::{LevelFilter, debug, error, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::config::{self, COPYRIGHT_NOTICE, DEFAULT_HEIGHT, DEFAULT_WIDTH, PKGNAME, VERSION};
use crate::draw;
use crate::game::{RemovalOutcome, Session, Status};
use crate::generator::edges::EdgeId;
use crate::generator::level::{Level, generate_level};
use crate::saver::progress::{Progress, SaverProgress};

/// Graph-pruning puzzle: remove edges without breaking the rules.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Level to generate, or to start playing from
    #[arg(short, long)]
    level: Option<usize>,

    /// Number of levels to generate
    #[arg(short, long, default_value_t = 1, requires = "level")]
    count: usize,

    /// Seed for the random generator, for reproducible levels
    #[arg(long)]
    seed: Option<u64>,

    /// Viewport width
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: f64,

    /// Viewport height
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: f64,

    /// Print the generated levels in JSON format
    #[arg(short, long, default_value_t = false, requires = "level")]
    json: bool,

    /// Print some statistics after generating the levels
    #[arg(short, long, default_value_t = false, requires = "level")]
    summary: bool,

    /// Play in the terminal
    #[arg(short, long, default_value_t = false)]
    play: bool,

    /// Forget the saved progress and play from the first level
    #[arg(long, default_value_t = false, conflicts_with = "level")]
    reset: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Player command in the terminal game.
#[derive(Debug, PartialEq)]
enum Command {
    Remove(EdgeId),
    Click(f64, f64),
    Restart,
    Next,
    Help,
    Quit,
    Unknown,
}

impl Command {
    /// Parse a line that the player entered.
    fn parse(line: &str) -> Self {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["q" | "quit"] => Command::Quit,
            ["r" | "restart"] => Command::Restart,
            ["n" | "next"] => Command::Next,
            ["h" | "help" | "?"] => Command::Help,
            ["c" | "click", x, y] => match (x.parse::<f64>(), y.parse::<f64>()) {
                (Ok(x), Ok(y)) => Command::Click(x, y),
                _ => Command::Unknown,
            },
            [id] => match id.parse::<EdgeId>() {
                Ok(id) => Command::Remove(id),
                Err(_) => Command::Unknown,
            },
            _ => Command::Unknown,
        }
    }
}

const HELP: &str = "Commands:
  <id>       remove the edge with the given ID
  c <x> <y>  remove the edge at the given position
  r          restart the level
  n          go to the next level (after completing the level)
  q          quit";

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();
    debug!("{PKGNAME} {VERSION}");

    if args.play || args.level.is_none() {
        return play(&args);
    }
    generate(&args)
}

/// Generate levels and print them.
fn generate(args: &Args) -> u8 {
    let number: usize = args.level.unwrap_or(1);
    let mut rng: StdRng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let mut levels: Vec<Level> = Vec::with_capacity(args.count);
    let start: Instant = Instant::now();
    for i in 0..args.count {
        debug!("Iteration {i}");
        levels.push(generate_level(number, args.width, args.height, &mut rng));
    }
    let duration: f32 = start.elapsed().as_secs_f32();

    if args.json {
        match serde_json::to_string_pretty(&levels) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                error!("Cannot serialize the levels: {e}");
                return 1;
            }
        }
    } else {
        for l in &levels {
            println!("{}", draw::draw_level(l));
        }
    }

    if args.summary && !levels.is_empty() {
        let count: usize = levels.len();
        let targets: usize = levels.iter().map(|l| l.target_complexity).sum();
        let edges: usize = levels.iter().map(|l| l.edges.len()).sum();
        let inconsistent: usize = levels.iter().filter(|l| !l.is_consistent()).count();
        println!(
            "
        total time = {}s
      average time = {}s
    average target = {}
     average edges = {}
      inconsistent = {}",
            duration,
            duration / count as f32,
            targets as f32 / count as f32,
            edges as f32 / count as f32,
            inconsistent
        );
    }
    0
}

/// Save the level number so that the next run can continue from there.
fn save_progress(saver: &SaverProgress, level: usize) {
    if let Err(e) = saver.save_progress(&Progress { level }) {
        warn!("Cannot save the progress: {e}");
    }
}

/// Play in the terminal, reading the commands from the standard input.
fn play(args: &Args) -> u8 {
    let saver: SaverProgress = SaverProgress::new(config::data_dir());
    if args.reset
        && let Err(e) = saver.delete_save()
    {
        error!("Cannot delete the progress: {e}");
        return 1;
    }
    let start: usize = match args.level {
        Some(l) => l,
        None => match saver.get_progress() {
            Ok(Some(p)) if p.can_continue() => {
                println!("Continuing level {}", p.level);
                p.level
            }
            Ok(_) => 1,
            Err(e) => {
                warn!("Cannot read the progress: {e}");
                1
            }
        },
    };

    let mut session: Session = Session::new(start, args.width, args.height, args.seed);
    save_progress(&saver, session.level_number());
    println!("{HELP}\n");
    print!("{}", draw::draw_session(&session));

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line: String = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => (),
            Err(e) => {
                error!("Cannot read the command: {e}");
                return 1;
            }
        }

        let outcome: Option<RemovalOutcome> = match Command::parse(line.trim()) {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Unknown => {
                println!("Unknown command. Type h for help.");
                continue;
            }
            Command::Restart => {
                session.restart_level();
                None
            }
            Command::Next => {
                if session.status() != Status::Won {
                    println!("Complete the level first.");
                    continue;
                }
                session.next_level();
                save_progress(&saver, session.level_number());
                None
            }
            Command::Remove(id) => Some(session.attempt_removal(id)),
            Command::Click(x, y) => match session.edge_at((x, y)) {
                Some(id) => Some(session.attempt_removal(id)),
                None => {
                    println!("No edge there.");
                    continue;
                }
            },
        };

        match outcome {
            Some(RemovalOutcome::Rejected(reason)) | Some(RemovalOutcome::Lost(reason)) => {
                println!("!! {reason}")
            }
            Some(RemovalOutcome::Ignored) => println!("Nothing happens."),
            _ => (),
        }
        print!("{}", draw::draw_session(&session));
    }
    0
}
