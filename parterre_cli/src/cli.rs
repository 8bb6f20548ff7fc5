// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use parterre_focus::Direction;

/// Inspect a venue seat map and manage a saved seat selection.
#[derive(Debug, Parser)]
#[command(name = "parterre", version, about)]
pub(crate) struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true, env = "PARTERRE_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// Directory for saved selections (overrides the config file).
    #[arg(long, global = true)]
    pub(crate) store_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print venue statistics.
    Info {
        /// Venue JSON file.
        venue: PathBuf,
    },
    /// List the seats visible through a scrolled viewport.
    Visible {
        /// Venue JSON file.
        venue: PathBuf,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Find the seat next to another one.
    Navigate {
        /// Venue JSON file.
        venue: PathBuf,
        /// Seat to start from.
        #[arg(long)]
        from: String,
        /// Direction to move in.
        #[arg(long, value_enum)]
        direction: DirectionArg,
    },
    /// Toggle seats in the saved selection.
    Toggle {
        /// Venue JSON file.
        venue: PathBuf,
        /// Seat ids, toggled in order.
        #[arg(required = true)]
        seats: Vec<String>,
    },
    /// Replay key presses starting from a focused seat.
    Keys {
        /// Venue JSON file.
        venue: PathBuf,
        /// Seat focused before the first key.
        #[arg(long)]
        focus: String,
        /// Key names such as `ArrowDown`, `Enter`, `Space`, `Escape`.
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Show the saved selection with prices.
    Summary {
        /// Venue JSON file.
        venue: PathBuf,
    },
    /// Forget the saved selection.
    Clear {
        /// Venue JSON file.
        venue: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, clap::Args)]
pub(crate) struct ViewArgs {
    /// Horizontal scroll offset, in container pixels.
    #[arg(long, default_value_t = 0.0)]
    pub(crate) x: f64,
    /// Vertical scroll offset, in container pixels.
    #[arg(long, default_value_t = 0.0)]
    pub(crate) y: f64,
    /// Visible width, in container pixels.
    #[arg(long, default_value_t = 1280.0)]
    pub(crate) width: f64,
    /// Visible height, in container pixels.
    #[arg(long, default_value_t = 720.0)]
    pub(crate) height: f64,
    /// Container width; defaults to the visible width.
    #[arg(long)]
    pub(crate) container_width: Option<f64>,
    /// Container height; defaults to the visible height.
    #[arg(long)]
    pub(crate) container_height: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum DirectionArg {
    Up,
    Down,
    Left,
    Right,
}

impl From<DirectionArg> for Direction {
    fn from(d: DirectionArg) -> Self {
        match d {
            DirectionArg::Up => Self::Up,
            DirectionArg::Down => Self::Down,
            DirectionArg::Left => Self::Left,
            DirectionArg::Right => Self::Right,
        }
    }
}
