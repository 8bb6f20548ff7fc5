// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `parterre`: command line driver for seat maps.
//!
//! Logging goes to stderr and is controlled by `PARTERRE_LOG`
//! (an `EnvFilter` directive, `info` by default).

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("PARTERRE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::Cli::parse();
    let stdout = std::io::stdout();
    commands::run(cli, &mut stdout.lock())
}
