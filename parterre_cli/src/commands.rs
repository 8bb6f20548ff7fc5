// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::Write;
use std::path::Path;

use anyhow::{Context as _, Result, bail};
use kurbo::Size;
use parterre_focus::Direction;
use parterre_focus::adapters::venue::find_adjacent_seat_with;
use parterre_state::{
    JsonFileStore, Key, KeyOutcome, SeatMapConfig, SeatMapState, SelectionStore,
};
use parterre_venue::{SeatStatus, VenueData};
use parterre_view::ScrollViewport;
use parterre_view::adapters::venue::visible_venue_seats;
use tracing::info;

use crate::cli::{Cli, Command, ViewArgs};

pub(crate) fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = match &cli.config {
        Some(path) => SeatMapConfig::from_path(path)?,
        None => SeatMapConfig::default(),
    };
    let store_dir = cli.store_dir.as_deref();

    match cli.command {
        Command::Info { venue } => info_cmd(&load_venue(&venue)?, out),
        Command::Visible { venue, view } => visible(&load_venue(&venue)?, &view, &config, out),
        Command::Navigate {
            venue,
            from,
            direction,
        } => navigate(&load_venue(&venue)?, &from, direction.into(), &config, out),
        Command::Toggle { venue, seats } => {
            let mut state = open_state(&venue, config, store_dir)?;
            for id in &seats {
                let outcome = state.toggle_seat(id);
                writeln!(out, "{id}: {outcome:?}")?;
            }
            write!(out, "{}", state.summary())?;
            Ok(())
        }
        Command::Keys { venue, focus, keys } => {
            let mut state = open_state(&venue, config, store_dir)?;
            if state.venue().and_then(|v| v.find_seat(&focus)).is_none() {
                bail!("unknown seat {focus}");
            }
            state.set_focus(Some(&focus));
            for name in &keys {
                let outcome = state.handle_key(Key::from_name(name));
                writeln!(out, "{name}: {}", describe(&outcome))?;
            }
            write!(out, "{}", state.summary())?;
            Ok(())
        }
        Command::Summary { venue } => {
            let state = open_state(&venue, config, store_dir)?;
            write!(out, "{}", state.summary())?;
            Ok(())
        }
        Command::Clear { venue } => {
            let mut state = open_state(&venue, config, store_dir)?;
            state.clear_selection();
            writeln!(out, "selection cleared")?;
            Ok(())
        }
    }
}

fn load_venue(path: &Path) -> Result<VenueData> {
    let venue = VenueData::from_path(path)
        .with_context(|| format!("failed to load venue {}", path.display()))?;
    info!(venue = %venue.venue_id, seats = venue.seat_count(), "venue loaded");
    Ok(venue)
}

fn open_store(config: &SeatMapConfig, dir_override: Option<&Path>) -> Result<Box<dyn SelectionStore>> {
    let store = match dir_override.or(config.storage.dir.as_deref()) {
        Some(dir) => JsonFileStore::with_dir(dir),
        None => JsonFileStore::new()?,
    }
    .with_prefix(config.storage.prefix.clone());
    info!(dir = %store.dir().display(), "using selection store");
    Ok(Box::new(store))
}

fn open_state(venue: &Path, config: SeatMapConfig, store_dir: Option<&Path>) -> Result<SeatMapState> {
    let venue = load_venue(venue)?;
    let store = open_store(&config, store_dir)?;
    let mut state = SeatMapState::new(config, store);
    state.set_venue(venue);
    Ok(state)
}

fn info_cmd(venue: &VenueData, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} ({})", venue.name, venue.venue_id)?;
    writeln!(out, "map: {} x {}", venue.map.width, venue.map.height)?;
    writeln!(out, "sections: {}", venue.sections.len())?;
    writeln!(out, "seats: {}", venue.seat_count())?;
    for status in [
        SeatStatus::Available,
        SeatStatus::Reserved,
        SeatStatus::Sold,
        SeatStatus::Held,
    ] {
        let n = venue.seats().filter(|s| s.seat.status == status).count();
        writeln!(out, "  {status}: {n}")?;
    }
    Ok(())
}

fn visible(venue: &VenueData, view: &ViewArgs, config: &SeatMapConfig, out: &mut impl Write) -> Result<()> {
    let viewport = ScrollViewport::new(view.x, view.y, view.width, view.height);
    let container = Size::new(
        view.container_width.unwrap_or(view.width),
        view.container_height.unwrap_or(view.height),
    );
    let seats = visible_venue_seats(Some(venue), &viewport, container, &config.cull_params());
    writeln!(out, "{} of {} seats visible", seats.len(), venue.seat_count())?;
    for s in seats {
        writeln!(out, "{}\t{}\t{}", s.seat.id, s.section_id, s.row_index)?;
    }
    Ok(())
}

fn navigate(
    venue: &VenueData,
    from: &str,
    direction: Direction,
    config: &SeatMapConfig,
    out: &mut impl Write,
) -> Result<()> {
    if venue.find_seat(from).is_none() {
        bail!("unknown seat {from}");
    }
    match find_adjacent_seat_with(venue, from, direction, &config.focus_policy()) {
        Some(id) => writeln!(out, "{id}")?,
        None => writeln!(out, "no seat {direction:?} of {from}")?,
    }
    Ok(())
}

fn describe(outcome: &KeyOutcome) -> String {
    match outcome {
        KeyOutcome::Ignored => "ignored".to_owned(),
        KeyOutcome::Toggled(t) => format!("toggled ({t:?})"),
        KeyOutcome::Cleared => "cleared".to_owned(),
        KeyOutcome::Navigated(Some(id)) => format!("focus {id}"),
        KeyOutcome::Navigated(None) => "no neighbor".to_owned(),
    }
}
