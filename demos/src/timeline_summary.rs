// Copyright 2025 the Tempora Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless tour of every Tempora view.
//!
//! Loads a timeline (the bundled sampler unless a path is given), lays it out
//! as a tree, a perspective road, a corridor and a shelf, then drives the
//! scrubber, zoom stepper and minimap against the results.
//!
//! Run:
//! - `cargo run -p tempora_demos --bin timeline_summary`
//! - `RUST_LOG=debug cargo run -p tempora_demos --bin timeline_summary -- --view corridor path/to/timeline.json`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use kurbo::Size;
use tempora_date::format_year;
use tempora_interaction::{Minimap, NoCapture, Playback, Scrubber, ScrubberTrack, ZoomState};
use tempora_layout::{
    AutoFit, LayoutCache, LayoutKey, ViewConfigs, ViewKind, ViewLayout, ViewUiState,
};
use tempora_timeline::{Timeline, TimelineStore};

const SAMPLE: &str = include_str!("../data/sample_timeline.json");

/// Print a summary of every Tempora layout for a timeline.
#[derive(Parser, Debug)]
#[command(name = "timeline_summary")]
struct Args {
    /// Timeline JSON file; the bundled sampler when omitted
    path: Option<PathBuf>,

    /// Only show this view (tree, depth, corridor, shelf)
    #[arg(long)]
    view: Option<String>,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Event id to select before rendering
    #[arg(long)]
    select: Option<String>,
}

fn load(args: &Args) -> Result<Timeline, String> {
    let text = match &args.path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?,
        None => SAMPLE.to_owned(),
    };
    Timeline::from_json(&text).map_err(|e| format!("invalid timeline: {e}"))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let views: Vec<ViewKind> = match args.view.as_deref() {
        None => ViewKind::ALL.to_vec(),
        Some(name) => match ViewKind::from_name(name) {
            Some(kind) => vec![kind],
            None => {
                eprintln!("unknown view {name:?}; expected tree, depth, corridor or shelf");
                return ExitCode::FAILURE;
            }
        },
    };

    let timeline = match load(&args) {
        Ok(timeline) => timeline,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let mut store = TimelineStore::new(timeline);
    if let Some(id) = args.select.as_deref()
        && !store.select_event(Some(id))
    {
        log::warn!("no event with id {id:?}; nothing selected");
    }

    let configs = ViewConfigs::default();
    let mut ui = ViewUiState {
        viewport: Size::new(args.width, args.height),
        ..ViewUiState::default()
    };
    let mut auto_fit = AutoFit::new();
    if let Some(ppy) = auto_fit.fit(
        store.data_revision(),
        store.timeline(),
        args.height,
        &configs.tree,
    ) {
        log::info!("auto-fit tree zoom to {ppy:.2} px/year");
        ui.pixels_per_year = ppy;
    }

    let timeline = store.timeline();
    println!(
        "{} ({} events, {} groups)",
        timeline
            .title
            .as_deref()
            .or(timeline.id.as_deref())
            .unwrap_or("untitled timeline"),
        timeline.events.len(),
        timeline.groups.len()
    );
    if let Some(event) = store.selected_event() {
        println!("selected: {} ({})", event.title, event.date_start);
    }

    let mut cache = LayoutCache::new();
    for kind in views {
        let key = LayoutKey {
            kind,
            data_revision: store.data_revision(),
            ui_revision: 0,
        };
        let layout = cache.get_or_compute(key, timeline, &configs, &ui);
        println!();
        println!("== {} ==", kind.name());
        print_layout(timeline, layout, &ui);
    }

    demo_interaction(&mut ui, &configs);
    ExitCode::SUCCESS
}

fn title(timeline: &Timeline, index: usize) -> &str {
    timeline
        .events
        .get(index)
        .map_or("?", |event| event.title.as_str())
}

fn print_layout(timeline: &Timeline, layout: &ViewLayout, ui: &ViewUiState) {
    if layout.is_empty() {
        println!("(no data)");
        return;
    }
    match layout {
        ViewLayout::Tree(tree) => {
            println!(
                "{} to {} at {:.2} px/year, {:.0} x {:.0} px",
                format_year(tree.min_year),
                format_year(tree.max_year),
                tree.pixels_per_year,
                tree.total_width,
                tree.total_height
            );
            println!("trunk: {} events", tree.trunk_nodes.len());
            for branch in &tree.branches {
                println!(
                    "branch {:<10} {:?} tier {} at x={:.0}: {} events",
                    branch.label,
                    branch.side,
                    branch.tier,
                    branch.x,
                    branch.nodes.len()
                );
            }
            let labels: Vec<String> = tree
                .ticks
                .iter()
                .filter(|tick| tick.major)
                .map(|tick| format_year(tick.year).to_string())
                .collect();
            println!("ruler: {}", labels.join(", "));
        }
        ViewLayout::Depth(depth) => {
            println!(
                "road vanishes at ({:.0}, {:.0}); ticks every {} years",
                depth.road.vanishing_point.x, depth.road.vanishing_point.y, depth.tick_interval
            );
            for card in &depth.events {
                println!(
                    "z={:>4} depth={:.2} scale={:.2} at ({:>6.1}, {:>6.1}) {}",
                    card.z_index,
                    card.normalized_depth,
                    card.scale,
                    card.position.x,
                    card.position.y,
                    title(timeline, card.event)
                );
            }
        }
        ViewLayout::Corridor(corridor) => {
            for bay in &corridor.bays {
                let gap = bay
                    .gap_from_previous
                    .map_or_else(String::new, |years| format!(" after {years:.0} quiet years"));
                println!(
                    "{} {:<20} {:?} x={:.0} w={:.0}: {} events{gap}",
                    bay.id,
                    bay.label,
                    bay.size_class,
                    bay.x_position,
                    bay.width,
                    bay.events.len()
                );
            }
            let active = corridor
                .active_bay_at(0.0, ui.viewport.width)
                .and_then(|index| corridor.bays.get(index));
            if let Some(bay) = active {
                println!("in view at scroll 0: {}", bay.label);
            }
            println!("corridor length {:.0} px", corridor.total_width);
        }
        ViewLayout::Shelf(shelf) => {
            println!(
                "{:.3} events/year -> {}-year books",
                shelf.average_density, shelf.segment_size
            );
            for book in &shelf.books {
                let marker = if book.has_gap_indicator { "..." } else { "" };
                println!(
                    "{marker}[{}] {:?} w={:.0}: {} chapters",
                    book.label,
                    book.density,
                    book.width,
                    book.chapters.len()
                );
            }
        }
    }
}

fn demo_interaction(ui: &mut ViewUiState, configs: &ViewConfigs) {
    println!();
    println!("== interaction ==");

    let mut zoom = ZoomState::new(tempora_interaction::ZoomConfig {
        min: configs.tree.zoom_min,
        max: configs.tree.zoom_max,
        default: ui.pixels_per_year,
        ..tempora_interaction::ZoomConfig::default()
    });
    for _ in 0..40 {
        zoom.zoom_in();
    }
    println!("zoomed in as far as allowed: {:.2} px/year", zoom.value());
    zoom.reset();
    ui.pixels_per_year = zoom.value();

    let mut scrubber = Scrubber::new(ScrubberTrack::new(0.0, ui.viewport.width), NoCapture);
    let mut playback = Playback::default();
    let mut t = scrubber.press(ui.viewport.width * 0.25);
    scrubber.release();
    t = playback.play(t);
    let mut frames = 0;
    while playback.playing {
        t = playback.advance(t, 1.0);
        frames += 1;
    }
    println!("playback from 0.25 reached {t:.2} after {frames} frames");

    let minimap = Minimap::new(ui.viewport.width * 6.0, ui.viewport.width, 240.0);
    let scroll = minimap.navigate_to(120.0);
    let (x, width) = minimap.indicator(scroll);
    println!("minimap click at 120 scrolls to {scroll:.0}; indicator at {x:.1} ({width:.1} wide)");
}
