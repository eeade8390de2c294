//! Spoke Quickstart: run a traffic world and print every frame as ASCII.
//!
//! Legend: `#` road, `S` station, `B` bicycle, `P` person, `.` empty.
//! A bicycle or person drawn on a road or station cell hides it.
//!
//! Run with:
//!   cargo run --example quickstart
//!   cargo run --example quickstart -- path/to/config.toml
//!
//! Set `RUST_LOG=debug` to see per-tick engine logs.

use spoke::prelude::*;
use tracing_subscriber::EnvFilter;

// ─── Rendering ──────────────────────────────────────────────────

fn render(snapshot: &Snapshot) -> String {
    let mut cells: Vec<Vec<char>> = snapshot
        .road_mask()
        .rows()
        .map(|row| row.iter().map(|&road| if road { '#' } else { '.' }).collect())
        .collect();

    for station in snapshot.stations() {
        cells[station.y as usize][station.x as usize] = 'S';
    }
    // Persons first so a bicycle sharing the cell stays visible.
    for kind in [AgentKind::Person, AgentKind::Bicycle] {
        let glyph = match kind {
            AgentKind::Person => 'P',
            AgentKind::Bicycle => 'B',
        };
        for (_, coord) in snapshot.positions_of(kind) {
            cells[coord.y as usize][coord.x as usize] = glyph;
        }
    }

    let mut out = format!("t = {}\n", snapshot.time_step());
    for row in cells {
        out.extend(row);
        out.push('\n');
    }
    out
}

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => SimConfig {
            size: 12,
            agents_person: 4,
            agents_bicycle: 3,
            steps: 12,
            ..SimConfig::default()
        },
    };

    println!("=== Spoke Quickstart ===\n");
    println!(
        "Grid: {0}x{0}, {1} persons, {2} bicycles, {3} steps, seed {4}\n",
        config.size, config.agents_person, config.agents_bicycle, config.steps, config.seed
    );

    let mut engine = SimulationEngine::from_config(config)?;
    print!("{}", render(&engine.snapshot()?));

    engine.run_configured(|snapshot| {
        println!();
        print!("{}", render(snapshot));
    })?;

    let last = engine.snapshot()?;
    println!(
        "\nFinished at tick {} (hash {:016x}, {} blocked on the last tick)",
        last.time_step(),
        snapshot_hash(&last),
        engine.last_metrics().blocked
    );
    Ok(())
}
