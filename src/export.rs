//! CSV export of a filtered set of games.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    format::{format_boolean, format_date, format_prestige, format_time},
    replay::ReplayRecord,
};

pub const HEADER: [&str; 12] = [
    "id",
    "map",
    "date",
    "duration",
    "player",
    "commander",
    "level",
    "mastery_level",
    "prestige",
    "difficulty",
    "victory",
    "mutators",
];

/// One row per game, using the focused player's entry (the first entry when
/// no player is focused). Games without that player produce no row.
pub fn write_csv<W: Write>(
    out: &mut W,
    records: &[&ReplayRecord],
    player: Option<&str>,
) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(HEADER)?;

    let mut rows = 0;
    for record in records {
        let entry = match player {
            Some(name) => record.player(name),
            None => record.players.first(),
        };
        let Some(entry) = entry else {
            continue;
        };

        wtr.write_record(&[
            rows.to_string(),
            record.map.clone(),
            format_date(&record.started_at),
            format_time(record.duration_secs),
            entry.display_name(),
            entry.commander.clone(),
            entry.level.to_string(),
            entry.mastery_level.to_string(),
            format_prestige(&entry.commander, entry.prestige),
            entry.difficulty.to_string(),
            format_boolean(record.outcome.is_victory()).to_string(),
            format_boolean(record.mutation).to_string(),
        ])?;
        rows += 1;
    }

    wtr.flush()?;
    Ok(rows)
}

pub fn export_csv(path: &Path, records: &[&ReplayRecord], player: Option<&str>) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Could not write the file {}", path.display()))?;
    let mut out = BufWriter::new(file);

    let rows = write_csv(&mut out, records, player)?;
    out.flush()?;

    info!("Exported {} game(s) to {}", rows, path.display());
    Ok(rows)
}
