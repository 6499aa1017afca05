//! Replay decoding seam.
//!
//! The index never decodes replays itself; it hands each file to a
//! [`ReplayParser`]. [`JsonReplayParser`] reads the JSON summary a replay
//! decoder writes for each game (players, slot data, metadata and chat).

use std::fs;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDateTime};
use serde::Deserialize;

use crate::{
    error::ParseError,
    replay::{ChatMessage, Difficulty, Outcome, PlayerEntry, Race, ReplayRecord},
};

/// Game loops per real-time second at Faster speed.
pub const GAME_LOOPS_PER_SECOND: u64 = 16;

pub trait ReplayParser {
    fn parse(&self, path: &Path) -> Result<ReplayRecord, ParseError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReplayParser;

#[derive(Debug, Deserialize)]
struct RawReplay {
    map: String,
    /// Unix timestamp of the game start.
    timestamp: i64,
    game_loops: u64,
    #[serde(default)]
    version: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    speed: String,
    #[serde(default)]
    has_extension_mod: bool,
    players: Vec<RawPlayer>,
    #[serde(default)]
    messages: Vec<RawMessage>,
}

#[derive(Debug, Deserialize)]
struct RawPlayer {
    name: String,
    #[serde(default)]
    commander: String,
    race: String,
    #[serde(default)]
    result: String,
    #[serde(default)]
    apm: f64,
    #[serde(default)]
    level: u32,
    #[serde(default)]
    mastery_level: Option<u32>,
    #[serde(default)]
    prestige: Option<u8>,
    #[serde(default)]
    difficulty: u8,
    #[serde(default)]
    brutal_plus: Option<u8>,
    #[serde(default)]
    masteries: Option<Vec<u32>>,
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    game_loop: u64,
    player: usize,
    text: String,
}

impl ReplayParser for JsonReplayParser {
    fn parse(&self, path: &Path) -> Result<ReplayRecord, ParseError> {
        let text = fs::read_to_string(path).map_err(|e| ParseError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let raw: RawReplay = serde_json::from_str(&text).map_err(|e| ParseError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?;

        let modified = fs::metadata(path).and_then(|m| m.modified()).ok();

        build_record(path, raw).map(|mut record| {
            record.modified = modified;
            record
        })
    }
}

fn build_record(path: &Path, raw: RawReplay) -> Result<ReplayRecord, ParseError> {
    let invalid = |reason: String| ParseError::Invalid {
        path: path.to_path_buf(),
        reason,
    };

    // Co-op games have two human slots followed by two AI slots.
    if raw.players.len() < 4
        || raw.players[0].commander.is_empty()
        || raw.players[1].commander.is_empty()
    {
        return Err(ParseError::NotCoop {
            path: path.to_path_buf(),
        });
    }

    let enemy_race = parse_race(&raw.players[2].race).map_err(invalid)?;

    let mut players = Vec::with_capacity(2);
    let mut mutation = raw.has_extension_mod;
    let mut victory = false;

    for n in 0..2 {
        let human = &raw.players[n];
        let enemy = &raw.players[n + 2];

        let brutal_plus = human.brutal_plus.unwrap_or(0);
        let difficulty = Difficulty::from_raw(enemy.difficulty, brutal_plus).ok_or_else(|| {
            invalid(format!(
                "unknown difficulty {} (brutal+ {})",
                enemy.difficulty, brutal_plus
            ))
        })?;

        // Brutal+ games carry random mutators without using an extension mod.
        mutation |= brutal_plus > 0;
        victory |= human.result == "Win";

        let mut masteries = [0u32; 6];
        for (slot, points) in masteries
            .iter_mut()
            .zip(human.masteries.iter().flatten())
        {
            *slot = *points;
        }

        players.push(PlayerEntry {
            name: human.name.clone(),
            commander: human.commander.clone(),
            race: parse_race(&human.race).map_err(invalid)?,
            apm: human.apm.max(0.0) as u32,
            level: human.level,
            mastery_level: human.mastery_level.unwrap_or(0),
            prestige: human.prestige.unwrap_or(0),
            difficulty,
            masteries,
        });
    }

    let difficulty = players
        .iter()
        .map(|p| p.difficulty)
        .max()
        .unwrap_or(Difficulty::Casual);

    let messages = raw
        .messages
        .into_iter()
        .map(|m| ChatMessage {
            seconds: m.game_loop / GAME_LOOPS_PER_SECOND,
            sender: raw
                .players
                .get(m.player)
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            text: m.text,
        })
        .collect();

    Ok(ReplayRecord {
        path: path.to_path_buf(),
        modified: None,
        started_at: local_time(raw.timestamp)
            .ok_or_else(|| invalid(format!("timestamp out of range: {}", raw.timestamp)))?,
        duration_secs: raw.game_loops / GAME_LOOPS_PER_SECOND,
        map: raw.map,
        difficulty,
        mutation,
        outcome: if victory {
            Outcome::Victory
        } else {
            Outcome::Defeat
        },
        enemy_race,
        version: raw.version,
        region: raw.region.to_uppercase(),
        speed: raw.speed,
        players,
        messages,
    })
}

fn parse_race(race: &str) -> Result<Race, String> {
    Race::from_str(race).map_err(|_| format!("unknown race: {}", race))
}

fn local_time(timestamp: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp(timestamp, 0).map(|t| t.with_timezone(&Local).naive_local())
}
