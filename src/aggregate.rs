//! Counts, percentages and averages over a filtered set of games.
//!
//! Every function here drops games shorter than
//! [`MINIMUM_LENGTH`](crate::replay::MINIMUM_LENGTH) before
//! counting, whatever the caller's filters are.

use std::collections::HashMap;

use chrono::{Datelike, Timelike};
use strum::{Display, EnumIter, EnumString};

use crate::replay::{Difficulty, Race, ReplayRecord};

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[derive(clap::ValueEnum)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Dimension {
    Commander,
    Map,
    Difficulty,
    Weekday,
    Hour,
    Month,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub key: String,
    pub count: usize,
    /// Share of the eligible total, 0-100.
    pub percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateResult {
    pub rows: Vec<AggregateRow>,
    pub total: usize,
}

impl AggregateResult {
    pub fn get(&self, key: &str) -> Option<&AggregateRow> {
        self.rows.iter().find(|row| row.key == key)
    }
}

fn eligible<'a>(records: &[&'a ReplayRecord]) -> impl Iterator<Item = &'a ReplayRecord> {
    records.iter().copied().filter(|r| r.is_eligible())
}

fn hour_label(hour: u32) -> String {
    match hour {
        0 => "Midnight".to_string(),
        12 => "Noon".to_string(),
        1..=11 => format!("{:02} AM", hour),
        _ => format!("{:02} PM", hour - 12),
    }
}

/// Groups eligible games by `dimension`.
///
/// For [`Dimension::Commander`] the entry of `player` is counted; without a
/// player every entry in the game is counted. Rows are ordered by count,
/// largest first, then by key.
pub fn aggregate(
    records: &[&ReplayRecord],
    dimension: Dimension,
    player: Option<&str>,
) -> AggregateResult {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in eligible(records) {
        let keys: Vec<String> = match dimension {
            Dimension::Commander => match player {
                Some(name) => record
                    .player(name)
                    .map(|p| vec![p.commander.clone()])
                    .unwrap_or_default(),
                None => record.players.iter().map(|p| p.commander.clone()).collect(),
            },
            Dimension::Map => vec![record.map.clone()],
            Dimension::Difficulty => vec![record.difficulty.to_string()],
            Dimension::Weekday => {
                let day = record.started_at.weekday().num_days_from_monday() as usize;
                vec![WEEKDAYS[day].to_string()]
            }
            Dimension::Hour => vec![hour_label(record.started_at.hour())],
            Dimension::Month => {
                let month = record.started_at.month0() as usize;
                vec![MONTHS[month].to_string()]
            }
        };

        for key in keys {
            *counts.entry(key).or_insert(0) += 1;
        }
    }

    let total: usize = counts.values().sum();

    let mut rows: Vec<AggregateRow> = counts
        .into_iter()
        .map(|(key, count)| AggregateRow {
            percent: count as f64 / total as f64 * 100.0,
            key,
            count,
        })
        .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));

    AggregateResult { rows, total }
}

/// Games and wins in one difficulty bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinLoss {
    pub games: usize,
    pub wins: usize,
}

impl WinLoss {
    pub fn losses(&self) -> usize {
        self.games - self.wins
    }

    pub fn win_rate(&self) -> Option<f64> {
        (self.games > 0).then(|| self.wins as f64 / self.games as f64 * 100.0)
    }

    fn record(&mut self, victory: bool) {
        self.games += 1;
        if victory {
            self.wins += 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinRateReport {
    /// Indexed by [`Difficulty::index`].
    pub regular: Vec<WinLoss>,
    pub mutation: Vec<WinLoss>,
    /// Totals within the difficulty/race selection.
    pub regular_total: WinLoss,
    pub mutation_total: WinLoss,
}

/// Win/loss counts split into regular and mutation games.
///
/// The per-difficulty buckets honour only the race filter; the totals honour
/// both the race and the difficulty filter.
pub fn win_rates(
    records: &[&ReplayRecord],
    difficulty: Option<Difficulty>,
    race: Option<Race>,
) -> WinRateReport {
    let mut report = WinRateReport {
        regular: vec![WinLoss::default(); Difficulty::COUNT],
        mutation: vec![WinLoss::default(); Difficulty::COUNT],
        regular_total: WinLoss::default(),
        mutation_total: WinLoss::default(),
    };

    for record in eligible(records) {
        if race.is_some_and(|race| record.enemy_race != race) {
            continue;
        }

        let victory = record.outcome.is_victory();
        let bucket = record.difficulty.index();

        let (per_difficulty, total) = if record.mutation {
            (&mut report.mutation, &mut report.mutation_total)
        } else {
            (&mut report.regular, &mut report.regular_total)
        };

        per_difficulty[bucket].record(victory);

        if difficulty.is_none_or(|d| d == record.difficulty) {
            total.record(victory);
        }
    }

    report
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeReport {
    /// Games per calendar month; only the year filter applies.
    pub months: [usize; 12],
    /// Games per ISO weekday, Monday first.
    pub weekdays: [usize; 7],
    pub hours: [usize; 24],
    pub games: usize,
    pub time_played: u64,
    pub average: u64,
    pub fastest_win: Option<u64>,
    pub longest_win: Option<u64>,
    pub fastest_loss: Option<u64>,
    pub longest_loss: Option<u64>,
}

pub fn time_report(records: &[&ReplayRecord], year: Option<i32>, month: Option<u32>) -> TimeReport {
    let mut report = TimeReport {
        months: [0; 12],
        weekdays: [0; 7],
        hours: [0; 24],
        games: 0,
        time_played: 0,
        average: 0,
        fastest_win: None,
        longest_win: None,
        fastest_loss: None,
        longest_loss: None,
    };

    for record in eligible(records) {
        let started = record.started_at;

        if year.is_some_and(|y| started.year() != y) {
            continue;
        }

        report.months[started.month0() as usize] += 1;

        if month.is_some_and(|m| started.month() != m) {
            continue;
        }

        report.weekdays[started.weekday().num_days_from_monday() as usize] += 1;
        report.hours[started.hour() as usize] += 1;

        let length = record.duration_secs;
        report.games += 1;
        report.time_played += length;

        let (fastest, longest) = if record.outcome.is_victory() {
            (&mut report.fastest_win, &mut report.longest_win)
        } else {
            (&mut report.fastest_loss, &mut report.longest_loss)
        };

        *fastest = Some(fastest.map_or(length, |f| f.min(length)));
        *longest = Some(longest.map_or(length, |l| l.max(length)));
    }

    if report.games > 0 {
        report.average = report.time_played / report.games as u64;
    }

    report
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApmRow {
    pub commander: String,
    pub games: usize,
    pub average: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApmReport {
    /// Highest average first.
    pub rows: Vec<ApmRow>,
    pub mean: f64,
}

/// Average APM per commander for `player`, or for every entry.
pub fn apm_report(records: &[&ReplayRecord], player: Option<&str>) -> ApmReport {
    let mut sums: HashMap<String, (u64, usize)> = HashMap::new();

    for record in eligible(records) {
        let entries: Vec<_> = match player {
            Some(name) => record.player(name).into_iter().collect(),
            None => record.players.iter().collect(),
        };

        for entry in entries {
            let sum = sums.entry(entry.commander.clone()).or_insert((0, 0));
            sum.0 += entry.apm as u64;
            sum.1 += 1;
        }
    }

    let (apm_total, games_total) = sums
        .values()
        .fold((0u64, 0usize), |acc, (apm, games)| (acc.0 + apm, acc.1 + games));

    let mut rows: Vec<ApmRow> = sums
        .into_iter()
        .map(|(commander, (apm, games))| ApmRow {
            commander,
            games,
            average: (apm / games as u64) as u32,
        })
        .collect();

    rows.sort_by(|a, b| b.average.cmp(&a.average).then_with(|| a.commander.cmp(&b.commander)));

    ApmReport {
        rows,
        mean: if games_total > 0 {
            apm_total as f64 / games_total as f64
        } else {
            0.0
        },
    }
}
