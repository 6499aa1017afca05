//! Narrowing the index down to the games the user asked about.

use std::collections::{BTreeSet, HashMap};

use chrono::Datelike;

use crate::replay::{Difficulty, Outcome, Race, ReplayRecord};

/// Active filter values. `None` means the dimension is not filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub player: Option<String>,
    pub commander: Option<String>,
    pub map: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// Enemy race.
    pub race: Option<Race>,
    pub year: Option<i32>,
    /// Calendar month, 1-12.
    pub month: Option<u32>,
    pub mutation: Option<bool>,
    pub outcome: Option<Outcome>,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether a single record passes every active dimension.
    pub fn matches(&self, record: &ReplayRecord) -> bool {
        if let Some(map) = &self.map
            && &record.map != map
        {
            return false;
        }

        if let Some(difficulty) = self.difficulty
            && record.difficulty != difficulty
        {
            return false;
        }

        if let Some(race) = self.race
            && record.enemy_race != race
        {
            return false;
        }

        if let Some(year) = self.year
            && record.started_at.year() != year
        {
            return false;
        }

        if let Some(month) = self.month
            && record.started_at.month() != month
        {
            return false;
        }

        if let Some(mutation) = self.mutation
            && record.mutation != mutation
        {
            return false;
        }

        if let Some(outcome) = self.outcome
            && record.outcome != outcome
        {
            return false;
        }

        match (&self.player, &self.commander) {
            (Some(player), Some(commander)) => record
                .player(player)
                .is_some_and(|p| &p.commander == commander),
            (Some(player), None) => record.has_player(player),
            (None, Some(commander)) => record.players.iter().any(|p| &p.commander == commander),
            (None, None) => true,
        }
    }
}

/// Records passing every active filter, in input order.
pub fn apply<'a>(records: &'a [ReplayRecord], selection: &FilterSelection) -> Vec<&'a ReplayRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}

/// Number of games each player appears in.
fn player_counts(records: &[ReplayRecord]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in records {
        let names: BTreeSet<String> = record.players.iter().map(|p| p.display_name()).collect();
        for name in names {
            *counts.entry(name).or_insert(0) += 1;
        }
    }

    counts
}

fn casefold_cmp(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Players with more than one saved game, sorted case-insensitively.
pub fn player_candidates(records: &[ReplayRecord]) -> Vec<String> {
    let mut names: Vec<String> = player_counts(records)
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect();

    names.sort_by(|a, b| casefold_cmp(a, b));
    names
}

/// The candidate with the most games; ties go to the alphabetically first.
pub fn default_player(records: &[ReplayRecord]) -> Option<String> {
    player_counts(records)
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .min_by(|(a_name, a_count), (b_name, b_count)| {
            b_count.cmp(a_count).then_with(|| casefold_cmp(a_name, b_name))
        })
        .map(|(name, _)| name)
}

/// Commanders the given player has played, or all commanders.
pub fn commander_candidates(records: &[ReplayRecord], player: Option<&str>) -> Vec<String> {
    let commanders: BTreeSet<String> = records
        .iter()
        .flat_map(|r| r.players.iter())
        .filter(|p| player.is_none_or(|name| p.display_name() == name))
        .map(|p| p.commander.clone())
        .collect();

    commanders.into_iter().collect()
}

pub fn map_candidates(records: &[ReplayRecord]) -> Vec<String> {
    let maps: BTreeSet<String> = records.iter().map(|r| r.map.clone()).collect();
    maps.into_iter().collect()
}

/// Years with at least one game, oldest first.
pub fn year_candidates(records: &[ReplayRecord]) -> Vec<i32> {
    let years: BTreeSet<i32> = records.iter().map(|r| r.started_at.year()).collect();
    years.into_iter().collect()
}

/// Months (1-12) with at least one game.
pub fn month_candidates(records: &[ReplayRecord]) -> Vec<u32> {
    let months: BTreeSet<u32> = records.iter().map(|r| r.started_at.month()).collect();
    months.into_iter().collect()
}
