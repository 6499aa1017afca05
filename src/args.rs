use std::path::PathBuf;

use clap::Parser;

use crate::{
    aggregate::Dimension,
    filter::FilterSelection,
    replay::{Difficulty, Race},
};

/// Statistics for StarCraft II co-op replays.
///
/// Without --report or --export the dashboard is started.
#[derive(Parser, Debug, Default)]
#[command(name = "coop-replays", version)]
pub struct Args {
    /// Replay directory; overrides the saved one
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Print an aggregate table and exit
    #[arg(long, value_enum, value_name = "DIMENSION")]
    pub report: Option<Dimension>,

    /// Write the filtered games as CSV and exit
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Only games with this player (defaults to the most frequent player)
    #[arg(long)]
    pub player: Option<String>,

    /// Drop the default player filter
    #[arg(long, conflicts_with = "player")]
    pub any_player: bool,

    #[arg(long)]
    pub commander: Option<String>,

    #[arg(long)]
    pub map: Option<String>,

    /// Casual, Normal, Hard, Brutal or Brutal+1 to Brutal+6
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Enemy race
    #[arg(long)]
    pub race: Option<Race>,

    #[arg(long)]
    pub year: Option<i32>,

    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Preferences file; defaults to the platform config directory
    #[arg(long, value_name = "FILE")]
    pub preferences: Option<PathBuf>,
}

impl Args {
    /// Whether the run prints or writes something instead of opening the
    /// dashboard.
    pub fn is_headless(&self) -> bool {
        self.report.is_some() || self.export.is_some()
    }

    /// Layers the command-line filters over `selection`.
    pub fn apply_filters(&self, selection: &mut FilterSelection) {
        if self.any_player {
            selection.player = None;
        }
        if let Some(player) = &self.player {
            selection.player = Some(player.clone());
        }
        if let Some(commander) = &self.commander {
            selection.commander = Some(commander.clone());
        }
        if let Some(map) = &self.map {
            selection.map = Some(map.clone());
        }
        if self.difficulty.is_some() {
            selection.difficulty = self.difficulty;
        }
        if self.race.is_some() {
            selection.race = self.race;
        }
        if self.year.is_some() {
            selection.year = self.year;
        }
        if self.month.is_some() {
            selection.month = self.month;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headless_report() {
        let args = Args::try_parse_from([
            "coop-replays",
            "--dir",
            "/replays",
            "--report",
            "commander",
            "--difficulty",
            "brutal+3",
            "--race",
            "zerg",
        ])
        .unwrap();

        assert!(args.is_headless());
        assert_eq!(args.report, Some(Dimension::Commander));
        assert_eq!(args.difficulty, Some(Difficulty::BrutalPlus(3)));
        assert_eq!(args.race, Some(Race::Zerg));
    }

    #[test]
    fn test_no_flags_starts_dashboard() {
        let args = Args::try_parse_from(["coop-replays"]).unwrap();
        assert!(!args.is_headless());
    }

    #[test]
    fn test_month_out_of_range() {
        assert!(Args::try_parse_from(["coop-replays", "--month", "13"]).is_err());
    }

    #[test]
    fn test_apply_filters_overrides() {
        let args = Args::try_parse_from(["coop-replays", "--any-player", "--map", "Void Launch"]).unwrap();
        let mut selection = FilterSelection {
            player: Some("Alice".to_string()),
            commander: Some("Raynor".to_string()),
            ..Default::default()
        };

        args.apply_filters(&mut selection);

        assert_eq!(selection.player, None);
        assert_eq!(selection.commander.as_deref(), Some("Raynor"));
        assert_eq!(selection.map.as_deref(), Some("Void Launch"));
    }
}
