//! Replay records as held by the index.

use std::path::PathBuf;
use std::time::SystemTime;

use chrono::NaiveDateTime;
use strum::{Display, EnumIter, EnumString};

use crate::format::format_name;

/// Games shorter than this are left out of every statistic.
pub const MINIMUM_LENGTH: u64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Race {
    Terran,
    Zerg,
    Protoss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Victory,
    Defeat,
}

impl Outcome {
    pub fn is_victory(self) -> bool {
        matches!(self, Outcome::Victory)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Outcome::Victory => "Victory",
            Outcome::Defeat => "Defeat",
        };
        write!(f, "{}", s)
    }
}

/// Enemy AI difficulty. Brutal+ levels carry their rank (1-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Casual,
    Normal,
    Hard,
    Brutal,
    BrutalPlus(u8),
}

impl Difficulty {
    pub const MAX_BRUTAL_PLUS: u8 = 6;
    pub const COUNT: usize = 4 + Self::MAX_BRUTAL_PLUS as usize;

    /// Builds a difficulty from the raw slot values stored in a replay.
    pub fn from_raw(level: u8, brutal_plus: u8) -> Option<Self> {
        match (level, brutal_plus) {
            (1, _) => Some(Difficulty::Casual),
            (2, _) => Some(Difficulty::Normal),
            (3, _) => Some(Difficulty::Hard),
            (4, 0) => Some(Difficulty::Brutal),
            (4, n) if n <= Self::MAX_BRUTAL_PLUS => Some(Difficulty::BrutalPlus(n)),
            _ => None,
        }
    }

    /// Position in [`Difficulty::all`], used for per-difficulty buckets.
    pub fn index(self) -> usize {
        match self {
            Difficulty::Casual => 0,
            Difficulty::Normal => 1,
            Difficulty::Hard => 2,
            Difficulty::Brutal => 3,
            Difficulty::BrutalPlus(n) => 3 + n as usize,
        }
    }

    pub fn all() -> Vec<Difficulty> {
        let mut all = vec![
            Difficulty::Casual,
            Difficulty::Normal,
            Difficulty::Hard,
            Difficulty::Brutal,
        ];
        all.extend((1..=Self::MAX_BRUTAL_PLUS).map(Difficulty::BrutalPlus));
        all
    }

    pub fn is_brutal_plus(self) -> bool {
        matches!(self, Difficulty::BrutalPlus(_))
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Casual => write!(f, "Casual"),
            Difficulty::Normal => write!(f, "Normal"),
            Difficulty::Hard => write!(f, "Hard"),
            Difficulty::Brutal => write!(f, "Brutal"),
            Difficulty::BrutalPlus(n) => write!(f, "Brutal+{}", n),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::all()
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown difficulty: {}", s))
    }
}

/// One human player in a co-op game.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerEntry {
    pub name: String,
    pub commander: String,
    pub race: Race,
    pub apm: u32,
    pub level: u32,
    pub mastery_level: u32,
    pub prestige: u8,
    pub difficulty: Difficulty,
    /// Points spent in each of the six mastery slots.
    pub masteries: [u32; 6],
}

impl PlayerEntry {
    /// Name with the replay's markup escapes decoded.
    pub fn display_name(&self) -> String {
        format_name(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub seconds: u64,
    pub sender: String,
    pub text: String,
}

/// A single parsed co-op game.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayRecord {
    pub path: PathBuf,
    pub modified: Option<SystemTime>,
    pub started_at: NaiveDateTime,
    pub duration_secs: u64,
    pub map: String,
    pub difficulty: Difficulty,
    pub mutation: bool,
    pub outcome: Outcome,
    pub enemy_race: Race,
    pub version: String,
    pub region: String,
    pub speed: String,
    pub players: Vec<PlayerEntry>,
    pub messages: Vec<ChatMessage>,
}

impl ReplayRecord {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Whether this game is long enough to count toward statistics.
    pub fn is_eligible(&self) -> bool {
        self.duration_secs >= MINIMUM_LENGTH
    }

    /// The entry for the given player name, compared after decoding.
    pub fn player(&self, name: &str) -> Option<&PlayerEntry> {
        self.players.iter().find(|p| p.display_name() == name)
    }

    pub fn has_player(&self, name: &str) -> bool {
        self.player(name).is_some()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_from_raw() {
        assert_eq!(Difficulty::from_raw(1, 0), Some(Difficulty::Casual));
        assert_eq!(Difficulty::from_raw(4, 0), Some(Difficulty::Brutal));
        assert_eq!(Difficulty::from_raw(4, 3), Some(Difficulty::BrutalPlus(3)));
        assert_eq!(Difficulty::from_raw(4, 7), None);
        assert_eq!(Difficulty::from_raw(0, 0), None);
    }

    #[test]
    fn test_difficulty_index_matches_all() {
        for (i, d) in Difficulty::all().into_iter().enumerate() {
            assert_eq!(d.index(), i);
        }
        assert_eq!(Difficulty::all().len(), Difficulty::COUNT);
    }

    #[test]
    fn test_difficulty_parse_roundtrip_labels() {
        assert_eq!("brutal+2".parse::<Difficulty>(), Ok(Difficulty::BrutalPlus(2)));
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("Impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_eligibility_threshold() {
        let short = fixtures::record("a", vec![], MINIMUM_LENGTH - 1);
        let exact = fixtures::record("b", vec![], MINIMUM_LENGTH);
        assert!(!short.is_eligible());
        assert!(exact.is_eligible());
    }

    #[test]
    fn test_player_lookup_decodes_names() {
        let record = fixtures::record(
            "a",
            vec![fixtures::player("&lt;Clan&gt;<sp/>Bob", "Raynor")],
            300,
        );
        assert!(record.has_player("<Clan> Bob"));
        assert!(!record.has_player("Bob"));
    }
}
