//! Explicit state for one run of the tool: preferences, the replay index,
//! accumulated errors and the active filters.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::{
    config::Preferences,
    error::IndexError,
    export,
    filter::{self, FilterSelection},
    index::{ReplayIndex, ScanReport},
    parser::{JsonReplayParser, ReplayParser},
    replay::ReplayRecord,
};

/// A failure shown in the error list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    pub path: PathBuf,
    pub message: String,
    pub at: DateTime<Local>,
}

pub struct Session {
    preferences: Preferences,
    preferences_path: Option<PathBuf>,
    parser: Box<dyn ReplayParser>,
    index: ReplayIndex,
    errors: Vec<ErrorEntry>,
    pub selection: FilterSelection,
}

impl Session {
    /// Opens a session from the preferences file at `preferences_path`.
    /// Without a path nothing is persisted.
    pub fn open(preferences_path: Option<PathBuf>) -> Self {
        let preferences = preferences_path
            .as_deref()
            .map(Preferences::load_or_default)
            .unwrap_or_default();

        Self::with_parser(preferences, preferences_path, Box::new(JsonReplayParser))
    }

    pub fn with_parser(
        preferences: Preferences,
        preferences_path: Option<PathBuf>,
        parser: Box<dyn ReplayParser>,
    ) -> Self {
        let index = ReplayIndex::new(preferences.extension.clone());

        Self {
            preferences,
            preferences_path,
            parser,
            index,
            errors: Vec::new(),
            selection: FilterSelection::default(),
        }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn directory(&self) -> Option<&Path> {
        self.preferences.directory.as_deref()
    }

    pub fn records(&self) -> &[ReplayRecord] {
        self.index.records()
    }

    pub fn get(&self, path: &Path) -> Option<&ReplayRecord> {
        self.index.get(path)
    }

    pub fn errors(&self) -> &[ErrorEntry] {
        &self.errors
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn push_error(&mut self, path: impl Into<PathBuf>, message: impl Into<String>) {
        self.errors.push(ErrorEntry {
            path: path.into(),
            message: message.into(),
            at: Local::now(),
        });
    }

    /// Scans a newly chosen directory. The active filters are reset and the
    /// player filter defaults to the most frequent player.
    pub fn select_directory(&mut self, directory: &Path) -> Result<ScanReport, IndexError> {
        let report = self.scan(directory)?;

        self.preferences.directory = Some(directory.to_path_buf());
        self.selection = FilterSelection {
            player: filter::default_player(self.index.records()),
            ..Default::default()
        };

        Ok(report)
    }

    /// Rescans the current directory, keeping the active filters. The first
    /// load of a saved directory defaults the player like `select_directory`.
    pub fn reload(&mut self) -> Result<ScanReport, IndexError> {
        let Some(directory) = self.preferences.directory.clone() else {
            return Ok(ScanReport::default());
        };

        let first_load = self.index.directory() != Some(directory.as_path());
        let report = self.scan(&directory)?;

        if first_load && self.selection.player.is_none() {
            self.selection.player = filter::default_player(self.index.records());
        }

        // A filter value may have vanished with a deleted file.
        if let Some(player) = &self.selection.player
            && !self.index.records().iter().any(|r| r.has_player(player))
        {
            self.selection.player = filter::default_player(self.index.records());
        }

        Ok(report)
    }

    fn scan(&mut self, directory: &Path) -> Result<ScanReport, IndexError> {
        match self.index.scan(directory, self.parser.as_ref()) {
            Ok(report) => {
                for error in &report.errors {
                    self.push_error(error.path().clone(), error.to_string());
                }
                Ok(report)
            }
            Err(e) => {
                self.push_error(e.path().clone(), e.to_string());
                Err(e)
            }
        }
    }

    /// Records passing the active filters.
    pub fn filtered(&self) -> Vec<&ReplayRecord> {
        filter::apply(self.index.records(), &self.selection)
    }

    /// Deletes a replay from disk and from the index. Callers are expected to
    /// have confirmed with the user.
    pub fn delete(&mut self, path: &Path) -> Result<ReplayRecord, IndexError> {
        self.index.delete(path).inspect_err(|e| {
            self.errors.push(ErrorEntry {
                path: e.path().clone(),
                message: e.to_string(),
                at: Local::now(),
            });
        })
    }

    pub fn export(&mut self, path: &Path) -> anyhow::Result<usize> {
        let result = export::export_csv(path, &self.filtered(), self.selection.player.as_deref());

        if let Err(e) = &result {
            self.push_error(path, format!("{:#}", e));
        }

        result
    }

    /// Writes preferences back to disk.
    pub fn close(&self) {
        let Some(path) = &self.preferences_path else {
            return;
        };

        match self.preferences.save(path) {
            Ok(()) => info!("Saved preferences to {}", path.display()),
            Err(e) => warn!("{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::replay::fixtures::{player, record};
    use std::fs;
    use tempfile::tempdir;

    /// Treats every file as a game; files containing "bad" fail to parse.
    struct FakeParser;

    impl ReplayParser for FakeParser {
        fn parse(&self, path: &Path) -> Result<ReplayRecord, ParseError> {
            let text = fs::read_to_string(path).map_err(|e| ParseError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;

            if text.contains("bad") {
                return Err(ParseError::Invalid {
                    path: path.to_path_buf(),
                    reason: "bad".to_string(),
                });
            }

            let names: Vec<&str> = text.split_whitespace().collect();
            let players = names.iter().map(|n| player(n, "Raynor")).collect();
            let mut record = record(&path.to_string_lossy(), players, 300);
            record.modified = fs::metadata(path).and_then(|m| m.modified()).ok();
            Ok(record)
        }
    }

    fn session() -> Session {
        let preferences = Preferences {
            directory: None,
            extension: "rep".to_string(),
        };
        Session::with_parser(preferences, None, Box::new(FakeParser))
    }

    /// Session backed by a preferences file, as `Session::open` builds it.
    fn session_at(prefs_path: &Path) -> Session {
        let mut preferences = Preferences::load_or_default(prefs_path);
        preferences.extension = "rep".to_string();
        Session::with_parser(preferences, Some(prefs_path.to_path_buf()), Box::new(FakeParser))
    }

    #[test]
    fn test_select_directory_defaults_player() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.rep"), "Alice Bob").unwrap();
        fs::write(dir.path().join("b.rep"), "Alice Carol").unwrap();
        fs::write(dir.path().join("c.rep"), "bad").unwrap();

        let mut session = session();
        let report = session.select_directory(dir.path()).unwrap();

        assert_eq!(report.added, 2);
        assert_eq!(session.records().len(), 2);
        assert_eq!(session.errors().len(), 1);
        assert_eq!(session.errors()[0].path, dir.path().join("c.rep"));
        assert_eq!(session.selection.player.as_deref(), Some("Alice"));
        assert_eq!(session.directory(), Some(dir.path()));
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let dir = tempdir().unwrap();
        let mut session = session();

        let missing = dir.path().join("gone");
        assert!(session.select_directory(&missing).is_err());

        assert_eq!(session.errors().len(), 1);
        assert!(session.records().is_empty());
        assert_eq!(session.directory(), None);
    }

    #[test]
    fn test_delete_then_reload() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.rep");
        fs::write(&a, "Alice Bob").unwrap();
        fs::write(dir.path().join("b.rep"), "Alice Bob").unwrap();

        let mut session = session();
        session.select_directory(dir.path()).unwrap();
        session.delete(&a).unwrap();

        assert!(!a.exists());
        session.reload().unwrap();
        assert_eq!(session.records().len(), 1);
        assert!(session.records().iter().all(|r| r.path != a));
    }

    #[test]
    fn test_failed_delete_is_reported() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.rep");
        fs::write(&a, "Alice").unwrap();

        let mut session = session();
        session.select_directory(dir.path()).unwrap();
        fs::remove_file(&a).unwrap();

        assert!(session.delete(&a).is_err());
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.errors().len(), 1);
    }

    #[test]
    fn test_reload_without_directory_is_noop() {
        let mut session = session();
        let report = session.reload().unwrap();
        assert_eq!(report.added, 0);
    }

    #[test]
    fn test_close_persists_directory() {
        let dir = tempdir().unwrap();
        let prefs_path = dir.path().join("prefs.json");
        let replays = dir.path().join("replays");
        fs::create_dir(&replays).unwrap();

        let mut session = Session::open(Some(prefs_path.clone()));
        session.select_directory(&replays).unwrap();
        session.close();

        let reopened = Session::open(Some(prefs_path));
        assert_eq!(reopened.directory(), Some(replays.as_path()));
    }

    #[test]
    fn test_reload_saved_directory_defaults_player() {
        let dir = tempdir().unwrap();
        let prefs_path = dir.path().join("prefs.json");
        let replays = dir.path().join("replays");
        fs::create_dir(&replays).unwrap();
        fs::write(replays.join("a.rep"), "Alice Bob").unwrap();
        fs::write(replays.join("b.rep"), "Alice Carol").unwrap();

        let mut session = session_at(&prefs_path);
        session.select_directory(&replays).unwrap();
        session.close();

        let mut reopened = session_at(&prefs_path);
        assert_eq!(reopened.selection.player, None);

        reopened.reload().unwrap();
        assert_eq!(reopened.records().len(), 2);
        assert_eq!(reopened.selection.player.as_deref(), Some("Alice"));

        // A filter cleared by the user stays cleared on later reloads.
        reopened.selection.player = None;
        reopened.reload().unwrap();
        assert_eq!(reopened.selection.player, None);
    }

    #[test]
    fn test_filtered_follows_selection() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.rep"), "Alice Bob").unwrap();
        fs::write(dir.path().join("b.rep"), "Alice Bob").unwrap();
        fs::write(dir.path().join("c.rep"), "Carol").unwrap();

        let mut session = session();
        session.select_directory(dir.path()).unwrap();
        assert_eq!(session.filtered().len(), 2);

        session.selection = FilterSelection::default();
        assert_eq!(session.filtered().len(), 3);
    }

    #[test]
    fn test_export_failure_is_reported() {
        let dir = tempdir().unwrap();
        let mut session = session();

        assert!(session.export(&dir.path().join("no/such/dir.csv")).is_err());
        assert_eq!(session.errors().len(), 1);
    }
}
