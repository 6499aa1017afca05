//! In-memory index of the replays in one directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    error::{IndexError, ParseError},
    parser::ReplayParser,
    replay::ReplayRecord,
};

pub const DEFAULT_EXTENSION: &str = "SC2Replay.json";

/// What a scan changed.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub added: usize,
    pub removed: usize,
    pub skipped: usize,
    pub errors: Vec<ParseError>,
}

pub struct ReplayIndex {
    directory: Option<PathBuf>,
    extension: String,
    records: Vec<ReplayRecord>,
}

impl ReplayIndex {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            directory: None,
            extension: extension.into(),
            records: Vec::new(),
        }
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Records, most recent game first.
    pub fn records(&self) -> &[ReplayRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, path: &Path) -> Option<&ReplayRecord> {
        self.records.iter().find(|r| r.path == path)
    }

    /// Scans `directory`. Rescanning the current directory only re-reads
    /// files that are new or whose modification time changed.
    pub fn scan(
        &mut self,
        directory: &Path,
        parser: &dyn ReplayParser,
    ) -> Result<ScanReport, IndexError> {
        if !directory.is_dir() {
            return Err(IndexError::MissingDirectory {
                path: directory.to_path_buf(),
            });
        }

        let files = self.list_files(directory)?;
        let mut report = ScanReport::default();

        let incremental = self.directory.as_deref() == Some(directory) && !self.records.is_empty();
        let to_parse: Vec<PathBuf> = if incremental {
            let present: HashSet<&PathBuf> = files.iter().collect();
            let before = self.records.len();

            self.records
                .retain(|r| present.contains(&r.path) && !is_stale(r));
            report.removed = before - self.records.len();

            let kept: HashSet<PathBuf> = self.records.iter().map(|r| r.path.clone()).collect();
            files.into_iter().filter(|f| !kept.contains(f)).collect()
        } else {
            self.directory = Some(directory.to_path_buf());
            report.removed = self.records.len();
            self.records.clear();
            files
        };

        debug!("Parsing {} file(s) in {}", to_parse.len(), directory.display());

        for path in to_parse {
            match parser.parse(&path) {
                Ok(record) => {
                    self.records.push(record);
                    report.added += 1;
                }
                Err(ParseError::NotCoop { path }) => {
                    debug!("Skipping non co-op replay {}", path.display());
                    report.skipped += 1;
                }
                Err(e) => {
                    warn!("{}", e);
                    report.errors.push(e);
                }
            }
        }

        self.records
            .sort_by(|a, b| b.started_at.cmp(&a.started_at).then_with(|| a.path.cmp(&b.path)));

        // A re-parsed file replaces its stale entry, so paths stay unique.
        let mut seen = HashSet::new();
        self.records.retain(|r| seen.insert(r.path.clone()));

        info!(
            "Scanned {}: {} added, {} removed, {} skipped, {} error(s)",
            directory.display(),
            report.added,
            report.removed,
            report.skipped,
            report.errors.len()
        );

        Ok(report)
    }

    /// Deletes the replay file, then drops its entry. The entry stays if the
    /// file could not be removed.
    pub fn delete(&mut self, path: &Path) -> Result<ReplayRecord, IndexError> {
        let position = self
            .records
            .iter()
            .position(|r| r.path == path)
            .ok_or_else(|| IndexError::UnknownReplay {
                path: path.to_path_buf(),
            })?;

        fs::remove_file(path).map_err(|e| IndexError::Delete {
            path: path.to_path_buf(),
            source: e,
        })?;

        info!("Deleted replay {}", path.display());
        Ok(self.records.remove(position))
    }

    fn list_files(&self, directory: &Path) -> Result<Vec<PathBuf>, IndexError> {
        let entries = fs::read_dir(directory).map_err(|e| IndexError::ReadDirectory {
            path: directory.to_path_buf(),
            source: e,
        })?;

        let mut files: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && self.matches_extension(path))
            .collect();

        files.sort();
        Ok(files)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(&format!(".{}", self.extension)))
            .unwrap_or(false)
    }
}

fn is_stale(record: &ReplayRecord) -> bool {
    let current = fs::metadata(&record.path).and_then(|m| m.modified()).ok();
    current != record.modified
}
