//! Directory, reload, delete and export actions.

use std::path::PathBuf;

use crate::index::ScanReport;

use super::super::{
    app::App,
    types::{InputPurpose, Overlay},
};

/// Expands a leading `~` to the home directory.
fn expand_path(input: &str) -> PathBuf {
    let input = input.trim();
    if let Some(rest) = input.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches(['/', '\\']));
    }
    PathBuf::from(input)
}

/// Helper struct for actions touching replay files.
pub struct FileHandler<'a> {
    app: &'a mut App,
}

impl<'a> FileHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    fn log_report(&mut self, report: &ScanReport) {
        self.app.log(format!(
            "{} replay(s): {} added, {} removed, {} skipped, {} failed",
            self.app.session.records().len(),
            report.added,
            report.removed,
            report.skipped,
            report.errors.len()
        ));
    }

    pub fn open_input(&mut self, purpose: InputPurpose) {
        self.app.input = match (purpose, self.app.session.directory()) {
            (InputPurpose::Directory, Some(dir)) => dir.display().to_string(),
            (InputPurpose::Export, Some(dir)) => dir.join("replays.csv").display().to_string(),
            (_, None) => String::new(),
        };
        self.app.overlay = Some(Overlay::Input(purpose));
    }

    pub fn submit_input(&mut self, purpose: InputPurpose) {
        let path = expand_path(&self.app.input);
        self.app.overlay = None;
        self.app.input.clear();

        if path.as_os_str().is_empty() {
            return;
        }

        match purpose {
            InputPurpose::Directory => self.select_directory(path),
            InputPurpose::Export => self.export(path),
        }
    }

    pub fn select_directory(&mut self, path: PathBuf) {
        self.app.log(format!("Scanning {}", path.display()));

        match self.app.session.select_directory(&path) {
            Ok(report) => {
                self.app.selected = 0;
                self.log_report(&report);
            }
            Err(e) => self.app.log(e.to_string()),
        }
    }

    pub fn reload(&mut self) {
        if self.app.session.directory().is_none() {
            self.app.log("No directory selected (Ctrl+O)");
            return;
        }

        match self.app.session.reload() {
            Ok(report) => self.log_report(&report),
            Err(e) => self.app.log(e.to_string()),
        }
        self.app.clamp_selection();
    }

    pub fn export(&mut self, path: PathBuf) {
        match self.app.session.export(&path) {
            Ok(rows) => self
                .app
                .log(format!("Exported {} game(s) to {}", rows, path.display())),
            Err(e) => self.app.log(format!("Export failed: {:#}", e)),
        }
    }

    /// Asks for confirmation before deleting the highlighted replay.
    pub fn request_delete(&mut self) {
        if let Some(record) = self.app.selected_record() {
            let path = record.path.clone();
            self.app.overlay = Some(Overlay::ConfirmDelete(path));
        }
    }

    pub fn confirm_delete(&mut self, path: PathBuf) {
        self.app.overlay = None;

        match self.app.session.delete(&path) {
            Ok(record) => self.app.log(format!("Deleted {}", record.file_name())),
            Err(e) => self.app.log(e.to_string()),
        }
        self.app.clamp_selection();
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.app.visible_records().len();
        if len == 0 {
            self.app.selected = 0;
            return;
        }

        let target = self.app.selected as isize + delta;
        self.app.selected = target.clamp(0, len as isize - 1) as usize;
    }

    pub fn select_last(&mut self) {
        self.app.selected = self.app.visible_records().len().saturating_sub(1);
    }
}
