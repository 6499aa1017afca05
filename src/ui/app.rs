use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    aggregate::{Dimension, aggregate, apm_report, time_report, win_rates},
    filter::{self, FilterSelection},
    replay::ReplayRecord,
    session::Session,
};

use super::types::{LogBuffer, Overlay, ViewData, ViewKind};

/// Main application state container.
pub struct App {
    pub(in crate::ui) session: Session,
    pub(in crate::ui) logs: LogBuffer,
    pub(in crate::ui) view: ViewKind,
    /// Highlighted row on the Files tab.
    pub(in crate::ui) selected: usize,
    pub(in crate::ui) overlay: Option<Overlay>,
    pub(in crate::ui) input: String,
}

impl App {
    pub fn new(session: Session, logs: LogBuffer) -> Self {
        Self {
            session,
            logs,
            view: ViewKind::Files,
            selected: 0,
            overlay: None,
            input: String::new(),
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log(format!("{} replay(s) loaded", self.session.records().len()));

        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && super::handlers::InputHandler::new(self).handle_key(key)
            {
                return Ok(());
            }
        }
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }

    /// Games on the Files tab.
    pub(in crate::ui) fn visible_records(&self) -> Vec<&ReplayRecord> {
        self.session.filtered()
    }

    pub(in crate::ui) fn selected_record(&self) -> Option<&ReplayRecord> {
        self.visible_records().get(self.selected).copied()
    }

    /// Keeps the highlighted row inside the filtered list.
    pub(in crate::ui) fn clamp_selection(&mut self) {
        let len = self.visible_records().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Filtered records with some dimensions released, for reports that
    /// take those dimensions as parameters.
    fn filtered_without(&self, release: impl FnOnce(&mut FilterSelection)) -> Vec<&ReplayRecord> {
        let mut selection = self.session.selection.clone();
        release(&mut selection);
        filter::apply(self.session.records(), &selection)
    }

    pub(in crate::ui) fn view_data(&self) -> ViewData<'_> {
        let selection = &self.session.selection;
        let player = selection.player.as_deref();

        match self.view {
            ViewKind::Files => ViewData::Files(self.visible_records()),
            ViewKind::Commanders => ViewData::Breakdown {
                title: "Commanders",
                result: aggregate(&self.visible_records(), Dimension::Commander, player),
            },
            ViewKind::Maps => ViewData::Breakdown {
                title: "Maps",
                result: aggregate(&self.visible_records(), Dimension::Map, player),
            },
            ViewKind::WinRate => {
                let records = self.filtered_without(|s| {
                    s.difficulty = None;
                    s.race = None;
                });
                ViewData::WinRate(win_rates(&records, selection.difficulty, selection.race))
            }
            ViewKind::Time => {
                let records = self.filtered_without(|s| {
                    s.year = None;
                    s.month = None;
                });
                ViewData::Time(time_report(&records, selection.year, selection.month))
            }
            ViewKind::Apm => ViewData::Apm(apm_report(&self.visible_records(), player)),
        }
    }
}
