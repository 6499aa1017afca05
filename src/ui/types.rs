use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    aggregate::{AggregateResult, ApmReport, TimeReport, WinRateReport},
    replay::ReplayRecord,
};

pub const MAX_LOG_LINES: usize = 300;

/// Thread-safe circular log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push(&self, msg: String) {
        // A poisoned lock only means another thread panicked mid-push.
        let mut buf = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        buf.push(msg);
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ViewKind {
    Files,
    Commanders,
    Maps,
    #[strum(to_string = "Win Rate")]
    WinRate,
    Time,
    #[strum(to_string = "APM")]
    Apm,
}

impl ViewKind {
    pub fn position(self) -> usize {
        ViewKind::iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn from_position(position: usize) -> Option<Self> {
        ViewKind::iter().nth(position)
    }

    pub fn next(self) -> Self {
        Self::from_position(self.position() + 1).unwrap_or(ViewKind::Files)
    }

    pub fn prev(self) -> Self {
        match self.position() {
            0 => ViewKind::Apm,
            n => Self::from_position(n - 1).unwrap_or(ViewKind::Files),
        }
    }
}

/// The inputs one tab needs, computed from the session for each frame.
pub enum ViewData<'a> {
    Files(Vec<&'a ReplayRecord>),
    Breakdown {
        title: &'static str,
        result: AggregateResult,
    },
    WinRate(WinRateReport),
    Time(TimeReport),
    Apm(ApmReport),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    Directory,
    Export,
}

impl InputPurpose {
    pub fn title(self) -> &'static str {
        match self {
            InputPurpose::Directory => "Replay directory",
            InputPurpose::Export => "Export CSV to",
        }
    }
}

/// Modal panel drawn over the active tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    Detail(PathBuf),
    Messages(PathBuf),
    Errors,
    ConfirmDelete(PathBuf),
    Input(InputPurpose),
}

/// Filter dimensions reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum FilterField {
    Player,
    Commander,
    Map,
    Difficulty,
    #[strum(to_string = "Enemy race")]
    Race,
    Year,
    Month,
    Mutation,
    Outcome,
}

impl FilterField {
    pub fn from_key(c: char) -> Option<Self> {
        let field = match c.to_ascii_lowercase() {
            'p' => FilterField::Player,
            'c' => FilterField::Commander,
            'm' => FilterField::Map,
            'd' => FilterField::Difficulty,
            'r' => FilterField::Race,
            'y' => FilterField::Year,
            'n' => FilterField::Month,
            'u' => FilterField::Mutation,
            'o' => FilterField::Outcome,
            _ => return None,
        };
        Some(field)
    }
}
