use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn one file into a replay record.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid replay {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },

    /// Parsed fine, but it is a versus or custom game.
    #[error("{} is not a co-op replay", path.display())]
    NotCoop { path: PathBuf },
}

impl ParseError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ParseError::Read { path, .. }
            | ParseError::Decode { path, .. }
            | ParseError::Invalid { path, .. }
            | ParseError::NotCoop { path } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("the directory {} does not exist", path.display())]
    MissingDirectory { path: PathBuf },

    #[error("failed to list {}: {source}", path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not in the index", path.display())]
    UnknownReplay { path: PathBuf },

    #[error("could not delete {}: {source}", path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IndexError {
    pub fn path(&self) -> &PathBuf {
        match self {
            IndexError::MissingDirectory { path }
            | IndexError::ReadDirectory { path, .. }
            | IndexError::UnknownReplay { path }
            | IndexError::Delete { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to determine the config directory for your platform")]
    NoConfigDir,

    #[error("failed to read preferences {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preferences {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write preferences {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
