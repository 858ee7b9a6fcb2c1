use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a cleaning run.
#[derive(Error, Debug)]
pub enum CleanError {
    #[error("source file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseIssue,
    },

    #[error("column {column:?} not found in table headers")]
    MissingColumn { column: String },

    #[error("row {row} has {len} fields, column {column:?} needs more")]
    ShortRow {
        row: usize,
        len: usize,
        column: String,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Why a source file is not usable delimited text.
#[derive(Error, Debug)]
pub enum ParseIssue {
    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("no header row")]
    NoHeader,

    #[error("record on line {line} has {found} fields, header has {expected}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, CleanError>;
