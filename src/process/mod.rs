// src/process/mod.rs
pub mod raw_table;
pub mod trimming;
pub mod utils;

use csv::{ReaderBuilder, WriterBuilder};
use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
};
use tracing::{debug, info};

use crate::{
    config::Config,
    error::{CleanError, ParseIssue, Result},
};
use raw_table::RawTable;
use trimming::apply_cleaning;

pub const SUCCESS_MESSAGE: &str = "Saved Successfully";

/// What a finished run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub changed: usize,
}

/// Read a comma-separated file with a header row into memory.
///
/// Records shorter than the header are padded with empty values; longer ones,
/// a missing header row and invalid UTF-8 are parse errors.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CleanError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => CleanError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let parse_err = |source: ParseIssue| CleanError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // short rows are padded below
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| parse_err(e.into()))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(parse_err(ParseIssue::NoHeader));
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| parse_err(e.into()))?;
        let line = record.position().map_or(0, |p| p.line());
        if record.len() > headers.len() {
            return Err(parse_err(ParseIssue::TooManyFields {
                line,
                expected: headers.len(),
                found: record.len(),
            }));
        }

        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.len() < headers.len() {
            debug!(line, fields = row.len(), "padding short record");
            row.resize(headers.len(), String::new());
        }
        rows.push(row);
    }

    debug!(columns = headers.len(), rows = rows.len(), "loaded table");
    Ok(RawTable::new(headers, rows))
}

/// Clean `column` of `table` in place: bracketed annotations removed,
/// whitespace trimmed. Returns how many values changed.
pub fn clean(table: &mut RawTable, column: &str) -> Result<usize> {
    let changed = apply_cleaning(table, column)?;
    info!(column, changed, rows = table.len(), "cleaned column");
    debug!(values = ?table.column(column), "cleaned values");
    Ok(changed)
}

/// Write `table` as CSV to `path`, replacing any existing file.
///
/// With `write_index` the first column is an unnamed zero-based row number.
#[tracing::instrument(level = "info", skip(table, path), fields(path = %path.as_ref().display()))]
pub fn save<P: AsRef<Path>>(table: &RawTable, path: P, write_index: bool) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| CleanError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut wtr = WriterBuilder::new().from_path(path).map_err(write_err)?;

    if write_index {
        let header = std::iter::once("").chain(table.headers.iter().map(String::as_str));
        wtr.write_record(header).map_err(write_err)?;
        for (i, row) in table.rows.iter().enumerate() {
            let idx = i.to_string();
            let record = std::iter::once(idx.as_str()).chain(row.iter().map(String::as_str));
            wtr.write_record(record).map_err(write_err)?;
        }
    } else {
        wtr.write_record(&table.headers).map_err(write_err)?;
        for row in &table.rows {
            wtr.write_record(row).map_err(write_err)?;
        }
    }

    wtr.flush().map_err(|e| write_err(e.into()))?;
    debug!(rows = table.len(), "wrote table");
    Ok(())
}

/// load → clean → save for the given `config`, then announce success on stdout.
pub fn run_with(config: &Config) -> Result<RunSummary> {
    let mut table = load(&config.source)?;
    let changed = clean(&mut table, &config.column)?;
    save(&table, &config.dest, config.write_index)?;

    println!("{SUCCESS_MESSAGE}");
    Ok(RunSummary {
        rows: table.len(),
        changed,
    })
}

/// Clean `column` of `source` into `dest`, with the default index column.
pub fn run<S: AsRef<Path>, D: AsRef<Path>>(source: S, dest: D, column: &str) -> Result<RunSummary> {
    run_with(&Config {
        source: source.as_ref().to_path_buf(),
        dest: dest.as_ref().to_path_buf(),
        column: column.to_string(),
        ..Config::default()
    })
}
