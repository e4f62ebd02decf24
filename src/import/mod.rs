//! Single-pass validation and import of a delimited player file.
//!
//! One run stamps one wall-clock tag. Every valid row becomes a [`Player`]
//! and the whole batch is inserted under that tag; every invalid row gets
//! one line in the error log and the run continues. Only a missing input
//! file or an unexpected processing failure aborts the run as a whole.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::player::Player;
use crate::store::Store;

/// Failure that aborts an entire import run.
///
/// File-not-found and any other unexpected processing failure collapse
/// into this one signal; the cause is visible only in the message. Rows
/// that merely fail validation never produce this, they are logged and
/// skipped.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ImportAborted {
    message: String,
}

impl ImportAborted {
    fn new(message: impl Into<String>) -> Self {
        ImportAborted {
            message: message.into(),
        }
    }
}

/// Why a single row was rejected. Rendered verbatim into the error log.
#[derive(Debug, Error)]
enum RowError {
    #[error("a linha deve conter exatamente 3 colunas")]
    WrongColumnCount,
    #[error("todas as colunas devem estar preenchidas")]
    MissingField,
    #[error("nível inválido: '{0}'")]
    InvalidLevel(String),
    #[error("pontuação inválida: '{0}'")]
    InvalidScore(String),
}

/// Validate one data line: exactly 3 comma-separated columns, each
/// non-empty after trimming, level an integer, score a float.
fn parse_row(raw: &str) -> Result<Player, RowError> {
    let columns: Vec<&str> = raw.split(',').collect();
    if columns.len() != 3 {
        return Err(RowError::WrongColumnCount);
    }

    let name = columns[0].trim();
    let level = columns[1].trim();
    let score = columns[2].trim();
    if name.is_empty() || level.is_empty() || score.is_empty() {
        return Err(RowError::MissingField);
    }

    let level: i64 = level
        .parse()
        .map_err(|_| RowError::InvalidLevel(level.to_string()))?;
    let score: f64 = score
        .parse()
        .map_err(|_| RowError::InvalidScore(score.to_string()))?;

    Ok(Player::new(name, level, score))
}

/// Reads a player file, logs rejected rows, and hands the valid batch to
/// the store under one shared tag.
pub struct Importer<'a> {
    store: &'a mut Store,
    log_path: PathBuf,
}

impl<'a> Importer<'a> {
    pub fn new(store: &'a mut Store, log_path: PathBuf) -> Self {
        Importer { store, log_path }
    }

    /// Import `path`, tagging every row with the current wall-clock time.
    ///
    /// Returns the count inserted; 0 means no valid rows were found
    /// (including an empty file). An `Err` means the whole run aborted
    /// and nothing was inserted.
    pub fn process(&mut self, path: &Path) -> Result<usize, ImportAborted> {
        let tag = chrono::Local::now()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        self.process_with_tag(path, &tag)
    }

    /// Same pipeline with an explicit import tag. Two runs inside the
    /// same clock second still produce distinct snapshots this way.
    pub fn process_with_tag(
        &mut self,
        path: &Path,
        import_tag: &str,
    ) -> Result<usize, ImportAborted> {
        // Input is opened before the log so a missing file leaves no
        // empty log behind.
        let input = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ImportAborted::new(format!("input file '{}' not found", path.display()))
            } else {
                ImportAborted::new(format!("cannot open '{}': {e}", path.display()))
            }
        })?;

        let mut log = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.log_path)
            .map_err(|e| {
                ImportAborted::new(format!(
                    "cannot open error log '{}': {e}",
                    self.log_path.display()
                ))
            })?;

        let mut lines = BufReader::new(input).lines();

        // First line is the header. No lines at all means nothing to do.
        if lines.next().is_none() {
            return Ok(0);
        }

        let mut valid = Vec::new();

        for (index, line) in lines.enumerate() {
            // Header is line 1, so data lines count from 2.
            let line_number = index + 2;

            let raw = line.map_err(|e| {
                ImportAborted::new(format!(
                    "read failed at line {line_number} of '{}': {e}",
                    path.display()
                ))
            })?;

            match parse_row(&raw) {
                Ok(player) => valid.push(player),
                Err(reason) => {
                    writeln!(
                        log,
                        "{import_tag} - Erro na linha {line_number} do arquivo '{}': {raw} -> {reason}",
                        path.display()
                    )
                    .map_err(|e| {
                        ImportAborted::new(format!(
                            "cannot write to error log '{}': {e}",
                            self.log_path.display()
                        ))
                    })?;

                    eprintln!(
                        "warning: line {line_number} rejected, see '{}'",
                        self.log_path.display()
                    );
                }
            }
        }

        if valid.is_empty() {
            return Ok(0);
        }

        Ok(self.store.insert(&valid, import_tag))
    }
}
