//! Record store loading.
//!
//! Reads a directory of `<record_id>.txt` files into a map from record id
//! to parsed [`Record`]. The filename stem is the record id and must be
//! unique across the store.
//!
//! Loading is strict about files and lenient about content: an unreadable
//! or empty record file aborts the load, while malformed lines inside a
//! readable file are collected as [`Diagnostic`]s for the CLI to report.
//!
//! The store also resolves auxiliary files referenced by records (bibtex
//! snippets) relative to the record directory — see [`RecordStore::read_aux`].

use crate::record::{self, Record};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot read record file {path}: {source}")]
    UnreadableRecord {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Record file is empty: {0}")]
    EmptyRecord(PathBuf),
    #[error("Duplicate record id '{0}'")]
    DuplicateId(String),
}

/// A malformed line noticed while loading a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub record_id: String,
    pub line: usize,
}

/// All parsed records, keyed by id.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: BTreeMap<String, Record>,
    dir: PathBuf,
    diagnostics: Vec<Diagnostic>,
}

const RECORD_EXTENSION: &str = "txt";

impl RecordStore {
    /// Load every `.txt` file in `dir` as a record.
    ///
    /// Files are visited in sorted order so diagnostics are deterministic.
    pub fn load(dir: &Path) -> Result<RecordStore, StoreError> {
        let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.is_file()
                    && p.extension()
                        .map(|e| e.eq_ignore_ascii_case(RECORD_EXTENSION))
                        .unwrap_or(false)
            })
            .collect();
        paths.sort();

        let mut store = RecordStore {
            records: BTreeMap::new(),
            dir: dir.to_path_buf(),
            diagnostics: Vec::new(),
        };

        for path in &paths {
            let id = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            let text =
                fs::read_to_string(path).map_err(|source| StoreError::UnreadableRecord {
                    path: path.clone(),
                    source,
                })?;
            if text.trim().is_empty() {
                return Err(StoreError::EmptyRecord(path.clone()));
            }
            for line in record::line_diagnostics(&text) {
                store.diagnostics.push(Diagnostic {
                    record_id: id.clone(),
                    line,
                });
            }
            let record = Record::parse(&text);
            if store.records.insert(id.clone(), record).is_some() {
                return Err(StoreError::DuplicateId(id));
            }
        }
        Ok(store)
    }

    /// Record by id, if present. Callers treat a miss from a manifest
    /// reference as fatal; [`crate::generate`] owns that error.
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Malformed-line diagnostics from the load, in file order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Read an auxiliary file (e.g. a `.bib` snippet a record's `bibtex`
    /// field names) relative to the record directory. Returns `None` when
    /// the file cannot be read — callers degrade to a placeholder.
    pub fn read_aux(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(name)).ok()
    }
}
