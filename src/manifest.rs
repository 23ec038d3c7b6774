//! Display ordering and feature selection.
//!
//! The manifest (`manifest.toml` in the data directory) is an ordered list
//! governing everything the record files themselves don't: display order,
//! year grouping, the `New` badge, and which publications are featured on
//! the landing page.
//!
//! ```toml
//! [[entries]]
//! year = "2025"
//!
//! [[entries]]
//! id = "cvpr25diffusionsfm"
//! new = true
//! selected = true
//!
//! [[entries]]
//! id = "cvpr25uniphy"
//! new = true
//! ```
//!
//! Year markers are pure display dividers; each publication entry is
//! tagged with the nearest preceding year marker when the projects page is
//! assembled. The Featured Set is the `selected = true` subset in manifest
//! order, independent of year grouping.

use crate::record::Record;
use crate::render;
use crate::store::RecordStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Cannot read manifest {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error in manifest: {0}")]
    Toml(#[from] toml::de::Error),
}

/// One manifest line: a year divider or a publication reference.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged, deny_unknown_fields)]
pub enum ManifestEntry {
    Year {
        year: String,
    },
    Publication {
        id: String,
        #[serde(default)]
        new: bool,
        #[serde(default)]
        selected: bool,
    },
}

/// The ordered display manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

/// A publication entry resolved against the record store and tagged with
/// its active year (the nearest preceding year marker).
#[derive(Debug)]
pub struct PlannedCard<'a> {
    pub id: &'a str,
    pub record: &'a Record,
    pub year: &'a str,
    pub is_new: bool,
}

/// One row of the projects page, in manifest order.
#[derive(Debug)]
pub enum PlannedRow<'a> {
    YearDivider(&'a str),
    Card(PlannedCard<'a>),
}

/// A featured publication, serialized into the landing page for the
/// client-side featured grid.
#[derive(Debug, Serialize, PartialEq)]
pub struct FeaturedProject {
    pub id: String,
    pub title: String,
    pub image: String,
    pub venue: String,
    pub project_page: String,
    pub pdf: String,
}

impl Manifest {
    /// Load and parse `manifest.toml`.
    pub fn load(path: &Path) -> Result<Manifest, ManifestError> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Resolve the manifest against the store into an ordered row plan.
    ///
    /// Each publication entry is tagged with the currently-active year. An
    /// id the store doesn't know is a configuration error, not a skip.
    pub fn plan_rows<'a>(
        &'a self,
        store: &'a RecordStore,
    ) -> Result<Vec<PlannedRow<'a>>, MissingRecord> {
        let mut rows = Vec::with_capacity(self.entries.len());
        let mut current_year = "";
        for entry in &self.entries {
            match entry {
                ManifestEntry::Year { year } => {
                    current_year = year;
                    rows.push(PlannedRow::YearDivider(year));
                }
                ManifestEntry::Publication { id, new, .. } => {
                    let record = store.get(id).ok_or_else(|| MissingRecord {
                        id: id.clone(),
                    })?;
                    rows.push(PlannedRow::Card(PlannedCard {
                        id,
                        record,
                        year: current_year,
                        is_new: *new,
                    }));
                }
            }
        }
        Ok(rows)
    }

    /// The Featured Set: `selected = true` entries in manifest order,
    /// projected for JSON serialization.
    pub fn featured(&self, store: &RecordStore) -> Result<Vec<FeaturedProject>, MissingRecord> {
        let mut featured = Vec::new();
        for entry in &self.entries {
            let ManifestEntry::Publication { id, selected: true, .. } = entry else {
                continue;
            };
            let record = store.get(id).ok_or_else(|| MissingRecord {
                id: id.clone(),
            })?;
            featured.push(FeaturedProject {
                id: id.clone(),
                title: record.get_or_empty("title").to_string(),
                image: render::rewrite_asset_path(record.get_or_empty("image")),
                venue: record.get_or_empty("venue").to_string(),
                project_page: record.get_or_empty("project page").to_string(),
                pdf: record.get_or_empty("pdf").to_string(),
            });
        }
        Ok(featured)
    }
}

/// A manifest entry references an id absent from the record store.
#[derive(Error, Debug)]
#[error("Manifest references unknown record '{id}'")]
pub struct MissingRecord {
    pub id: String,
}
