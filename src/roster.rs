//! People roster loading.
//!
//! `people.json` describes everyone on the people page: the PI, current
//! PhD and MS students, a prospective-students blurb, and four alumni
//! groups. Rendering lives in [`crate::render`]; this module is just the
//! serde surface plus defaults for optional fields.
//!
//! ```json
//! {
//!   "pi": {"name": "...", "url": "...", "photo": "assets/people/pi.jpg"},
//!   "phd_students": [{"name": "...", "url": "...", "photo": "...", "program": "PhD in Robotics"}],
//!   "ms_students": [],
//!   "prospective_text": "<p>...</p>",
//!   "alumni": {
//!     "phd": [{"name": "...", "url": "...", "thesis": "...", "year": "2024", "destination": "..."}],
//!     "msr": [{"name": "...", "url": "...", "destination": "..."}],
//!     "mscv": [{"name": "...", "url": "..."}],
//!     "undergrad": []
//!   }
//! }
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Cannot read roster {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON parse error in roster: {0}")]
    Json(#[from] serde_json::Error),
}

/// Photo shown when a member has none of their own.
pub const PLACEHOLDER_PHOTO: &str = "assets/people/placeholder.jpg";

/// A current lab member (PI, PhD student, or MS student).
#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_photo")]
    pub photo: String,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

fn default_url() -> String {
    "#".to_string()
}

fn default_photo() -> String {
    PLACEHOLDER_PHOTO.to_string()
}

/// A graduated member. Which optional fields render depends on the
/// alumni group (see [`crate::render::alumni_html`]).
#[derive(Debug, Clone, Deserialize)]
pub struct Alumnus {
    pub name: String,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub thesis: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
}

/// The four alumni groups, each with its own layout variant.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Alumni {
    pub phd: Vec<Alumnus>,
    pub msr: Vec<Alumnus>,
    pub mscv: Vec<Alumnus>,
    pub undergrad: Vec<Alumnus>,
}

/// The full people roster.
#[derive(Debug, Clone, Deserialize)]
pub struct Roster {
    pub pi: Person,
    #[serde(default)]
    pub phd_students: Vec<Person>,
    #[serde(default)]
    pub ms_students: Vec<Person>,
    /// Raw HTML blurb for prospective students; substituted verbatim.
    #[serde(default)]
    pub prospective_text: String,
    #[serde(default)]
    pub alumni: Alumni,
}

impl Roster {
    /// Load and parse `people.json`. An unreadable or malformed roster is
    /// fatal for the people page build.
    pub fn load(path: &Path) -> Result<Roster, RosterError> {
        let content = fs::read_to_string(path).map_err(|source| RosterError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"{
        "pi": {"name": "Ada Lovelace", "url": "https://example.org"},
        "phd_students": [
            {"name": "Grace Hopper", "url": "https://example.org/g", "program": "PhD in Robotics"}
        ]
    }"#;

    #[test]
    fn loads_minimal_roster_with_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("people.json");
        fs::write(&path, MINIMAL).unwrap();
        let roster = Roster::load(&path).unwrap();
        assert_eq!(roster.pi.name, "Ada Lovelace");
        assert_eq!(roster.pi.photo, PLACEHOLDER_PHOTO);
        assert_eq!(roster.phd_students.len(), 1);
        assert!(roster.ms_students.is_empty());
        assert!(roster.alumni.phd.is_empty());
        assert_eq!(roster.prospective_text, "");
    }

    #[test]
    fn alumni_optional_fields_deserialize() {
        let json = r##"{
            "pi": {"name": "A"},
            "alumni": {
                "phd": [{"name": "B", "url": "#", "thesis": "On Things", "year": "2020", "destination": "MIT"}],
                "msr": [{"name": "C"}]
            }
        }"##;
        let roster: Roster = serde_json::from_str(json).unwrap();
        assert_eq!(roster.alumni.phd[0].thesis.as_deref(), Some("On Things"));
        assert_eq!(roster.alumni.msr[0].url, "#");
        assert!(roster.alumni.mscv.is_empty());
    }

    #[test]
    fn missing_roster_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let err = Roster::load(&tmp.path().join("people.json")).unwrap_err();
        assert!(matches!(err, RosterError::Unreadable { .. }));
    }
}
