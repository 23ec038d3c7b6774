//! Site generation pipeline.
//!
//! Orchestrates the full build: load inputs (records, manifest, roster,
//! config, templates), render fragments, assemble pages, write output.
//! Each build is a pure function of the input files — no state survives a
//! run and reruns over unchanged inputs are byte-identical.
//!
//! ```text
//! data/publications/*.txt ─┐
//! data/manifest.toml      ─┤
//! data/people.json        ─┼→ render → assemble → index.html
//! data/site.toml          ─┤                      projects.html
//! templates/*.html        ─┘                      people.html
//! ```
//!
//! ## Generated Pages
//!
//! - **`index.html`**: landing page with the Featured Set inlined as a
//!   JSON array for the client-side featured grid
//! - **`projects.html`**: every publication, grouped under year dividers
//!   in manifest order, with topic tags for client-side filtering
//! - **`people.html`**: PI, current students, prospective blurb, and the
//!   four alumni sections
//!
//! Errors follow the taxonomy in the module docs of [`crate::store`] and
//! [`crate::template`]: missing inputs and dangling manifest references
//! abort the build; missing optional record fields never do.

use crate::config::{self, ConfigError, SiteConfig};
use crate::manifest::{Manifest, ManifestError, MissingRecord};
use crate::render;
use crate::roster::{Roster, RosterError};
use crate::store::{Diagnostic, RecordStore, StoreError};
use crate::template::{self, NavPage, Template, TemplateError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    MissingRecord(#[from] MissingRecord),
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Input and output locations for one build.
#[derive(Debug, Clone)]
pub struct SitePaths {
    pub data_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl SitePaths {
    pub fn new(data_dir: &Path, templates_dir: &Path, output_dir: &Path) -> SitePaths {
        SitePaths {
            data_dir: data_dir.to_path_buf(),
            templates_dir: templates_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
        }
    }

    pub fn publications_dir(&self) -> PathBuf {
        self.data_dir.join("publications")
    }

    pub fn manifest_file(&self) -> PathBuf {
        self.data_dir.join("manifest.toml")
    }

    pub fn roster_file(&self) -> PathBuf {
        self.data_dir.join("people.json")
    }

    pub fn template(&self, name: &str) -> PathBuf {
        self.templates_dir.join(name)
    }
}

/// Everything a build reads, loaded up front so configuration errors
/// surface before any output is written.
pub struct SiteInputs {
    pub config: SiteConfig,
    pub store: RecordStore,
    pub manifest: Manifest,
    pub roster: Roster,
    pub base: Template,
    pub overview: Template,
    pub projects: Template,
    pub people: Template,
}

/// Load and validate all build inputs.
pub fn load_inputs(paths: &SitePaths) -> Result<SiteInputs, GenerateError> {
    Ok(SiteInputs {
        config: config::load_config(&paths.data_dir)?,
        store: RecordStore::load(&paths.publications_dir())?,
        manifest: Manifest::load(&paths.manifest_file())?,
        roster: Roster::load(&paths.roster_file())?,
        base: Template::load(&paths.template("base.html"))?,
        overview: Template::load(&paths.template("overview.html"))?,
        projects: Template::load(&paths.template("projects.html"))?,
        people: Template::load(&paths.template("people.html"))?,
    })
}

/// One generated page, for CLI reporting.
#[derive(Debug)]
pub struct PageReport {
    pub file: String,
    pub detail: String,
}

/// Summary of a completed build (or a `check` dry run).
#[derive(Debug)]
pub struct BuildReport {
    pub pages: Vec<PageReport>,
    pub records: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Run the full pipeline and write the three pages.
pub fn generate(paths: &SitePaths) -> Result<BuildReport, GenerateError> {
    let inputs = load_inputs(paths)?;
    fs::create_dir_all(&paths.output_dir)?;

    let mut pages = Vec::new();
    pages.push(write_overview(paths, &inputs)?);
    pages.push(write_projects(paths, &inputs)?);
    pages.push(write_people(paths, &inputs)?);

    Ok(BuildReport {
        pages,
        records: inputs.store.len(),
        diagnostics: inputs.store.diagnostics().to_vec(),
    })
}

/// Validate all inputs — including every manifest reference and every
/// template placeholder — without writing output.
pub fn check(paths: &SitePaths) -> Result<BuildReport, GenerateError> {
    let inputs = load_inputs(paths)?;

    let pages = vec![
        PageReport {
            file: "index.html".to_string(),
            detail: render_overview(&inputs)?.1,
        },
        PageReport {
            file: "projects.html".to_string(),
            detail: render_projects(&inputs)?.1,
        },
        PageReport {
            file: "people.html".to_string(),
            detail: render_people(&inputs)?.1,
        },
    ];

    Ok(BuildReport {
        pages,
        records: inputs.store.len(),
        diagnostics: inputs.store.diagnostics().to_vec(),
    })
}

fn render_overview(inputs: &SiteInputs) -> Result<(String, String), GenerateError> {
    let featured = inputs.manifest.featured(&inputs.store)?;
    let featured_json = serde_json::to_string_pretty(&featured)?;
    let content = inputs
        .overview
        .substitute(&[("FEATURED_JSON", featured_json.as_str())])?;
    let page = template::render_page(
        &inputs.base,
        "Overview",
        &content,
        NavPage::Overview,
        r#"<script src="js/featured.js"></script>"#,
    )?;
    Ok((page, format!("{} featured", featured.len())))
}

fn render_projects(inputs: &SiteInputs) -> Result<(String, String), GenerateError> {
    let rows = inputs.manifest.plan_rows(&inputs.store)?;
    let cards = rows
        .iter()
        .filter(|r| matches!(r, crate::manifest::PlannedRow::Card(_)))
        .count();
    let years = rows.len() - cards;
    let projects_html = render::project_rows(&rows, &inputs.store, &inputs.config).into_string();
    let content = inputs
        .projects
        .substitute(&[("PROJECTS_HTML", projects_html.as_str())])?;
    let page = template::render_page(
        &inputs.base,
        "Projects",
        &content,
        NavPage::Projects,
        r#"<script src="js/projects.js"></script>"#,
    )?;
    Ok((page, format!("{cards} cards in {years} year groups")))
}

fn render_people(inputs: &SiteInputs) -> Result<(String, String), GenerateError> {
    let roster = &inputs.roster;
    let faculty = render::person_card(&roster.pi).into_string();
    let phd = render::person_cards(&roster.phd_students).into_string();
    let ms = render::person_cards(&roster.ms_students).into_string();
    let alumni = render::alumni_html(&roster.alumni).into_string();
    let content = inputs.people.substitute(&[
        ("FACULTY_HTML", faculty.as_str()),
        ("PHD_STUDENTS_HTML", phd.as_str()),
        ("MS_STUDENTS_HTML", ms.as_str()),
        ("PROSPECTIVE_HTML", roster.prospective_text.as_str()),
        ("ALUMNI_HTML", alumni.as_str()),
    ])?;
    let page = template::render_page(
        &inputs.base,
        "Members",
        &content,
        NavPage::People,
        r#"<script src="js/projects.js"></script>"#,
    )?;
    let members = 1 + roster.phd_students.len() + roster.ms_students.len();
    let alumni_count = roster.alumni.phd.len()
        + roster.alumni.msr.len()
        + roster.alumni.mscv.len()
        + roster.alumni.undergrad.len();
    Ok((page, format!("{members} members, {alumni_count} alumni")))
}

fn write_overview(paths: &SitePaths, inputs: &SiteInputs) -> Result<PageReport, GenerateError> {
    let (page, detail) = render_overview(inputs)?;
    fs::write(paths.output_dir.join("index.html"), page)?;
    Ok(PageReport {
        file: "index.html".to_string(),
        detail,
    })
}

fn write_projects(paths: &SitePaths, inputs: &SiteInputs) -> Result<PageReport, GenerateError> {
    let (page, detail) = render_projects(inputs)?;
    fs::write(paths.output_dir.join("projects.html"), page)?;
    Ok(PageReport {
        file: "projects.html".to_string(),
        detail,
    })
}

fn write_people(paths: &SitePaths, inputs: &SiteInputs) -> Result<PageReport, GenerateError> {
    let (page, detail) = render_people(inputs)?;
    fs::write(paths.output_dir.join("people.html"), page)?;
    Ok(PageReport {
        file: "people.html".to_string(),
        detail,
    })
}
