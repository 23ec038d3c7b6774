//! Shared test utilities for the labsite test suite.
//!
//! Provides a fixture-backed site layout and path helpers used by the
//! pipeline tests in [`crate::generate`].
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let paths = fixture_paths(&tmp);
//! let report = crate::generate::generate(&paths).unwrap();
//! assert_eq!(page_files(&report), vec!["index.html", "projects.html", "people.html"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::generate::{BuildReport, SitePaths};

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other
/// tests or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Standard [`SitePaths`] into a fixture copy: data and templates from
/// the fixture, output under `out/`.
pub fn fixture_paths(tmp: &TempDir) -> SitePaths {
    SitePaths::new(
        &tmp.path().join("data"),
        &tmp.path().join("templates"),
        &tmp.path().join("out"),
    )
}

/// Generated page filenames from a build report, in build order.
pub fn page_files(report: &BuildReport) -> Vec<&str> {
    report.pages.iter().map(|p| p.file.as_str()).collect()
}
