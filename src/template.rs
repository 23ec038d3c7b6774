//! Page template substitution.
//!
//! Templates are plain HTML files carrying `{{NAME}}` placeholder tokens.
//! Assembly is pure textual substitution — all conditional behavior lives
//! in [`crate::render`], never in the template.
//!
//! Unlike naive `str::replace` chains, substitution here scans the
//! template for tokens and resolves each against the provided values, so:
//!
//! - an unresolved token is a build error, not template syntax silently
//!   shipped in the output HTML;
//! - substituted content is never re-scanned, so a literal `{{` inside
//!   card HTML or the featured JSON can't be misread as a token.
//!
//! ## Base template tokens
//!
//! `{{PAGE_TITLE}}`, `{{NAV_OVERVIEW_ACTIVE}}`, `{{NAV_PROJECTS_ACTIVE}}`,
//! `{{NAV_PEOPLE_ACTIVE}}`, `{{CONTENT}}`, `{{EXTRA_SCRIPTS}}` — see
//! [`render_page`].

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Cannot read template {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Unresolved placeholder {{{{{token}}}}} in template '{template}'")]
    UnresolvedPlaceholder { token: String, template: String },
}

/// A loaded page template.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    text: String,
}

/// CSS class marking the active nav link.
const NAV_ACTIVE_CLASS: &str = "nav__link--active";

/// Logical page identity; decides which nav link is marked active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPage {
    Overview,
    Projects,
    People,
}

impl NavPage {
    /// `(overview, projects, people)` nav class values — exactly one is
    /// the active class, the others empty.
    fn nav_classes(self) -> (&'static str, &'static str, &'static str) {
        match self {
            NavPage::Overview => (NAV_ACTIVE_CLASS, "", ""),
            NavPage::Projects => ("", NAV_ACTIVE_CLASS, ""),
            NavPage::People => ("", "", NAV_ACTIVE_CLASS),
        }
    }
}

impl Template {
    /// Read a template file. Missing templates are fatal.
    pub fn load(path: &Path) -> Result<Template, TemplateError> {
        let text = fs::read_to_string(path).map_err(|source| TemplateError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(Template { name, text })
    }

    #[cfg(test)]
    pub fn from_text(name: &str, text: &str) -> Template {
        Template {
            name: name.to_string(),
            text: text.to_string(),
        }
    }

    /// Substitute every `{{NAME}}` token from `values`.
    ///
    /// Errors on a token with no matching value. Provided values without a
    /// matching token are allowed — the people template, for example, may
    /// omit an optional section.
    pub fn substitute(&self, values: &[(&str, &str)]) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();
        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                // No closing marker; the remainder is literal text.
                break;
            };
            let token = &after[..end];
            let value = values
                .iter()
                .find(|(name, _)| *name == token)
                .map(|(_, v)| *v)
                .ok_or_else(|| TemplateError::UnresolvedPlaceholder {
                    token: token.to_string(),
                    template: self.name.clone(),
                })?;
            out.push_str(&rest[..start]);
            out.push_str(value);
            rest = &after[end + 2..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// Substitute the base template into a full page document.
///
/// `extra_scripts` is raw HTML appended before `</body>` (per-page script
/// tags). Exactly one nav destination is marked active via `nav_page`.
pub fn render_page(
    base: &Template,
    page_title: &str,
    content: &str,
    nav_page: NavPage,
    extra_scripts: &str,
) -> Result<String, TemplateError> {
    let (overview, projects, people) = nav_page.nav_classes();
    base.substitute(&[
        ("PAGE_TITLE", page_title),
        ("NAV_OVERVIEW_ACTIVE", overview),
        ("NAV_PROJECTS_ACTIVE", projects),
        ("NAV_PEOPLE_ACTIVE", people),
        ("CONTENT", content),
        ("EXTRA_SCRIPTS", extra_scripts),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn substitutes_tokens() {
        let t = Template::from_text("t.html", "<title>{{A}}</title><p>{{B}}</p>");
        let out = t.substitute(&[("A", "one"), ("B", "two")]).unwrap();
        assert_eq!(out, "<title>one</title><p>two</p>");
    }

    #[test]
    fn unresolved_token_is_an_error_naming_the_token() {
        let t = Template::from_text("base.html", "<p>{{MISSING}}</p>");
        let err = t.substitute(&[("OTHER", "x")]).unwrap_err();
        match err {
            TemplateError::UnresolvedPlaceholder { token, template } => {
                assert_eq!(token, "MISSING");
                assert_eq!(template, "base.html");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unused_values_are_allowed() {
        let t = Template::from_text("t.html", "<p>{{A}}</p>");
        let out = t.substitute(&[("A", "x"), ("UNUSED", "y")]).unwrap();
        assert_eq!(out, "<p>x</p>");
    }

    #[test]
    fn substituted_content_is_not_rescanned() {
        let t = Template::from_text("t.html", "<script>{{JSON}}</script>");
        let out = t.substitute(&[("JSON", "{{\"a\": 1}}")]).unwrap();
        assert_eq!(out, "<script>{{\"a\": 1}}</script>");
    }

    #[test]
    fn unclosed_marker_is_literal_text() {
        let t = Template::from_text("t.html", "a {{ b");
        assert_eq!(t.substitute(&[]).unwrap(), "a {{ b");
    }

    #[test]
    fn repeated_token_substitutes_everywhere() {
        let t = Template::from_text("t.html", "{{A}} and {{A}}");
        assert_eq!(t.substitute(&[("A", "x")]).unwrap(), "x and x");
    }

    #[test]
    fn load_reports_missing_template() {
        let tmp = TempDir::new().unwrap();
        let err = Template::load(&tmp.path().join("base.html")).unwrap_err();
        assert!(matches!(err, TemplateError::Unreadable { .. }));
    }

    const BASE: &str = "<title>{{PAGE_TITLE}}</title>\
<a class=\"nav__link {{NAV_OVERVIEW_ACTIVE}}\">Overview</a>\
<a class=\"nav__link {{NAV_PROJECTS_ACTIVE}}\">Projects</a>\
<a class=\"nav__link {{NAV_PEOPLE_ACTIVE}}\">People</a>\
<main>{{CONTENT}}</main>{{EXTRA_SCRIPTS}}";

    #[test]
    fn render_page_marks_exactly_one_nav_destination() {
        let base = Template::from_text("base.html", BASE);
        for (page, expected) in [
            (NavPage::Overview, "{{NAV_OVERVIEW_ACTIVE}}"),
            (NavPage::Projects, "{{NAV_PROJECTS_ACTIVE}}"),
            (NavPage::People, "{{NAV_PEOPLE_ACTIVE}}"),
        ] {
            let out = render_page(&base, "T", "<p>c</p>", page, "").unwrap();
            assert_eq!(
                out.matches("nav__link--active").count(),
                1,
                "page {page:?} should activate exactly one nav link ({expected})"
            );
        }
    }

    #[test]
    fn render_page_injects_title_content_and_scripts() {
        let base = Template::from_text("base.html", BASE);
        let out = render_page(
            &base,
            "Projects",
            "<p>cards</p>",
            NavPage::Projects,
            "<script src=\"js/projects.js\"></script>",
        )
        .unwrap();
        assert!(out.contains("<title>Projects</title>"));
        assert!(out.contains("<p>cards</p>"));
        assert!(out.contains("js/projects.js"));
    }
}
