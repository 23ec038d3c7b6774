//! Publication record parsing.
//!
//! A record file is UTF-8 text with one field per line:
//!
//! ```text
//! title:: Learning to See
//! author:: A. Student, B. Advisor
//! venue:: CVPR 2025
//! image:: figures/see.mp4
//! project page:: https://example.org/see
//! pdf:: https://arxiv.org/abs/2501.00001
//! bibtex:: see.bib
//! topics:: 3d-reconstruction, generative-models
//! ```
//!
//! Each line is split on the first `::`; both halves are trimmed. Lines
//! without the delimiter are ignored, which allows free-form comments in
//! source files — [`line_diagnostics`] reports them so typos don't vanish
//! silently.
//!
//! ## Field Ordering
//!
//! The parser tracks first-seen field order. Fields outside the reserved
//! set ([`RESERVED_FIELDS`]) form the *link-field list*: each one renders
//! as a clickable link on the projects page, labeled by its field name, in
//! the order it appeared in the file. Duplicate field names keep their
//! first-seen position but the last value wins.

/// Field separator in record files.
pub const FIELD_DELIMITER: &str = "::";

/// Field names that carry card content rather than links.
pub const RESERVED_FIELDS: &[&str] = &[
    "title",
    "author",
    "venue",
    "image",
    "image-base",
    "abstract",
    "note",
    "topics",
];

/// One parsed record: an ordered field map.
///
/// Field order is first-seen order from the source text. Values for
/// duplicated names are overwritten in place (last write wins).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Parse raw record text. Pure; never fails — malformed lines are
    /// simply skipped (see [`line_diagnostics`] for reporting them).
    pub fn parse(text: &str) -> Record {
        let mut record = Record::default();
        for line in text.lines() {
            let Some((name, value)) = line.split_once(FIELD_DELIMITER) else {
                continue;
            };
            record.set(name.trim(), value.trim());
        }
        record
    }

    fn set(&mut self, name: &str, value: &str) {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.fields.push((name.to_string(), value.to_string())),
        }
    }

    /// Field value by name, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Field value by name, or `""` when absent.
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// All fields in first-seen order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Link fields: `(name, value)` pairs outside the reserved set, in
    /// first-seen order.
    pub fn link_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields().filter(|(n, _)| !RESERVED_FIELDS.contains(n))
    }

    /// Topic slugs from the comma-separated `topics` field.
    pub fn topics(&self) -> Vec<&str> {
        self.get_or_empty("topics")
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Serialize back to record-file syntax. Round-trips through
    /// [`Record::parse`] to an equivalent record.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.fields() {
            out.push_str(name);
            out.push_str(FIELD_DELIMITER);
            out.push(' ');
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}

/// 1-based line numbers of non-empty lines without the field delimiter.
///
/// These lines parse as nothing; surfacing them keeps a missing `:` from
/// silently dropping a field.
pub fn line_diagnostics(text: &str) -> Vec<usize> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !line.contains(FIELD_DELIMITER))
        .map(|(i, _)| i + 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fields_with_trimming() {
        let r = Record::parse("title::  Foo \nvenue:: CVPR 2020\n");
        assert_eq!(r.get("title"), Some("Foo"));
        assert_eq!(r.get("venue"), Some("CVPR 2020"));
    }

    #[test]
    fn splits_on_first_delimiter_only() {
        let r = Record::parse("project page:: https://example.org/a::b\n");
        assert_eq!(r.get("project page"), Some("https://example.org/a::b"));
    }

    #[test]
    fn lines_without_delimiter_are_skipped() {
        let r = Record::parse("a comment line\ntitle:: Foo\n");
        assert_eq!(r.fields().count(), 1);
        assert_eq!(r.get("title"), Some("Foo"));
    }

    #[test]
    fn link_fields_exclude_reserved_and_preserve_order() {
        let text = "title:: Foo\npdf:: p.pdf\nnote:: oral\ncode:: https://x\ntopics:: a\n";
        let r = Record::parse(text);
        let links: Vec<&str> = r.link_fields().map(|(n, _)| n).collect();
        assert_eq!(links, vec!["pdf", "code"]);
    }

    #[test]
    fn duplicate_field_keeps_position_last_value_wins() {
        let r = Record::parse("pdf:: one.pdf\ncode:: https://x\npdf:: two.pdf\n");
        assert_eq!(r.get("pdf"), Some("two.pdf"));
        let names: Vec<&str> = r.fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["pdf", "code"]);
    }

    #[test]
    fn topics_split_and_trim() {
        let r = Record::parse("topics:: 3d-reconstruction , generative-models,\n");
        assert_eq!(r.topics(), vec!["3d-reconstruction", "generative-models"]);
    }

    #[test]
    fn topics_empty_when_absent() {
        let r = Record::parse("title:: Foo\n");
        assert!(r.topics().is_empty());
    }

    #[test]
    fn parse_is_idempotent_through_serialization() {
        let text = "title:: Foo\nauthor:: A, B\npdf:: p.pdf\ncode:: https://x\n";
        let first = Record::parse(text);
        let second = Record::parse(&first.to_text());
        assert_eq!(first, second);
        let links_a: Vec<_> = first.link_fields().collect();
        let links_b: Vec<_> = second.link_fields().collect();
        assert_eq!(links_a, links_b);
    }

    #[test]
    fn diagnostics_report_malformed_lines() {
        let text = "title:: Foo\njust a note\n\nbroken line\npdf:: p.pdf\n";
        assert_eq!(line_diagnostics(text), vec![2, 4]);
    }

    #[test]
    fn diagnostics_ignore_blank_lines() {
        assert!(line_diagnostics("title:: Foo\n\n\n").is_empty());
    }
}
