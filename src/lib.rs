//! # Labsite
//!
//! A static site generator for a research lab's website. Small structured
//! text records (one per publication) plus a people roster go in; three
//! deterministic HTML pages come out.
//!
//! # Architecture: One Pass, Pure Pipeline
//!
//! ```text
//! data/publications/*.txt ─┐
//! data/manifest.toml      ─┤  load → render → assemble → write
//! data/people.json        ─┼───────────────────────────→ index.html
//! data/site.toml          ─┤                             projects.html
//! templates/*.html        ─┘                             people.html
//! ```
//!
//! Every build is a pure function of the input files: no state survives a
//! run, no network is touched, and reruns over unchanged inputs produce
//! byte-identical output. Ordering and feature selection live entirely in
//! the manifest, so the record files stay append-only prose.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`record`] | Parses one record's `name:: value` lines into an ordered field map |
//! | [`store`] | Loads the publications directory into an id → record map, with diagnostics |
//! | [`manifest`] | Ordered display manifest: year grouping, `New` badges, the Featured Set |
//! | [`roster`] | `people.json`: PI, students, prospective blurb, four alumni groups |
//! | [`render`] | Maud fragments: project cards, person cards, alumni sections, year dividers |
//! | [`template`] | `{{TOKEN}}` substitution into page templates — unresolved tokens are errors |
//! | [`generate`] | Pipeline orchestration: loads inputs, assembles pages, writes output |
//! | [`config`] | `site.toml`: PI name and the topic-label table |
//! | [`output`] | CLI output formatting for build and check runs |
//!
//! # Design Decisions
//!
//! ## Records Are Lines, Not Front-Matter
//!
//! A publication record is plain text, one `name:: value` field per line.
//! Lines without the separator are ignored, so files can carry free-form
//! notes; the CLI reports them as warnings rather than dropping them
//! silently. Field order matters: every field outside the reserved set
//! becomes a link on the card, in the order it appears in the file — the
//! record file *is* the link layout.
//!
//! ## Maud Fragments, Text Templates
//!
//! Card and section fragments are [Maud](https://maud.lambda.xyz/) —
//! compile-time checked, auto-escaped Rust. The three page shells stay
//! plain HTML files with `{{TOKEN}}` placeholders so the site's markup
//! can be edited without recompiling. The substitution step refuses to
//! ship an unresolved token: a typo in a template is a build error, not
//! template syntax leaking into production HTML.
//!
//! ## The Manifest Owns Presentation
//!
//! Display order, year dividers, `New` badges, and the featured selection
//! all come from `manifest.toml`, never from the records. A manifest id
//! with no record is a configuration error that fails the build — a
//! dangling reference should never silently thin out the projects page.
//!
//! ## Parallel Cards, Sequential Assembly
//!
//! Card rendering is a pure function of one record, so the projects page
//! renders its rows on the rayon thread pool and reassembles them in
//! manifest order. Output bytes are identical to a sequential render.

pub mod config;
pub mod generate;
pub mod manifest;
pub mod output;
pub mod record;
pub mod render;
pub mod roster;
pub mod store;
pub mod template;

#[cfg(test)]
pub(crate) mod test_helpers;
