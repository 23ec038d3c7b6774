//! HTML fragment rendering.
//!
//! Pure rendering rules: a parsed record (publication or person) in, an
//! HTML fragment out. Fragments are substituted into page templates by
//! [`crate::template`]; nothing here touches the output directory.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time checked,
//! auto-escaped HTML. The one deliberate escape hatch is the prospective
//! students blurb, which the roster carries as raw HTML and
//! [`crate::generate`] substitutes verbatim.
//!
//! ## Project Card Anatomy
//!
//! Fixed order inside a card: media → title (+ `New` badge) → authors →
//! venue/note → links → bibtex block → topic tags. Every non-reserved
//! record field becomes one link in source order, labeled by its field
//! name; a field literally named `bibtex` becomes a toggle revealing the
//! escaped contents of the `.bib` file it names.

use crate::config::SiteConfig;
use crate::manifest::{PlannedCard, PlannedRow};
use crate::roster::{Alumni, Alumnus, Person};
use crate::store::RecordStore;
use maud::{Markup, html};
use rayon::prelude::*;

/// Record image values ending in one of these render as inline video.
const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".m4v"];

/// Shown in place of bibtex content when the referenced file is missing.
pub const BIBTEX_PLACEHOLDER: &str = "(bibtex file not found)";

/// Rewrite a `figures/` (or `./figures/`) path to the published asset
/// subtree. Other paths pass through untouched.
pub fn rewrite_asset_path(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("./figures/") {
        format!("assets/figures/{rest}")
    } else if let Some(rest) = path.strip_prefix("figures/") {
        format!("assets/figures/{rest}")
    } else {
        path.to_string()
    }
}

/// Media element for a record image: autoplaying muted inline video for
/// video extensions, lazily-loaded `img` (alt = title) otherwise.
pub fn media_tag(image: &str, css_class: &str, title: &str) -> Markup {
    let src = rewrite_asset_path(image);
    if VIDEO_EXTENSIONS.iter().any(|ext| src.ends_with(ext)) {
        html! {
            video class=(css_class) muted autoplay loop playsinline {
                source src=(src) type="video/mp4";
            }
        }
    } else {
        html! {
            img class=(css_class) src=(src) alt=(title) loading="lazy";
        }
    }
}

/// Wrap each verbatim occurrence of the PI's name in `<strong>`. No fuzzy
/// matching — initials or reordered names are left alone.
pub fn emphasize_pi(authors: &str, pi_name: &str) -> Markup {
    html! {
        @for (i, part) in authors.split(pi_name).enumerate() {
            @if i > 0 { strong { (pi_name) } }
            (part)
        }
    }
}

/// Year divider between publication groups on the projects page.
pub fn year_divider(year: &str) -> Markup {
    html! {
        div class="year-divider" data-year=(year) {
            span class="year-divider__label" { (year) }
        }
    }
}

/// A publication's project card.
///
/// `bibtex` is the resolved content of the file the record's `bibtex`
/// field names (`None` when the record has no such field); resolution —
/// including the unreadable-file fallback — is the caller's job so the
/// card stays a pure function of its arguments.
pub fn project_card(card: &PlannedCard, bibtex: Option<&str>, config: &SiteConfig) -> Markup {
    let record = card.record;
    let topics = record.topics();
    let title = record.get_or_empty("title");
    let note = record.get_or_empty("note");
    let bib_block_id = format!("{}Bib", card.id);

    html! {
        div class="card--project" id=(card.id) data-year=(card.year) data-topics=(topics.join(",")) {
            @if let Some(image) = record.get("image") {
                div class="card--project__media-wrap" {
                    (media_tag(image, "card--project__media", title))
                }
            }
            div class="card--project__body" {
                div class="card--project__title" {
                    (title)
                    @if card.is_new {
                        " "
                        span class="card--project__badge" { "New" }
                    }
                }
                div class="card--project__authors" {
                    (emphasize_pi(record.get_or_empty("author"), &config.pi_name))
                }
                div class="card--project__venue" {
                    (record.get_or_empty("venue"))
                    @if !note.is_empty() {
                        " "
                        span class="card--project__note" { "(" (note) ")" }
                    }
                }
                div class="card--project__links" {
                    @for (name, value) in record.link_fields() {
                        @if name == "bibtex" {
                            a class="card--project__link"
                                href={ "javascript:toggleblock('" (bib_block_id) "')" } {
                                (name)
                            }
                        } @else {
                            a class="card--project__link" href=(value) target="_blank" rel="noopener" {
                                (name)
                            }
                        }
                    }
                }
                @if let Some(bib) = bibtex {
                    pre class="bibtex-content" id=(bib_block_id) { (bib) }
                }
                @if !topics.is_empty() {
                    div class="card--project__topics" {
                        @for slug in &topics {
                            span class="card--project__topic" { (config.topic_label(slug)) }
                        }
                    }
                }
            }
        }
    }
}

/// Render the planned projects stream: year dividers interleaved with
/// cards, preserving manifest order.
///
/// Cards are pure functions of their inputs, so rows render in parallel;
/// the ordered collect keeps output identical to a sequential render.
pub fn project_rows(rows: &[PlannedRow], store: &RecordStore, config: &SiteConfig) -> Markup {
    let fragments: Vec<Markup> = rows
        .par_iter()
        .map(|row| match row {
            PlannedRow::YearDivider(year) => year_divider(year),
            PlannedRow::Card(card) => {
                let bibtex = card.record.get("bibtex").map(|file| {
                    store
                        .read_aux(file)
                        .map(|s| s.trim().to_string())
                        .unwrap_or_else(|| BIBTEX_PLACEHOLDER.to_string())
                });
                project_card(card, bibtex.as_deref(), config)
            }
        })
        .collect();
    html! {
        @for fragment in &fragments {
            (fragment)
        }
    }
}

/// A current member's person card: linked photo, linked name, and an
/// optional program/note meta line.
pub fn person_card(person: &Person) -> Markup {
    let meta: Vec<&str> = [person.program.as_deref(), person.note.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    html! {
        div class="card--person" {
            a href=(person.url) target="_blank" rel="noopener" {
                img class="card--person__photo" src=(person.photo) alt=(person.name) loading="lazy";
            }
            div class="card--person__name" {
                a href=(person.url) target="_blank" rel="noopener" { (person.name) }
            }
            @if !meta.is_empty() {
                div class="card--person__meta" { (meta.join(" · ")) }
            }
        }
    }
}

/// All person cards for a member list, in roster order.
pub fn person_cards(people: &[Person]) -> Markup {
    html! {
        @for person in people {
            (person_card(person))
        }
    }
}

/// The four alumni sections. Each group has a fixed layout variant:
/// PhD entries carry thesis/year/destination, MSR entries an optional
/// destination, MSCV and undergrad render as compact name lists.
pub fn alumni_html(alumni: &Alumni) -> Markup {
    html! {
        @if !alumni.phd.is_empty() {
            (alumni_section("PhD Alumni", &alumni.phd, false, phd_item))
        }
        @if !alumni.msr.is_empty() {
            (alumni_section("MSR Alumni", &alumni.msr, false, msr_item))
        }
        @if !alumni.mscv.is_empty() {
            (alumni_section("MSCV Alumni", &alumni.mscv, true, compact_item))
        }
        @if !alumni.undergrad.is_empty() {
            (alumni_section("Undergraduate Alumni", &alumni.undergrad, true, compact_item))
        }
    }
}

fn alumni_section(
    title: &str,
    entries: &[Alumnus],
    compact: bool,
    item: fn(&Alumnus) -> Markup,
) -> Markup {
    html! {
        div class="alumni-section" {
            h3 class="alumni-section__title" { (title) }
            ul class=(if compact { "alumni-list alumni-list--compact" } else { "alumni-list" }) {
                @for entry in entries {
                    li class="alumni-list__item" { (item(entry)) }
                }
            }
        }
    }
}

fn alumnus_link(a: &Alumnus) -> Markup {
    html! {
        a href=(a.url) target="_blank" rel="noopener" { (a.name) }
    }
}

fn phd_item(a: &Alumnus) -> Markup {
    html! {
        (alumnus_link(a))
        @if let Some(note) = &a.note { " (" (note) ")" }
        ", "
        span class="alumni-list__thesis" { (a.thesis.as_deref().unwrap_or_default()) }
        ", "
        (a.year.as_deref().unwrap_or_default())
        ". "
        (a.destination.as_deref().unwrap_or_default())
    }
}

fn msr_item(a: &Alumnus) -> Markup {
    html! {
        (alumnus_link(a))
        @if let Some(destination) = &a.destination { ". " (destination) }
    }
}

fn compact_item(a: &Alumnus) -> Markup {
    alumnus_link(a)
}
