use clap::{Parser, Subcommand};
use labsite::generate::{self, SitePaths};
use labsite::output;
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "labsite")]
#[command(about = "Static site generator for a research lab website")]
#[command(long_about = "\
Static site generator for a research lab website

Reads publication records, a display manifest, and a people roster, and
writes three static HTML pages.

Data layout:

  data/
  ├── site.toml                    # PI name + topic labels (optional)
  ├── manifest.toml                # Display order, year groups, featured flags
  ├── people.json                  # PI, students, alumni, prospective blurb
  └── publications/
      ├── cvpr25demodiffusion.txt  # One record per publication
      ├── cvpr25demodiffusion.bib  # Bibtex snippet a record may reference
      └── ...
  templates/
  ├── base.html                    # Page shell ({{PAGE_TITLE}}, {{CONTENT}}, nav tokens)
  ├── overview.html                # Landing content ({{FEATURED_JSON}})
  ├── projects.html                # Projects content ({{PROJECTS_HTML}})
  └── people.html                  # People content (faculty/students/alumni tokens)

Record files are one 'name:: value' field per line. Fields outside the
reserved set (title, author, venue, image, image-base, abstract, note,
topics) render as links on the project card, in file order.")]
#[command(version = version_string())]
struct Cli {
    /// Data directory (records, manifest, roster, site config)
    #[arg(long, default_value = "data", global = true)]
    data: PathBuf,

    /// Template directory
    #[arg(long, default_value = "templates", global = true)]
    templates: PathBuf,

    /// Output directory for the generated pages
    #[arg(long, default_value = ".", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate index.html, projects.html, and people.html
    Build,
    /// Validate records, manifest references, roster, and templates
    /// without writing output
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let paths = SitePaths::new(&cli.data, &cli.templates, &cli.output);

    match cli.command {
        Command::Build => {
            let report = generate::generate(&paths)?;
            output::print_build_report(&report);
        }
        Command::Check => {
            let report = generate::check(&paths)?;
            output::print_check_report(&report);
        }
    }

    Ok(())
}
