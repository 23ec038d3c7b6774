//! Site configuration module.
//!
//! Handles loading and validating `site.toml` from the data directory.
//! The file is optional — stock defaults describe the lab as-is — and
//! sparse: override just the values you want.
//!
//! ```toml
//! # Author name emphasized (bolded) in publication author lists
//! pi_name = "Shubham Tulsiani"
//!
//! # Topic slug → display label. Slugs missing from this table render
//! # as the raw slug, so an unknown topic is never an error.
//! [topics]
//! 3d-reconstruction = "3D Reconstruction"
//! neural-rendering = "Neural Rendering"
//! robot-learning = "Robot Learning"
//! physics-dynamics = "Physics & Dynamics"
//! object-understanding = "Object Understanding"
//! generative-models = "Generative Models"
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! The config is an explicit immutable value threaded into the pipeline,
//! not global state, so rendering stays a pure function of its inputs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Principal investigator name, emphasized verbatim in author strings.
    pub pi_name: String,
    /// Topic slug → human-readable label.
    pub topics: BTreeMap<String, String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            pi_name: "Shubham Tulsiani".to_string(),
            topics: default_topics(),
        }
    }
}

fn default_topics() -> BTreeMap<String, String> {
    [
        ("3d-reconstruction", "3D Reconstruction"),
        ("neural-rendering", "Neural Rendering"),
        ("robot-learning", "Robot Learning"),
        ("physics-dynamics", "Physics & Dynamics"),
        ("object-understanding", "Object Understanding"),
        ("generative-models", "Generative Models"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl SiteConfig {
    /// Display label for a topic slug, falling back to the raw slug.
    pub fn topic_label<'a>(&'a self, slug: &'a str) -> &'a str {
        self.topics.get(slug).map(String::as_str).unwrap_or(slug)
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pi_name.trim().is_empty() {
            return Err(ConfigError::Validation("pi_name must not be empty".into()));
        }
        if let Some(slug) = self.topics.keys().find(|s| s.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "empty topic slug (label '{}')",
                self.topics[slug]
            )));
        }
        Ok(())
    }
}

/// Load `site.toml` from `data_dir`, falling back to defaults when the
/// file does not exist. A present-but-broken file is an error.
pub fn load_config(data_dir: &Path) -> Result<SiteConfig, ConfigError> {
    let path = data_dir.join("site.toml");
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}
