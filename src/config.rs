use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TARGET: &str = "client/src/pages/MasterAdmin.tsx";
pub const DEFAULT_TAGS: [&str; 5] = ["TabsContent", "Tabs", "Dialog", "DialogContent", "Form"];
pub const DEFAULT_MARKER: &str = "export default MasterAdmin;";

/// What to inspect and where to cut.
///
/// Tags are counted in the order they are listed here, so the printed report
/// follows the same order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixConfig {
    pub target_path: PathBuf,
    pub tracked_tags: Vec<String>,
    pub marker_text: String,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            target_path: PathBuf::from(DEFAULT_TARGET),
            tracked_tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
            marker_text: DEFAULT_MARKER.to_string(),
        }
    }
}

impl FixConfig {
    /// Command-line values win over whatever came from the config file.
    pub fn apply_overrides(
        &mut self,
        target: Option<PathBuf>,
        tags: Vec<String>,
        marker: Option<String>,
    ) {
        if let Some(target) = target {
            self.target_path = target;
        }
        if !tags.is_empty() {
            self.tracked_tags = tags;
        }
        if let Some(marker) = marker {
            self.marker_text = marker;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.marker_text.is_empty() {
            bail!("Marker text must not be empty");
        }
        if let Some(pos) = self.tracked_tags.iter().position(|t| t.is_empty()) {
            bail!("Tracked tag #{} is empty", pos + 1);
        }
        Ok(())
    }
}

// ── Config file lookup ────────────────────────────────────────────────────────

pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("jsxfix").join("config.toml"))
}

pub fn parse_config(content: &str) -> Result<FixConfig> {
    toml::from_str(content).context("Invalid config file")
}

/// Load the config from `path`, or from the per-user location when no path is
/// given. A missing per-user file is not an error; a missing explicit one is.
pub fn load_config(path: Option<&Path>) -> Result<FixConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match user_config_path() {
            Some(p) if p.exists() => p,
            _ => {
                tracing::debug!("no config file, using defaults");
                return Ok(FixConfig::default());
            }
        },
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
