//! Plan and storage settings, loadable from a JSON file.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::error::{ScripturaError, ScripturaResult},
    plan::generator::{PeriodKind, PlanOptions, UnitsPerPeriod},
};

/// Default progress file name, relative to the working directory.
pub const DEFAULT_PROGRESS_FILE: &str = "scriptura-progress.json";

/// User-facing configuration. Every field is optional in JSON.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanConfig {
    /// Period granularity.
    pub kind: PeriodKind,
    /// Number of periods; defaults to the kind's natural horizon (365 days / 12 months).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizon: Option<u32>,
    /// Units per period, `"auto"` or a positive number.
    pub units_per_period: UnitsPerPeriod,
    /// Where completed units are persisted.
    pub progress_path: PathBuf,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            kind: PeriodKind::Day,
            horizon: None,
            units_per_period: UnitsPerPeriod::Auto,
            progress_path: PathBuf::from(DEFAULT_PROGRESS_FILE),
        }
    }
}

impl PlanConfig {
    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> ScripturaResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        let cfg = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), ?cfg, "loaded config");
        Ok(cfg)
    }

    /// Parse config JSON.
    pub fn from_json_str(text: &str) -> ScripturaResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| ScripturaError::serde(format!("invalid config: {e}")))
    }

    /// Horizon after applying the kind's default.
    pub fn effective_horizon(&self) -> u32 {
        self.horizon.unwrap_or_else(|| self.kind.default_horizon())
    }

    /// Validated generator options.
    pub fn plan_options(&self) -> ScripturaResult<PlanOptions> {
        let options = PlanOptions {
            kind: self.kind,
            horizon: self.effective_horizon(),
            units_per_period: self.units_per_period,
        };
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
