//! Job file handling for saving and loading descriptor bundles.
//!
//! A job file is the JSON form of everything one CI job needs: the three
//! descriptors plus the optional suite/platform flag fragment.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::{Api, Platform, Project};
use crate::error::{CmdGenError, Result};

/// Descriptors for a single CI job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobConfig {
    pub project: Project,
    pub platform: Platform,
    pub api: Api,
    /// Literal flag fragment such as `--suite=playmode --platform=Standalone`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_platform_args: Option<String>,
}

impl JobConfig {
    /// Create a job from already-validated descriptors
    pub fn new(project: Project, platform: Platform, api: Api) -> Self {
        Self {
            project,
            platform,
            api,
            test_platform_args: None,
        }
    }

    pub fn with_test_platform_args(mut self, args: impl Into<String>) -> Self {
        self.test_platform_args = Some(args.into());
        self
    }

    /// Save the job to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        Ok(())
    }

    /// Load a job from a JSON file and validate it
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        Self::from_json(&content).map_err(|e| match e {
            CmdGenError::MalformedConfig(msg) => {
                CmdGenError::malformed(format!("{}: {}", path.as_ref().display(), msg))
            }
            other => other,
        })
    }

    /// Parse and validate a job from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(content).map_err(|e| CmdGenError::malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every descriptor. `test_platform_args` is a literal fragment
    /// and is passed through as given, blank included.
    pub fn validate(&self) -> Result<()> {
        self.project.validate()?;
        self.platform.validate()?;
        self.api.validate()
    }

    /// `test_platform_args`, or a malformed-configuration error naming the scenario
    pub fn require_test_platform_args(&self, scenario: &str) -> Result<&str> {
        self.test_platform_args.as_deref().ok_or_else(|| {
            CmdGenError::malformed(format!("{} requires test_platform_args", scenario))
        })
    }
}
