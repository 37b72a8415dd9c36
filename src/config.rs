//! Typed descriptors for project, platform and graphics API.
//!
//! These replace loosely-typed key/value mappings. A missing field is
//! rejected by serde, and `validate()` rejects values that would produce a
//! garbled command (empty path segments, whitespace in identifiers, quotes
//! inside a quoted editor argument).

use serde::{Deserialize, Serialize};

use crate::error::{CmdGenError, Result};

/// Test project descriptor. `folder` is the directory under `TestProjects/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub folder: String,
}

impl Project {
    pub fn new(folder: impl Into<String>) -> Result<Self> {
        let project = Self {
            folder: folder.into(),
        };
        project.validate()?;
        Ok(project)
    }

    pub fn validate(&self) -> Result<()> {
        require_token("project.folder", &self.folder)
    }

    /// Path of the project relative to the repository root
    pub fn path(&self) -> String {
        format!("TestProjects/{}", self.folder)
    }
}

/// Platform descriptor: editor components fetched by the downloader.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Platform {
    pub components: Vec<String>,
}

impl Platform {
    pub fn new<I, S>(components: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let platform = Self {
            components: components.into_iter().map(Into::into).collect(),
        };
        platform.validate()?;
        Ok(platform)
    }

    pub fn validate(&self) -> Result<()> {
        validate_components(&self.components)
    }
}

/// Every component must be a single non-empty shell word.
pub fn validate_components(components: &[String]) -> Result<()> {
    for (i, component) in components.iter().enumerate() {
        require_token(&format!("platform.components[{}]", i), component)?;
    }
    Ok(())
}

/// Graphics API descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Api {
    /// Used to build the `CustomBuild` method identifier (e.g. `Vulkan`)
    pub name: String,
    /// Extra editor argument (e.g. `-force-vulkan`). May be empty.
    pub cmd: String,
}

impl Api {
    pub fn new(name: impl Into<String>, cmd: impl Into<String>) -> Result<Self> {
        let api = Self {
            name: name.into(),
            cmd: cmd.into(),
        };
        api.validate()?;
        Ok(api)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(CmdGenError::malformed("api.name must not be empty"));
        }
        if !self
            .name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(CmdGenError::malformed(format!(
                "api.name '{}' can only contain letters, numbers, and underscores",
                self.name
            )));
        }
        // Interpolated inside --extra-editor-arg="..."
        if self.cmd.contains('"') {
            return Err(CmdGenError::malformed(format!(
                "api.cmd '{}' must not contain double quotes",
                self.cmd
            )));
        }
        Ok(())
    }
}

/// Non-empty, whitespace-free value that ends up as a single shell word.
fn require_token(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CmdGenError::malformed(format!("{} must not be empty", field)));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(CmdGenError::malformed(format!(
            "{} '{}' must not contain whitespace",
            field, value
        )));
    }
    Ok(())
}
