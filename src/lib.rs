//! ci-cmdgen library
//!
//! Builds the ordered shell command lists that drive Linux CI test jobs:
//! tooling install, test runner checkout, editor download, then one
//! scenario-specific test runner invocation. Nothing here executes a
//! command; callers run the returned list in order on a POSIX shell.

pub mod cli;
pub mod config;
pub mod config_file;
pub mod error;
pub mod job;
pub mod output;
pub mod template_traits;
pub mod templates;
pub mod types;

// Re-export main types for convenience
pub use config::{Api, Platform, Project};
pub use config_file::JobConfig;
pub use error::{CmdGenError, Result};
pub use job::{build, build_with};
pub use output::render;
pub use template_traits::{CommandTemplate, BASE_COMMAND_COUNT};
pub use templates::linux::LinuxTemplate;
pub use templates::linux_suites::LinuxSuitesTemplate;
pub use types::{OutputFormat, Scenario, Template};
