//! Job dispatch
//!
//! Translates a (template, scenario, job file) triple into the command list
//! for one CI job.
//!
//! # Rules
//!
//! | Scenario           | Builder call                                        |
//! |--------------------|-----------------------------------------------------|
//! | `not_standalone`   | `not_standalone` with the job's `test_platform_args` (required) |
//! | `standalone`       | `standalone` with the job's `test_platform_args` (optional) |
//! | `standalone_build` | `standalone_build` (always not implemented)         |
//! | `editmode`         | `editmode`                                          |
//! | `playmode`         | `playmode`                                          |

use tracing::debug;

use crate::config_file::JobConfig;
use crate::error::Result;
use crate::template_traits::CommandTemplate;
use crate::templates::linux::LinuxTemplate;
use crate::templates::linux_suites::LinuxSuitesTemplate;
use crate::types::{Scenario, Template};

/// Build the command list for `scenario` using the selected template.
pub fn build(template: Template, scenario: Scenario, job: &JobConfig) -> Result<Vec<String>> {
    match template {
        Template::Linux => build_with(&LinuxTemplate, scenario, job),
        Template::LinuxSuites => build_with(&LinuxSuitesTemplate, scenario, job),
    }
}

/// Build the command list for `scenario` with any `CommandTemplate`.
pub fn build_with<T: CommandTemplate>(
    template: &T,
    scenario: Scenario,
    job: &JobConfig,
) -> Result<Vec<String>> {
    let JobConfig {
        project,
        platform,
        api,
        test_platform_args,
    } = job;

    let cmds = match scenario {
        Scenario::NotStandalone => {
            let args = job.require_test_platform_args("not_standalone")?;
            template.not_standalone(project, platform, api, args)?
        }
        Scenario::Standalone => {
            template.standalone(project, platform, api, test_platform_args.as_deref())?
        }
        Scenario::StandaloneBuild => template.standalone_build(project, platform, api)?,
        Scenario::Editmode => template.editmode(project, platform, api)?,
        Scenario::Playmode => template.playmode(project, platform, api)?,
    };

    debug!(
        platform = template.platform_name(),
        %scenario,
        project = %project.folder,
        commands = cmds.len(),
        "generated command list"
    );
    Ok(cmds)
}
