//! Linux template with edit-mode and play-mode editor suites.
//!
//! Standalone runs are fixed to play mode on `StandaloneLinux64`; any
//! caller-supplied fragment is ignored.

use crate::config::{Api, Project};
use crate::error::Result;
use crate::template_traits::{execute_method_flags, utr_command, CommandTemplate};
use crate::templates::DOWNLOADER_INDEX;

pub const STANDALONE_SUITE: &str = "--suite=playmode --platform=StandaloneLinux64";
pub const EDITMODE_SUITE: &str = "--suite=editor --platform=editmode";
pub const PLAYMODE_SUITE: &str = "--suite=playmode";

#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxSuitesTemplate;

impl LinuxSuitesTemplate {
    /// `CustomBuild` entry point for a graphics API, e.g. `CustomBuildVulkanLinear`.
    pub fn build_method(api: &Api) -> String {
        format!("CustomBuild{}Linear", api.name)
    }

    fn editor_run(project: &Project, suite: &str, api: &Api) -> String {
        utr_command(
            project,
            &format!("{} --extra-editor-arg=\"{}\"", suite, api.cmd),
        )
    }
}

impl CommandTemplate for LinuxSuitesTemplate {
    fn platform_name(&self) -> &'static str {
        "linux"
    }

    fn downloader_install(&self) -> String {
        format!(
            "sudo -H pip install --upgrade unity-downloader-cli --extra-index-url {}",
            DOWNLOADER_INDEX
        )
    }

    fn standalone_run(
        &self,
        project: &Project,
        api: &Api,
        test_platform_args: Option<&str>,
    ) -> Result<String> {
        if let Some(args) = test_platform_args {
            tracing::debug!(args, "linux_suites: ignoring caller suite fragment for standalone");
        }
        Ok(utr_command(
            project,
            &format!(
                "{} {}",
                STANDALONE_SUITE,
                execute_method_flags(&Self::build_method(api))
            ),
        ))
    }

    fn editmode_run(&self, project: &Project, api: &Api) -> Result<String> {
        Ok(Self::editor_run(project, EDITMODE_SUITE, api))
    }

    fn playmode_run(&self, project: &Project, api: &Api) -> Result<String> {
        Ok(Self::editor_run(project, PLAYMODE_SUITE, api))
    }
}
