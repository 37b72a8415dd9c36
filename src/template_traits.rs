//! Platform command template contract.
//!
//! Each platform variant implements `CommandTemplate`. The shared prefix
//! (`base_commands`) and the editor run (`not_standalone`) are provided;
//! a template only has to supply its downloader install line and its
//! standalone run, and may opt into the edit-mode/play-mode suites.
//!
//! # Invariants
//!
//! - Every returned list is in execution order. Later commands assume the
//!   working directory and files left behind by earlier ones (the final
//!   command runs the `utr` checkout made by the clone step).
//! - Descriptors are validated before any string is built. A failure
//!   returns an error, never a partial list.
//! - No method performs I/O. Identical inputs give identical lists.

use crate::config::{validate_components, Api, Platform, Project};
use crate::error::{CmdGenError, Result};
use crate::templates::{
    NPM_REGISTRY, PIP_UPGRADE, REVISION_FILE, UTR_REPOSITORY, UTR_TRAILING_FLAGS,
};

/// Number of commands produced by `base_commands`
pub const BASE_COMMAND_COUNT: usize = 5;

/// Trait for platform-specific command list builders.
///
/// # Example
///
/// ```ignore
/// use ci_cmdgen::templates::linux::LinuxTemplate;
/// use ci_cmdgen::template_traits::CommandTemplate;
///
/// let project = Project::new("Foo")?;
/// let platform = Platform::new(["il2cpp", "base"])?;
/// let api = Api::new("Vulkan", "-force-vulkan")?;
///
/// let cmds = LinuxTemplate.not_standalone(&project, &platform, &api, "--suite=editor")?;
/// assert_eq!(cmds.len(), 6);
/// ```
pub trait CommandTemplate {
    /// Short platform name used in error messages (e.g. `linux`).
    fn platform_name(&self) -> &'static str;

    /// The `pip install` line for the editor downloader.
    fn downloader_install(&self) -> String;

    /// Final command for a standalone player run.
    ///
    /// Whether `test_platform_args` is required depends on the template.
    fn standalone_run(
        &self,
        project: &Project,
        api: &Api,
        test_platform_args: Option<&str>,
    ) -> Result<String>;

    /// Final command for the edit-mode suite, if this template has one.
    fn editmode_run(&self, _project: &Project, _api: &Api) -> Result<String> {
        Err(CmdGenError::unsupported(format!(
            "{}: editmode is not available for this template",
            self.platform_name()
        )))
    }

    /// Final command for the play-mode suite, if this template has one.
    fn playmode_run(&self, _project: &Project, _api: &Api) -> Result<String> {
        Err(CmdGenError::unsupported(format!(
            "{}: playmode is not available for this template",
            self.platform_name()
        )))
    }

    /// Shared prefix: tooling install, test runner checkout, editor download.
    fn base_commands(&self, project: &Project, components: &[String]) -> Result<Vec<String>> {
        project.validate()?;
        validate_components(components)?;

        let component_flags: String = components.iter().map(|c| format!("-c {} ", c)).collect();

        Ok(vec![
            PIP_UPGRADE.to_string(),
            self.downloader_install(),
            format!("sudo npm install upm-ci-utils -g --registry {}", NPM_REGISTRY),
            format!("git clone {} {}/utr", UTR_REPOSITORY, project.path()),
            format!(
                "cd {} && sudo unity-downloader-cli --source-file {} {} --wait --published-only",
                project.path(),
                REVISION_FILE,
                component_flags
            ),
        ])
    }

    /// Run the suite inside the editor with the caller's flag fragment.
    fn not_standalone(
        &self,
        project: &Project,
        platform: &Platform,
        api: &Api,
        test_platform_args: &str,
    ) -> Result<Vec<String>> {
        api.validate()?;
        let mut cmds = self.base_commands(project, &platform.components)?;
        cmds.push(utr_command(
            project,
            &format!("--extra-editor-arg=\"{}\"  {}", api.cmd, test_platform_args),
        ));
        Ok(cmds)
    }

    /// Build and run a standalone player.
    fn standalone(
        &self,
        project: &Project,
        platform: &Platform,
        api: &Api,
        test_platform_args: Option<&str>,
    ) -> Result<Vec<String>> {
        api.validate()?;
        let mut cmds = self.base_commands(project, &platform.components)?;
        cmds.push(self.standalone_run(project, api, test_platform_args)?);
        Ok(cmds)
    }

    /// Build-only half of a split standalone job.
    ///
    /// No Linux template supplies build commands, so this always fails,
    /// regardless of the descriptors.
    fn standalone_build(
        &self,
        _project: &Project,
        _platform: &Platform,
        _api: &Api,
    ) -> Result<Vec<String>> {
        Err(CmdGenError::not_implemented(format!(
            "{}: standalone_split set to true but build commands not specified",
            self.platform_name()
        )))
    }

    /// Edit-mode suite inside the editor.
    fn editmode(&self, project: &Project, platform: &Platform, api: &Api) -> Result<Vec<String>> {
        api.validate()?;
        let run = self.editmode_run(project, api)?;
        let mut cmds = self.base_commands(project, &platform.components)?;
        cmds.push(run);
        Ok(cmds)
    }

    /// Play-mode suite inside the editor.
    fn playmode(&self, project: &Project, platform: &Platform, api: &Api) -> Result<Vec<String>> {
        api.validate()?;
        let run = self.playmode_run(project, api)?;
        let mut cmds = self.base_commands(project, &platform.components)?;
        cmds.push(run);
        Ok(cmds)
    }
}

/// `utr` invocation from inside the project directory.
pub fn utr_command(project: &Project, flags: &str) -> String {
    format!(
        "cd {} && DISPLAY=:0.0 utr/utr {} {}",
        project.path(),
        flags,
        UTR_TRAILING_FLAGS
    )
}

/// `-executemethod` flag pair for a `CustomBuild` entry point.
pub fn execute_method_flags(method: &str) -> String {
    format!(
        "--extra-editor-arg=\"-executemethod\" --extra-editor-arg=\"{}\"",
        method
    )
}
