//! Linux template with a caller-supplied standalone suite/platform fragment.
//!
//! The fragment is completed with `Linux64`, so a job passing
//! `--suite=playmode --platform=Standalone` runs on `StandaloneLinux64`.

use crate::config::{Api, Project};
use crate::error::{CmdGenError, Result};
use crate::template_traits::{execute_method_flags, utr_command, CommandTemplate};
use crate::templates::DOWNLOADER_INDEX;

#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxTemplate;

impl LinuxTemplate {
    /// `CustomBuild` entry point for a graphics API, e.g. `CustomBuild.BuildLinuxVulkanLinear`.
    pub fn build_method(api: &Api) -> String {
        format!("CustomBuild.BuildLinux{}Linear", api.name)
    }
}

impl CommandTemplate for LinuxTemplate {
    fn platform_name(&self) -> &'static str {
        "linux"
    }

    fn downloader_install(&self) -> String {
        format!(
            "sudo -H pip install unity-downloader-cli --extra-index-url {} --upgrade",
            DOWNLOADER_INDEX
        )
    }

    fn standalone_run(
        &self,
        project: &Project,
        api: &Api,
        test_platform_args: Option<&str>,
    ) -> Result<String> {
        let args = test_platform_args
            .ok_or_else(|| CmdGenError::malformed("linux: standalone requires test_platform_args"))?;
        Ok(utr_command(
            project,
            &format!(
                "{}Linux64 {}",
                args,
                execute_method_flags(&Self::build_method(api))
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Platform;

    fn fixtures() -> (Project, Platform, Api) {
        (
            Project::new("Foo").expect("project"),
            Platform::new(["il2cpp", "base"]).expect("platform"),
            Api::new("Vulkan", "-x").expect("api"),
        )
    }

    #[test]
    fn test_base_commands_exact() {
        let (project, platform, _) = fixtures();
        let cmds = LinuxTemplate
            .base_commands(&project, &platform.components)
            .expect("base");
        assert_eq!(
            cmds,
            vec![
                "sudo -H pip install --upgrade pip",
                "sudo -H pip install unity-downloader-cli --extra-index-url https://artifactory.internal.unity3d.com/api/pypi/common-python/simple --upgrade",
                "sudo npm install upm-ci-utils -g --registry https://api.bintray.com/npm/unity/unity-npm",
                "git clone git@github.cds.internal.unity3d.com:unity/utr.git TestProjects/Foo/utr",
                "cd TestProjects/Foo && sudo unity-downloader-cli --source-file ../../unity_revision.txt -c il2cpp -c base  --wait --published-only",
            ]
        );
    }

    #[test]
    fn test_base_commands_rejects_bad_component_slice() {
        let components = vec!["il2cpp".to_string(), String::new()];
        let err = LinuxTemplate
            .base_commands(&Project::new("Foo").expect("project"), &components)
            .unwrap_err();
        assert!(matches!(err, CmdGenError::MalformedConfig(_)));
        assert!(err.to_string().contains("platform.components[1]"));
    }

    #[test]
    fn test_not_standalone_final_command() {
        let (project, platform, api) = fixtures();
        let cmds = LinuxTemplate
            .not_standalone(&project, &platform, &api, "--suite=editor --platform=editmode")
            .expect("not_standalone");
        assert_eq!(cmds.len(), 6);
        assert_eq!(
            cmds[5],
            "cd TestProjects/Foo && DISPLAY=:0.0 utr/utr --extra-editor-arg=\"-x\"  --suite=editor --platform=editmode --testproject=. --editor-location=.Editor --artifacts_path=test-results"
        );
    }

    #[test]
    fn test_standalone_final_command() {
        let (project, platform, api) = fixtures();
        let cmds = LinuxTemplate
            .standalone(&project, &platform, &api, Some("--suite=playmode --platform=Standalone"))
            .expect("standalone");
        assert_eq!(
            cmds[5],
            "cd TestProjects/Foo && DISPLAY=:0.0 utr/utr --suite=playmode --platform=StandaloneLinux64 --extra-editor-arg=\"-executemethod\" --extra-editor-arg=\"CustomBuild.BuildLinuxVulkanLinear\" --testproject=. --editor-location=.Editor --artifacts_path=test-results"
        );
    }

    #[test]
    fn test_standalone_without_args_is_malformed() {
        let (project, platform, api) = fixtures();
        let err = LinuxTemplate
            .standalone(&project, &platform, &api, None)
            .unwrap_err();
        assert!(matches!(err, CmdGenError::MalformedConfig(_)));
    }

    #[test]
    fn test_standalone_build_not_implemented() {
        let (project, platform, api) = fixtures();
        let err = LinuxTemplate
            .standalone_build(&project, &platform, &api)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Not implemented: linux: standalone_split set to true but build commands not specified"
        );
    }

    #[test]
    fn test_suites_unsupported() {
        let (project, platform, api) = fixtures();
        assert!(matches!(
            LinuxTemplate.editmode(&project, &platform, &api),
            Err(CmdGenError::UnsupportedScenario(_))
        ));
        assert!(matches!(
            LinuxTemplate.playmode(&project, &platform, &api),
            Err(CmdGenError::UnsupportedScenario(_))
        ));
    }

    #[test]
    fn test_invalid_descriptor_fails_before_building() {
        let (_, platform, api) = fixtures();
        let project = Project {
            folder: String::new(),
        };
        let err = LinuxTemplate
            .not_standalone(&project, &platform, &api, "--suite=editor")
            .unwrap_err();
        assert!(err.is_malformed());
    }
}
