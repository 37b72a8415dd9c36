//! Type-safe selector types for command generation
//!
//! Scenario, template and output-format choices are enums rather than
//! strings so that the CLI and job files are checked at parse time.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Which final command the builder appends after the shared prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Scenario {
    /// Run the suite inside the editor
    NotStandalone,
    /// Build and run a standalone player
    Standalone,
    /// Build-only half of a split standalone job
    StandaloneBuild,
    /// Editor edit-mode suite
    Editmode,
    /// Editor play-mode suite
    Playmode,
}

impl Scenario {
    /// Whether this scenario needs `test_platform_args` from the job file
    pub fn uses_platform_args(&self) -> bool {
        matches!(self, Self::NotStandalone | Self::Standalone)
    }
}

/// Platform-specific command template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Template {
    /// Caller-supplied suite/platform fragment for standalone runs
    #[default]
    Linux,
    /// Fixed play-mode standalone run, plus edit-mode and play-mode suites
    LinuxSuites,
}

impl Template {
    /// Whether the template declares `scenario`.
    ///
    /// `standalone_build` is declared by every template even though none of
    /// them supplies build commands for it yet.
    pub fn supports(&self, scenario: Scenario) -> bool {
        match self {
            Self::Linux => !matches!(scenario, Scenario::Editmode | Scenario::Playmode),
            Self::LinuxSuites => true,
        }
    }
}

/// How the CLI prints a generated command list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// One command per line
    #[default]
    Lines,
    /// JSON array of strings
    Json,
    /// POSIX shell script that stops at the first failing command
    Script,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_scenario_names() {
        assert_eq!(Scenario::NotStandalone.to_string(), "not_standalone");
        assert_eq!(Scenario::StandaloneBuild.to_string(), "standalone_build");
        assert_eq!("playmode".parse::<Scenario>().ok(), Some(Scenario::Playmode));
        assert!("play_mode".parse::<Scenario>().is_err());
    }

    #[test]
    fn test_scenario_serde_matches_display() {
        for scenario in Scenario::iter() {
            let json = serde_json::to_string(&scenario).expect("serialize");
            assert_eq!(json, format!("\"{}\"", scenario));
        }
    }

    #[test]
    fn test_template_names() {
        assert_eq!(Template::default(), Template::Linux);
        assert_eq!(Template::LinuxSuites.to_string(), "linux_suites");
        assert_eq!("linux".parse::<Template>().ok(), Some(Template::Linux));
    }

    #[test]
    fn test_template_supports() {
        let linux: Vec<Scenario> = Scenario::iter()
            .filter(|s| Template::Linux.supports(*s))
            .collect();
        assert_eq!(
            linux,
            vec![
                Scenario::NotStandalone,
                Scenario::Standalone,
                Scenario::StandaloneBuild
            ]
        );
        assert!(Scenario::iter().all(|s| Template::LinuxSuites.supports(s)));
    }

    #[test]
    fn test_platform_args_usage() {
        assert!(Scenario::NotStandalone.uses_platform_args());
        assert!(Scenario::Standalone.uses_platform_args());
        assert!(!Scenario::Editmode.uses_platform_args());
        assert!(!Scenario::StandaloneBuild.uses_platform_args());
    }
}
