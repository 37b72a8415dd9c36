use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::{OutputFormat, Scenario, Template};

/// ci-cmdgen - Shell command lists for Linux CI test jobs
#[derive(Parser, Debug)]
#[command(name = "ci-cmdgen")]
#[command(about = "Generate the ordered shell commands for a Linux CI test job")]
#[command(version)]
pub struct Cli {
    /// Log generation details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the command list for one scenario
    Generate {
        /// Path to the job file (project, platform, api descriptors)
        #[arg(short, long)]
        config: PathBuf,

        /// Scenario to generate (not_standalone, standalone, standalone_build, editmode, playmode)
        #[arg(short, long)]
        scenario: Scenario,

        /// Platform template (linux, linux_suites)
        #[arg(short, long, default_value_t = Template::Linux)]
        template: Template,

        /// Output format (lines, json, script)
        #[arg(short, long, default_value_t = OutputFormat::Lines)]
        format: OutputFormat,
    },
    /// Validate a job file
    Validate {
        /// Path to the job file to validate
        config: PathBuf,
    },
    /// List scenarios available for a template
    ListScenarios {
        /// Platform template (linux, linux_suites)
        #[arg(short, long, default_value_t = Template::Linux)]
        template: Template,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
