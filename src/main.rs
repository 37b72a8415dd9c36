//! ci-cmdgen - Main entry point
//!
//! Loads a job file, generates the command list for one scenario and prints
//! it on stdout. Logs go to stderr so the output can be piped to a shell.

use anyhow::{Context, Result};
use strum::IntoEnumIterator;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ci_cmdgen::cli::{Cli, Commands};
use ci_cmdgen::{build, render, JobConfig, Scenario};

/// Initialize the tracing subscriber. `RUST_LOG` overrides the default level.
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    debug!("CLI arguments parsed");

    if let Err(e) = run(cli.command) {
        debug!(error = ?e, "command failed");
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Generate {
            config,
            scenario,
            template,
            format,
        } => {
            info!("Generating {} commands from {:?} ({})", scenario, config, template);
            let job = JobConfig::load_from_file(&config)
                .with_context(|| format!("Failed to load job file {:?}", config))?;
            let cmds = build(template, scenario, &job)
                .with_context(|| format!("Cannot generate {} for template {}", scenario, template))?;
            print!("{}", render(&cmds, format)?);
        }
        Commands::Validate { config } => {
            info!("Validating job file: {:?}", config);
            let job = JobConfig::load_from_file(&config)
                .with_context(|| format!("Job file validation failed: {:?}", config))?;
            println!(
                "✓ Job file is valid: {:?} (project {}, {} components, api {})",
                config,
                job.project.folder,
                job.platform.components.len(),
                job.api.name
            );
        }
        Commands::ListScenarios { template } => {
            for scenario in Scenario::iter().filter(|s| template.supports(*s)) {
                if scenario.uses_platform_args() {
                    println!("{}  (uses test_platform_args)", scenario);
                } else {
                    println!("{}", scenario);
                }
            }
        }
    }
    Ok(())
}
