//! Command-line interface for planning pickup-and-delivery runs from JSON
//! scenarios.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;

use plan::PlanArgs;

pub(crate) const ARG_PLAN_SCENARIO: &str = "scenario";
pub(crate) const ARG_PLAN_ALGORITHM: &str = "algorithm";
pub(crate) const ARG_PLAN_MAX_EXPANSIONS: &str = "max-expansions";
pub(crate) const ARG_PLAN_OUTPUT: &str = "output";
pub(crate) const ENV_PLAN_SCENARIO: &str = "COURIER_CMDS_PLAN_SCENARIO";

/// Run the courier CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => plan::run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "courier",
    about = "Plan pickup-and-delivery runs for a single capacity-bound carrier",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute a plan for a JSON scenario.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
