//! Plan command implementation for the courier CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use courier_core::{Algorithm, PlanRequest, PlanResponse, Planner, Topology, TopologySpec};
use courier_fs::{file_is_file, open_utf8_file, write_utf8_file};
use courier_search::{SearchLimits, SearchPlanner, SearchPlannerConfig};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_PLAN_ALGORITHM, ARG_PLAN_MAX_EXPANSIONS, ARG_PLAN_OUTPUT, ARG_PLAN_SCENARIO, CliError,
    ENV_PLAN_SCENARIO,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a pickup-and-delivery run described by a JSON scenario \
                 holding a road topology and a plan request. The algorithm \
                 and search limits can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Plan a carrier run from a JSON scenario"
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct PlanArgs {
    /// Path to a JSON scenario file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) scenario: Option<Utf8PathBuf>,
    /// Search algorithm: BFS or ASTAR (default).
    #[arg(long = ARG_PLAN_ALGORITHM, value_name = "name")]
    #[serde(default)]
    pub(crate) algorithm: Option<String>,
    /// Stop searching after this many state expansions.
    #[arg(long = ARG_PLAN_MAX_EXPANSIONS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_expansions: Option<u64>,
    /// Write the JSON response to this file instead of stdout.
    #[arg(long = ARG_PLAN_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON scenario.
    pub(crate) scenario: Utf8PathBuf,
    /// Algorithm the planner runs.
    pub(crate) algorithm: Algorithm,
    /// Bounds applied to the search.
    pub(crate) limits: SearchLimits,
    /// Optional file receiving the response.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.scenario;
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_PLAN_SCENARIO,
                path: path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_PLAN_SCENARIO,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_PLAN_SCENARIO,
                path: path.clone(),
                source,
            }),
        }
    }

    pub(crate) const fn planner_config(&self) -> SearchPlannerConfig {
        SearchPlannerConfig {
            algorithm: self.algorithm,
            limits: self.limits,
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let algorithm = match args.algorithm.as_deref() {
            Some(name) => name.parse::<Algorithm>()?,
            None => Algorithm::default(),
        };
        let scenario = args.scenario.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_SCENARIO,
            env: ENV_PLAN_SCENARIO,
        })?;
        let limits = SearchLimits {
            max_expansions: args.max_expansions,
        };
        Ok(Self {
            scenario,
            algorithm,
            limits,
            output: args.output,
        })
    }
}

/// A road network together with the request to plan over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Scenario {
    /// Road network the carrier drives on.
    pub(crate) topology: TopologySpec,
    /// Carrier and requests to plan for.
    pub(crate) request: PlanRequest,
}

/// Builds a planner for the current plan invocation.
pub(crate) trait PlannerBuilder {
    fn build(&self, topology: Topology, config: &PlanConfig) -> Box<dyn Planner>;
}

pub(crate) struct DefaultPlannerBuilder;

impl PlannerBuilder for DefaultPlannerBuilder {
    fn build(&self, topology: Topology, config: &PlanConfig) -> Box<dyn Planner> {
        Box::new(SearchPlanner::with_config(topology, config.planner_config()))
    }
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &DefaultPlannerBuilder, &mut stdout)
}

pub(crate) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn PlannerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let response = execute_plan(&config, builder)?;
    match &config.output {
        Some(path) => write_plan_file(path, &response),
        None => write_plan_response(writer, &response),
    }
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_plan(
    config: &PlanConfig,
    builder: &dyn PlannerBuilder,
) -> Result<PlanResponse, CliError> {
    let Scenario { topology, request } = load_scenario(&config.scenario)?;
    request
        .validate_detailed()
        .map_err(|source| CliError::InvalidPlanRequest {
            path: config.scenario.clone(),
            source,
        })?;
    let topology = Topology::new(topology).map_err(|source| CliError::InvalidTopology {
        path: config.scenario.clone(),
        source,
    })?;
    topology
        .ensure_covers(&request)
        .map_err(|source| CliError::RequestOutsideTopology {
            path: config.scenario.clone(),
            source,
        })?;
    log::debug!(
        "planning {} with {} over {} cities",
        config.scenario,
        config.algorithm,
        topology.cities().len()
    );
    let planner = builder.build(topology, config);
    planner
        .plan(&request)
        .map_err(|source| CliError::Plan { source })
}

/// Loads a JSON-encoded [`Scenario`] from disk.
pub(crate) fn load_scenario(path: &Utf8Path) -> Result<Scenario, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenScenario {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseScenario {
        path: path.to_path_buf(),
        source,
    })
}

fn render_response(response: &PlanResponse) -> Result<String, CliError> {
    let mut payload =
        serde_json::to_string_pretty(response).map_err(CliError::SerializePlanResponse)?;
    payload.push('\n');
    Ok(payload)
}

fn write_plan_response(writer: &mut dyn Write, response: &PlanResponse) -> Result<(), CliError> {
    let payload = render_response(response)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)
}

fn write_plan_file(path: &Utf8Path, response: &PlanResponse) -> Result<(), CliError> {
    let payload = render_response(response)?;
    write_utf8_file(path, payload.as_bytes()).map_err(|source| CliError::WriteOutputFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
