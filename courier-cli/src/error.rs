//! Error types emitted by the courier CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use courier_core::{PlanError, PlanRequestValidationError, TopologyError, UnknownAlgorithmError};
use thiserror::Error;

/// Errors emitted by the courier CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The configured algorithm is not one the planner knows.
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithmError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the scenario file failed.
    #[error("failed to open scenario at {path:?}: {source}")]
    OpenScenario {
        /// Scenario path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Scenario JSON could not be decoded.
    #[error("failed to parse scenario JSON at {path:?}: {source}")]
    ParseScenario {
        /// Scenario path.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// The scenario's road network is unusable.
    #[error("scenario {path:?} has an invalid topology: {source}")]
    InvalidTopology {
        /// Scenario path.
        path: Utf8PathBuf,
        /// Topology validation failure.
        #[source]
        source: TopologyError,
    },
    /// The plan request names a location missing from the road network.
    #[error("plan request in {path:?} does not fit its topology: {source}")]
    RequestOutsideTopology {
        /// Scenario path.
        path: Utf8PathBuf,
        /// The undeclared location.
        #[source]
        source: TopologyError,
    },
    /// The scenario's plan request failed validation.
    #[error("plan request in {path:?} failed validation: {source}")]
    InvalidPlanRequest {
        /// Scenario path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: PlanRequestValidationError,
    },
    /// The planner rejected the request.
    #[error("planner failed: {source}")]
    Plan {
        /// Planner failure.
        source: PlanError,
    },
    /// Serializing the plan response failed.
    #[error("failed to serialize plan response: {0}")]
    SerializePlanResponse(#[source] serde_json::Error),
    /// Writing the plan to stdout failed.
    #[error("failed to write plan output: {0}")]
    WritePlanOutput(#[source] std::io::Error),
    /// Writing the plan to the requested output file failed.
    #[error("failed to write plan to {path:?}: {source}")]
    WriteOutputFile {
        /// Output path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
}
