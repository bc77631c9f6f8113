//! Focused unit tests covering plan CLI configuration and scenario parsing.

use super::helpers::{Workspace, plan_args, sample_scenario, write_utf8};
use super::*;
use courier_core::{
    Algorithm, Location, PlanOutcome, PlanResponse, Planner, Topology, TopologyError,
};
use courier_search::SearchLimits;
use rstest::rstest;
use std::cell::RefCell;

#[rstest]
fn converting_plan_without_scenario_errors() {
    let err = PlanConfig::try_from(PlanArgs::default()).expect_err("missing scenario should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PLAN_SCENARIO);
            assert_eq!(env, ENV_PLAN_SCENARIO);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case::default(None, Algorithm::AStar)]
#[case::bfs(Some("bfs"), Algorithm::Bfs)]
#[case::upper_astar(Some("ASTAR"), Algorithm::AStar)]
#[case::star_alias(Some("a*"), Algorithm::AStar)]
fn plan_config_resolves_algorithm(#[case] name: Option<&str>, #[case] expected: Algorithm) {
    let workspace = Workspace::new();
    let args = PlanArgs {
        algorithm: name.map(str::to_owned),
        max_expansions: Some(500),
        ..plan_args(&workspace.scenario)
    };

    let config = PlanConfig::try_from(args).expect("config should build");
    assert_eq!(config.algorithm, expected);
    assert_eq!(config.limits, SearchLimits::with_max_expansions(500));
    assert_eq!(config.scenario, workspace.scenario);
    assert_eq!(config.output, None);
}

#[rstest]
fn unknown_algorithm_fails_before_the_scenario_is_read() {
    // The scenario path does not exist; the algorithm error must win.
    let workspace = Workspace::new();
    let args = PlanArgs {
        algorithm: Some("dijkstra".to_owned()),
        ..plan_args(&workspace.scenario)
    };

    let err = PlanConfig::try_from(args).expect_err("unknown algorithm should error");
    match err {
        CliError::UnknownAlgorithm(source) => {
            assert_eq!(
                source.to_string(),
                "unknown algorithm 'dijkstra' (expected BFS or ASTAR)"
            );
        }
        other => panic!("expected UnknownAlgorithm, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_scenario() {
    let workspace = Workspace::new();
    let config = PlanConfig::try_from(plan_args(&workspace.scenario)).expect("config");
    match config.validate_sources() {
        Err(CliError::MissingSourceFile { field, path }) => {
            assert_eq!(field, ARG_PLAN_SCENARIO);
            assert_eq!(path, workspace.scenario);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let workspace = Workspace::new();
    std::fs::create_dir(&workspace.scenario).expect("scenario directory");
    let config = PlanConfig::try_from(plan_args(&workspace.scenario)).expect("config");
    match config.validate_sources() {
        Err(CliError::SourcePathNotFile { field, .. }) => assert_eq!(field, ARG_PLAN_SCENARIO),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_scenario_decodes_json() {
    let workspace = Workspace::new();
    let scenario = sample_scenario();
    workspace.write_scenario(&scenario);

    let decoded = load_scenario(&workspace.scenario).expect("scenario should decode");
    assert_eq!(decoded, scenario);
}

#[rstest]
fn load_scenario_rejects_invalid_json() {
    let workspace = Workspace::new();
    write_utf8(&workspace.scenario, b"{ not valid json");

    match load_scenario(&workspace.scenario) {
        Err(CliError::ParseScenario { path, .. }) => assert_eq!(path, workspace.scenario),
        other => panic!("expected ParseScenario, found {other:?}"),
    }
}

#[rstest]
fn load_scenario_io_error_returns_open_error() {
    let workspace = Workspace::new();
    match load_scenario(&workspace.scenario) {
        Err(CliError::OpenScenario { path, .. }) => assert_eq!(path, workspace.scenario),
        other => panic!("expected OpenScenario, found {other:?}"),
    }
}

#[rstest]
fn output_option_writes_the_response_to_a_file() {
    let workspace = Workspace::new();
    workspace.write_scenario(&sample_scenario());
    let output = workspace.root.join("plan.json");
    let args = PlanArgs {
        output: Some(output.clone()),
        ..plan_args(&workspace.scenario)
    };

    let mut stdout = Vec::new();
    run_plan_with(args, &crate::plan::DefaultPlannerBuilder, &mut stdout).expect("plan runs");

    assert!(stdout.is_empty(), "stdout should stay empty");
    let written = std::fs::read_to_string(output.as_std_path()).expect("output file");
    let response: PlanResponse = serde_json::from_str(&written).expect("response JSON");
    assert_eq!(response.diagnostics.outcome, PlanOutcome::Found);
    assert!((response.cost - 7.5).abs() < 1e-9);
}

#[rstest]
fn request_outside_the_topology_is_rejected_before_planning() {
    let workspace = Workspace::new();
    let mut scenario = sample_scenario();
    let stray = scenario
        .request
        .available
        .first_mut()
        .expect("sample scenario has an available request");
    stray.delivery = Location::new(99);
    workspace.write_scenario(&scenario);

    let mut stdout = Vec::new();
    let err = run_plan_with(
        plan_args(&workspace.scenario),
        &crate::plan::DefaultPlannerBuilder,
        &mut stdout,
    )
    .expect_err("undeclared delivery location should fail");

    match err {
        CliError::RequestOutsideTopology { path, source } => {
            assert_eq!(path, workspace.scenario);
            assert_eq!(
                source,
                TopologyError::UnknownLocation {
                    location: Location::new(99)
                }
            );
        }
        other => panic!("expected RequestOutsideTopology, found {other:?}"),
    }
    assert!(stdout.is_empty(), "nothing should be printed");
}

#[derive(Default)]
struct RecordingBuilder {
    seen: RefCell<Option<PlanConfig>>,
}

impl PlannerBuilder for RecordingBuilder {
    fn build(&self, topology: Topology, config: &PlanConfig) -> Box<dyn Planner> {
        self.seen.replace(Some(config.clone()));
        crate::plan::DefaultPlannerBuilder.build(topology, config)
    }
}

#[rstest]
fn builder_receives_resolved_configuration() {
    let workspace = Workspace::new();
    workspace.write_scenario(&sample_scenario());
    let args = PlanArgs {
        algorithm: Some("BFS".to_owned()),
        ..plan_args(&workspace.scenario)
    };
    let builder = RecordingBuilder::default();

    let mut stdout = Vec::new();
    run_plan_with(args, &builder, &mut stdout).expect("plan runs");

    let seen = builder.seen.borrow().clone().expect("builder called");
    assert_eq!(seen.algorithm, Algorithm::Bfs);
    assert_eq!(seen.planner_config().algorithm, Algorithm::Bfs);
    let response: PlanResponse = serde_json::from_slice(&stdout).expect("response JSON");
    assert_eq!(response.plan.actions.len(), 4);
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "scenario": 42 }));

    match config_from_layers_for_test(composer.layers()) {
        Err(CliError::Configuration(_)) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let workspace = Workspace::new();
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "algorithm": "bfs",
            "max_expansions": 10,
        }),
        None,
    );
    composer.push_environment(json!({
        "scenario": workspace.scenario.as_str(),
        "max_expansions": 20,
    }));
    composer.push_cli(json!({
        "max_expansions": 30,
    }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.scenario, workspace.scenario);
    assert_eq!(config.algorithm, Algorithm::Bfs);
    assert_eq!(config.limits, SearchLimits::with_max_expansions(30));
}
