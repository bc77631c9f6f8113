//! Shared test harness modules for the courier CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::plan::{
    PlanArgs, PlanConfig, PlannerBuilder, Scenario, config_from_layers_for_test, load_scenario,
    run_plan_with,
};

mod helpers;
mod plan_unit;
