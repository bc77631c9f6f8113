//! [`Planner`] implementation backed by the search drivers.

use std::time::Instant;

use courier_core::{
    Algorithm, Diagnostics, Geography, Plan, PlanError, PlanOutcome, PlanRequest, PlanResponse,
    Planner, Strategy,
};

use crate::driver::{self, SearchLimits, SearchOutcome, SearchStats};
use crate::state::LogisticsState;

/// Configuration for [`SearchPlanner`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchPlannerConfig {
    /// Search algorithm used by [`Planner::plan`].
    pub algorithm: Algorithm,
    /// Bounds applied to every search.
    pub limits: SearchLimits,
}

/// Planner running an exhaustive search over a [`Geography`].
///
/// # Examples
/// ```
/// use courier_core::{
///     Action, CarrierProfile, Geography, Location, PlanRequest, Planner, Request, RequestId,
/// };
/// use courier_search::SearchPlanner;
///
/// struct Line;
///
/// impl Geography for Line {
///     fn distance(&self, from: Location, to: Location) -> f64 {
///         f64::from(from.id().abs_diff(to.id()))
///     }
///
///     fn shortest_path(&self, _from: Location, _to: Location) -> Vec<Location> {
///         Vec::new()
///     }
/// }
///
/// let planner = SearchPlanner::new(Line);
/// let response = planner
///     .plan(&PlanRequest {
///         carrier: CarrierProfile::new(Location::new(0), 10, 1.0),
///         available: vec![Request::new(1, Location::new(0), Location::new(4), 3)],
///         carried: Vec::new(),
///     })
///     .expect("valid request");
///
/// assert_eq!(response.cost, 4.0);
/// assert_eq!(
///     response.plan.actions,
///     vec![
///         Action::Pickup { request: RequestId::new(1) },
///         Action::Move { to: Location::new(4) },
///         Action::Deliver { request: RequestId::new(1) },
///     ],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SearchPlanner<G> {
    geography: G,
    config: SearchPlannerConfig,
}

impl<G> SearchPlanner<G>
where
    G: Geography,
{
    /// Construct a planner using the default configuration.
    #[must_use]
    pub fn new(geography: G) -> Self {
        Self::with_config(geography, SearchPlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(geography: G, config: SearchPlannerConfig) -> Self {
        Self { geography, config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SearchPlannerConfig {
        &self.config
    }

    /// Geography the planner searches over.
    #[must_use]
    pub const fn geography(&self) -> &G {
        &self.geography
    }

    /// Plan `request` with an explicit driver, bypassing the configured
    /// algorithm.
    ///
    /// # Errors
    /// Returns [`PlanError::InvalidRequest`] when the request fails
    /// validation.
    pub fn plan_with_strategy(
        &self,
        request: &PlanRequest,
        strategy: Strategy,
    ) -> Result<PlanResponse, PlanError> {
        request.validate()?;
        let started_at = Instant::now();
        let root = LogisticsState::from_request(request);
        log::debug!("planning from root state {root}");

        if root.is_terminal() {
            log::info!("nothing to pick up or deliver");
            return Ok(self.respond(
                Plan::empty(root.root_location()),
                0.0,
                Diagnostics {
                    plan_time: started_at.elapsed(),
                    strategy,
                    outcome: PlanOutcome::NothingToDo,
                    expanded: 0,
                    generated: 0,
                    pruned: 0,
                },
            ));
        }

        let origin = root.root_location();
        let report = driver::search(strategy, root, &self.geography, self.config.limits);
        let (plan, cost, outcome) = match report.outcome {
            SearchOutcome::Found(state) if state.accumulated_cost().is_finite() => {
                (state.plan(), state.accumulated_cost(), PlanOutcome::Found)
            }
            SearchOutcome::Found(state) => {
                log::error!(
                    "no feasible plan: the {strategy} terminal state has non-finite cost {}",
                    state.accumulated_cost()
                );
                (Plan::empty(origin), 0.0, PlanOutcome::Exhausted)
            }
            SearchOutcome::Exhausted => {
                log::error!("no feasible plan: the {strategy} frontier was exhausted");
                (Plan::empty(origin), 0.0, PlanOutcome::Exhausted)
            }
            SearchOutcome::Abandoned => {
                log::warn!(
                    "{strategy} search abandoned after {} expansions",
                    report.stats.expanded
                );
                (Plan::empty(origin), 0.0, PlanOutcome::Abandoned)
            }
        };

        let diagnostics = diagnostics(started_at, strategy, outcome, report.stats);
        let response = self.respond(plan, cost, diagnostics);
        if outcome == PlanOutcome::Found {
            log::info!(
                "plan {} covers distance {:.2} at cost {:.2}",
                response.plan,
                response.total_distance,
                response.cost
            );
        }
        Ok(response)
    }

    fn respond(&self, plan: Plan, cost: f64, diagnostics: Diagnostics) -> PlanResponse {
        let total_distance = plan.total_distance(&self.geography);
        PlanResponse {
            plan,
            cost,
            total_distance,
            diagnostics,
        }
    }
}

fn diagnostics(
    started_at: Instant,
    strategy: Strategy,
    outcome: PlanOutcome,
    stats: SearchStats,
) -> Diagnostics {
    Diagnostics {
        plan_time: started_at.elapsed(),
        strategy,
        outcome,
        expanded: stats.expanded,
        generated: stats.generated,
        pruned: stats.pruned,
    }
}

impl<G> Planner for SearchPlanner<G>
where
    G: Geography + Send + Sync,
{
    fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, PlanError> {
        self.plan_with_strategy(request, Strategy::from(self.config.algorithm))
    }
}
