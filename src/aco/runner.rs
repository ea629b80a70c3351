//! Colony iteration loop.
//!
//! [`AcoRunner`] drives a run through `INIT -> (ITERATE)* -> DONE`, where
//! each iteration is spawn → construct → evaluate → update.

use super::agent::{construct_tour, Agent};
use super::config::AcoConfig;
use super::pheromone::PheromoneTable;
use super::tracker::BestTracker;
use super::transition::TransitionRule;
use super::types::{City, CityMap};
use crate::error::AcoResult;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Result of a colony run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoSolution {
    /// Best tour found, as city ids. Implicitly closed back to its first city.
    pub best_path: Vec<usize>,

    /// Cost of the best tour, closing edge included.
    pub best_cost: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Global best cost at the end of each iteration.
    pub cost_history: Vec<f64>,
}

/// Snapshot passed to the per-iteration callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationStats {
    /// 1-based iteration index.
    pub iteration: usize,

    /// Cost of the best tour built in this iteration.
    pub iteration_best_cost: f64,

    /// Global best cost after this iteration.
    pub best_cost: f64,

    /// Whether this iteration improved the global best.
    pub improved: bool,
}

/// Executes the ACO loop.
///
/// # Usage
///
/// ```
/// use u_antcolony::aco::{AcoConfig, AcoRunner, City, CityMap};
///
/// let cities = CityMap::new(vec![
///     City::new(1, 0.0, 0.0),
///     City::new(2, 0.0, 1.0),
///     City::new(3, 1.0, 1.0),
///     City::new(4, 1.0, 0.0),
/// ])
/// .unwrap();
/// let config = AcoConfig::default().with_max_iterations(50).with_seed(42);
/// let result = AcoRunner::run(&cities, &config).unwrap();
/// assert!((result.best_cost - 4.0).abs() < 1e-6);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Validates raw cities and runs the colony on them.
    pub fn solve(cities: Vec<City>, config: &AcoConfig) -> AcoResult<AcoSolution> {
        config.validate()?;
        let map = CityMap::new(cities)?;
        Self::run(&map, config)
    }

    /// Runs the colony for `config.max_iterations` iterations.
    ///
    /// # Errors
    /// Returns [`AcoError::Configuration`](crate::error::AcoError) if the
    /// configuration is invalid; no iteration is attempted.
    pub fn run(cities: &CityMap, config: &AcoConfig) -> AcoResult<AcoSolution> {
        Self::run_with_callback(cities, config, None, |_| {})
    }

    /// Runs the colony with an optional cancellation token.
    ///
    /// The flag is checked between iterations only; a cancelled run
    /// returns the best tour found so far.
    pub fn run_with_cancel(
        cities: &CityMap,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AcoResult<AcoSolution> {
        Self::run_with_callback(cities, config, cancel, |_| {})
    }

    /// Runs the colony, calling `on_iteration` after every iteration.
    pub fn run_with_callback<F>(
        cities: &CityMap,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut on_iteration: F,
    ) -> AcoResult<AcoSolution>
    where
        F: FnMut(&IterationStats),
    {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        info!(
            cities = cities.len(),
            population = config.population_size,
            iterations = config.max_iterations,
            "starting colony run"
        );

        // INIT
        let rule = TransitionRule::new(config.alpha, config.beta);
        let mut table = PheromoneTable::new(
            cities.len(),
            config.initial_pheromone,
            config.min_pheromone,
        );
        let mut tracker = BestTracker::new();
        let online = config
            .online_pheromone_update
            .then_some(config.online_deposit);
        let policy = config.deposit_policy();

        let mut cost_history = Vec::with_capacity(config.max_iterations);
        let mut cancelled = false;

        for iteration in 1..=config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // SPAWN: one independent generator per agent, drawn serially.
            let seeds: Vec<u64> = (0..config.population_size)
                .map(|_| rng.random())
                .collect();

            // CONSTRUCT
            let agents = construct_agents(
                cities,
                &mut table,
                &rule,
                online,
                &seeds,
                config.parallel,
            );

            // EVALUATE
            let best_agent = iteration_best(&agents);

            // UPDATE
            if config.offline_pheromone_update {
                table.evaporate(config.pheromone_persistence);
                table.deposit(best_agent.path(), best_agent.cost(), policy);
            }

            let improved = tracker.update(best_agent.path(), best_agent.cost());
            if improved {
                trace!(iteration, cost = tracker.best_cost(), "new best tour");
            }
            cost_history.push(tracker.best_cost());

            debug!(
                iteration,
                iteration_best = best_agent.cost(),
                best = tracker.best_cost(),
                "iteration complete"
            );

            on_iteration(&IterationStats {
                iteration,
                iteration_best_cost: best_agent.cost(),
                best_cost: tracker.best_cost(),
                improved,
            });
        }

        let iterations = cost_history.len();
        let (best_tour, best_cost) = tracker.into_inner();

        info!(iterations, best_cost, cancelled, "colony run finished");

        Ok(AcoSolution {
            best_path: cities.ids_of(&best_tour),
            best_cost,
            iterations,
            cancelled,
            cost_history,
        })
    }
}

/// Builds one tour per seed.
///
/// Sequential construction applies online deposits immediately, so later
/// agents see earlier agents' trails.
#[cfg(not(feature = "parallel"))]
fn construct_agents(
    cities: &CityMap,
    table: &mut PheromoneTable,
    rule: &TransitionRule,
    online: Option<f64>,
    seeds: &[u64],
    _parallel: bool,
) -> Vec<Agent> {
    construct_sequential(cities, table, rule, online, seeds)
}

/// Builds one tour per seed.
///
/// In parallel mode every agent reads the same unmutated table; online
/// deposits are applied in agent order once all tours are complete.
#[cfg(feature = "parallel")]
fn construct_agents(
    cities: &CityMap,
    table: &mut PheromoneTable,
    rule: &TransitionRule,
    online: Option<f64>,
    seeds: &[u64],
    parallel: bool,
) -> Vec<Agent> {
    use super::agent::{apply_online_deposit, construct_on_snapshot};
    use rayon::prelude::*;

    if !parallel {
        return construct_sequential(cities, table, rule, online, seeds);
    }

    let snapshot: &PheromoneTable = table;
    let agents: Vec<Agent> = seeds
        .par_iter()
        .map(|&seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            construct_on_snapshot(cities, snapshot, rule, &mut rng)
        })
        .collect();

    // Barrier passed: the table may be mutated again.
    if let Some(amount) = online {
        for agent in &agents {
            apply_online_deposit(table, agent, amount);
        }
    }
    agents
}

fn construct_sequential(
    cities: &CityMap,
    table: &mut PheromoneTable,
    rule: &TransitionRule,
    online: Option<f64>,
    seeds: &[u64],
) -> Vec<Agent> {
    seeds
        .iter()
        .map(|&seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            construct_tour(cities, table, rule, online, &mut rng)
        })
        .collect()
}

/// Lowest-cost agent; ties go to the first one found.
fn iteration_best(agents: &[Agent]) -> &Agent {
    let mut best = &agents[0];
    for agent in &agents[1..] {
        if agent.cost() < best.cost() {
            best = agent;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
