//! Ant Colony Optimization (ACO) for the symmetric TSP.
//!
//! A population of agents builds closed tours city by city, choosing each
//! move with probability proportional to `T(i,j)^alpha * (1/d(i,j))^beta`.
//! Trails on the pheromone table evaporate and are reinforced along good
//! tours, biasing later iterations toward short cycles.
//!
//! # Key Types
//!
//! - [`CityMap`]: Validated instance with cached distances
//! - [`PheromoneTable`]: Symmetric trail matrix with evaporation and deposit
//! - [`TransitionRule`] / [`weighted_choice`]: Move probabilities and roulette selection
//! - [`Agent`]: One tour under construction
//! - [`BestTracker`]: Global best across iterations
//! - [`AcoConfig`]: Algorithm parameters
//! - [`AcoRunner`]: Executes the colony loop
//! - [`AcoSolution`]: Final tour with statistics
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod agent;
mod config;
mod io;
mod pheromone;
mod runner;
mod tracker;
mod transition;
mod types;

pub use agent::{apply_online_deposit, construct_on_snapshot, construct_tour, Agent};
pub use config::AcoConfig;
pub use io::{
    format_cities, format_pheromone_table, format_solution, format_solution_matrix, parse_cities,
};
pub use pheromone::{DepositPolicy, PheromoneTable};
pub use runner::{AcoRunner, AcoSolution, IterationStats};
pub use tracker::BestTracker;
pub use transition::{normalize_weights, weighted_choice, TransitionRule, MIN_DISTANCE};
pub use types::{City, CityMap};
