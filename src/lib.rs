//! Ant Colony Optimization for the Traveling Salesman Problem.
//!
//! Approximates a low-cost Hamiltonian cycle over planar cities with the
//! Ant System metaheuristic:
//!
//! - **City model**: validated, immutable coordinates with Euclidean distances.
//! - **Pheromone table**: symmetric trail strengths, evaporated and reinforced
//!   each iteration.
//! - **Transition rule**: pheromone-vs-distance weighted roulette selection.
//! - **Colony engine**: fixed iteration budget, online and offline trail
//!   updates, global-best tracking, optional parallel tour construction.
//!
//! # Example
//!
//! ```
//! use u_antcolony::aco::{parse_cities, AcoConfig, AcoRunner};
//!
//! let cities = parse_cities("1 0 0\n2 0 1\n3 1 1\n4 1 0\n").unwrap();
//! let config = AcoConfig::default().with_seed(7);
//! let solution = AcoRunner::solve(cities, &config).unwrap();
//! assert_eq!(solution.best_path.len(), 4);
//! ```
//!
//! # Architecture
//!
//! The engine performs no I/O and installs no `tracing` subscriber;
//! parsing and formatting helpers live beside it in [`aco`] for callers
//! that want them.

pub mod aco;
pub mod error;

pub use error::{AcoError, AcoResult};
