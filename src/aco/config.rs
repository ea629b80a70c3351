//! ACO configuration.
//!
//! [`AcoConfig`] holds every parameter of a colony run as a named field.

use super::pheromone::DepositPolicy;
use crate::error::{AcoError, AcoResult};

/// Configuration for the Ant Colony Optimization engine.
///
/// # Defaults
///
/// ```
/// use u_antcolony::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.max_iterations, 100);
/// assert!(config.offline_pheromone_update);
/// assert!(!config.online_pheromone_update);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_antcolony::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_population_size(20)
///     .with_alpha(1.0)
///     .with_beta(3.0)
///     .with_pheromone_persistence(0.8)
///     .with_online_pheromone_update(true)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of agents spawned per iteration.
    pub population_size: usize,

    /// Number of iterations. The run always executes all of them.
    pub max_iterations: usize,

    /// Fraction of pheromone kept at each evaporation, in `(0, 1]`.
    ///
    /// `1.0` disables evaporation.
    pub pheromone_persistence: f64,

    /// Pheromone exponent in the transition rule.
    pub alpha: f64,

    /// Inverse-distance exponent in the transition rule.
    pub beta: f64,

    /// Deposit [`online_deposit`](Self::online_deposit) on each edge while
    /// agents walk.
    pub online_pheromone_update: bool,

    /// Evaporate and reinforce the iteration-best tour after each iteration.
    pub offline_pheromone_update: bool,

    /// Uniform value every trail starts at.
    pub initial_pheromone: f64,

    /// `Q` in the offline deposit `Q / tour_cost`.
    pub deposit_weight: f64,

    /// Fixed per-edge increment for online updates.
    pub online_deposit: f64,

    /// Smallest value a trail may decay to.
    pub min_pheromone: f64,

    /// Build agent tours on rayon workers.
    ///
    /// Only takes effect with the `parallel` cargo feature. Results are
    /// identical to sequential runs when online updates are off.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            max_iterations: 100,
            pheromone_persistence: 0.5,
            alpha: 1.0,
            beta: 2.0,
            online_pheromone_update: false,
            offline_pheromone_update: true,
            initial_pheromone: 1.0,
            deposit_weight: 1.0,
            online_deposit: 0.01,
            min_pheromone: 1e-10,
            parallel: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of agents per iteration.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the persistence factor applied at each evaporation.
    pub fn with_pheromone_persistence(mut self, persistence: f64) -> Self {
        self.pheromone_persistence = persistence;
        self
    }

    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the inverse-distance exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Enables or disables per-step deposits while agents walk.
    pub fn with_online_pheromone_update(mut self, enabled: bool) -> Self {
        self.online_pheromone_update = enabled;
        self
    }

    /// Enables or disables end-of-iteration evaporation and deposit.
    pub fn with_offline_pheromone_update(mut self, enabled: bool) -> Self {
        self.offline_pheromone_update = enabled;
        self
    }

    /// Sets the uniform starting trail value.
    pub fn with_initial_pheromone(mut self, value: f64) -> Self {
        self.initial_pheromone = value;
        self
    }

    /// Sets `Q` in the offline deposit `Q / tour_cost`.
    pub fn with_deposit_weight(mut self, q: f64) -> Self {
        self.deposit_weight = q;
        self
    }

    /// Sets the fixed per-edge online increment.
    pub fn with_online_deposit(mut self, amount: f64) -> Self {
        self.online_deposit = amount;
        self
    }

    /// Sets the evaporation floor.
    pub fn with_min_pheromone(mut self, floor: f64) -> Self {
        self.min_pheromone = floor;
        self
    }

    /// Enables or disables parallel tour construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Offline deposit rule derived from [`deposit_weight`](Self::deposit_weight).
    pub fn deposit_policy(&self) -> DepositPolicy {
        DepositPolicy::InverseCost {
            weight: self.deposit_weight,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AcoResult<()> {
        if self.population_size == 0 {
            return Err(AcoError::config("population_size must be positive"));
        }
        if self.max_iterations == 0 {
            return Err(AcoError::config("max_iterations must be positive"));
        }
        let p = self.pheromone_persistence;
        if !(p > 0.0 && p <= 1.0) {
            return Err(AcoError::config(format!(
                "pheromone_persistence must be in (0, 1], got {p}"
            )));
        }
        if !(self.alpha >= 0.0 && self.alpha.is_finite()) {
            return Err(AcoError::config(format!(
                "alpha must be finite and non-negative, got {}",
                self.alpha
            )));
        }
        if !(self.beta >= 0.0 && self.beta.is_finite()) {
            return Err(AcoError::config(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if !(self.initial_pheromone > 0.0 && self.initial_pheromone.is_finite()) {
            return Err(AcoError::config("initial_pheromone must be positive"));
        }
        if !(self.deposit_weight > 0.0 && self.deposit_weight.is_finite()) {
            return Err(AcoError::config("deposit_weight must be positive"));
        }
        if !(self.online_deposit >= 0.0 && self.online_deposit.is_finite()) {
            return Err(AcoError::config("online_deposit must be non-negative"));
        }
        if !(self.min_pheromone > 0.0 && self.min_pheromone <= self.initial_pheromone) {
            return Err(AcoError::config(
                "min_pheromone must be positive and not exceed initial_pheromone",
            ));
        }
        Ok(())
    }
}
