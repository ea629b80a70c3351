//! Symmetric pheromone trail matrix.

/// How much pheromone a tour deposits on each of its edges.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DepositPolicy {
    /// `weight / tour_cost` per edge (Ant System's `Q / L`).
    InverseCost {
        /// Proportionality constant `Q`.
        weight: f64,
    },

    /// A fixed increment per edge, independent of the tour cost.
    Fixed(f64),
}

impl DepositPolicy {
    /// Amount deposited on every edge of a tour with the given cost.
    pub fn amount(&self, tour_cost: f64) -> f64 {
        match *self {
            DepositPolicy::InverseCost { weight } => {
                if tour_cost > 0.0 {
                    weight / tour_cost
                } else {
                    weight
                }
            }
            DepositPolicy::Fixed(amount) => amount,
        }
    }
}

/// Square matrix of trail strengths between city pairs.
///
/// `get(i, j) == get(j, i)` holds after every operation: all writes go
/// through [`set`](PheromoneTable::set), which updates both halves, and
/// evaporation scales every entry by the same factor. Values never drop
/// below the floor given at construction, so every unvisited city keeps a
/// non-zero selection probability.
///
/// # Examples
///
/// ```
/// use u_antcolony::aco::{DepositPolicy, PheromoneTable};
///
/// let mut table = PheromoneTable::new(3, 1.0, 1e-10);
/// table.evaporate(0.5);
/// table.deposit(&[0, 1, 2], 4.0, DepositPolicy::InverseCost { weight: 2.0 });
/// assert_eq!(table.get(0, 1), 1.0);
/// assert_eq!(table.get(1, 0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneTable {
    n: usize,
    values: Vec<f64>,
    floor: f64,
}

impl PheromoneTable {
    /// Creates an `n x n` table seeded uniformly with `initial`.
    ///
    /// `floor` is the smallest value any entry may take.
    pub fn new(n: usize, initial: f64, floor: f64) -> Self {
        let floor = floor.max(f64::MIN_POSITIVE);
        Self {
            n,
            values: vec![initial.max(floor); n * n],
            floor,
        }
    }

    /// Number of cities the table covers.
    pub fn size(&self) -> usize {
        self.n
    }

    /// The smallest value an entry can hold.
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Current trail strength on edge `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Writes `value` to both `(i, j)` and `(j, i)`.
    ///
    /// Values below the floor are raised to it.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let value = value.max(self.floor);
        self.values[i * self.n + j] = value;
        self.values[j * self.n + i] = value;
    }

    /// Adds `amount` to edge `(i, j)` in both directions.
    pub fn add(&mut self, i: usize, j: usize, amount: f64) {
        let current = self.get(i, j);
        self.set(i, j, current + amount);
    }

    /// Multiplies every entry by `persistence`, flooring at the minimum.
    pub fn evaporate(&mut self, persistence: f64) {
        let floor = self.floor;
        for v in &mut self.values {
            *v = (*v * persistence).max(floor);
        }
    }

    /// Reinforces every edge of the closed `tour`, including the closing
    /// edge back to its first city.
    pub fn deposit(&mut self, tour: &[usize], tour_cost: f64, policy: DepositPolicy) {
        if tour.len() < 2 {
            return;
        }
        let amount = policy.amount(tour_cost);
        for w in tour.windows(2) {
            self.add(w[0], w[1], amount);
        }
        self.add(tour[tour.len() - 1], tour[0], amount);
    }

    /// Whether `get(i, j) == get(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| ((i + 1)..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }
}
