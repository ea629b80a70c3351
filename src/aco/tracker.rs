//! Global-best bookkeeping.

/// Best tour seen during one run.
///
/// Replaces its record only on strict improvement, so among equal-cost
/// tours the first one found is kept.
#[derive(Debug, Clone)]
pub struct BestTracker {
    best_path: Vec<usize>,
    best_cost: f64,
}

impl Default for BestTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl BestTracker {
    /// An empty record with cost `+inf`.
    pub fn new() -> Self {
        Self {
            best_path: Vec::new(),
            best_cost: f64::INFINITY,
        }
    }

    /// Offers a candidate; returns `true` if it became the new best.
    pub fn update(&mut self, path: &[usize], cost: f64) -> bool {
        if cost < self.best_cost {
            self.best_path.clear();
            self.best_path.extend_from_slice(path);
            self.best_cost = cost;
            true
        } else {
            false
        }
    }

    /// The best tour so far; empty before the first update.
    pub fn best_path(&self) -> &[usize] {
        &self.best_path
    }

    /// The best cost so far; `+inf` before the first update.
    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// Whether any candidate has been recorded.
    pub fn has_solution(&self) -> bool {
        !self.best_path.is_empty()
    }

    pub fn into_inner(self) -> (Vec<usize>, f64) {
        (self.best_path, self.best_cost)
    }
}
