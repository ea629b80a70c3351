//! Random-proportional transition rule.
//!
//! An agent at city `i` moves to an unvisited city `j` with probability
//! proportional to `T(i,j)^alpha * (1/d(i,j))^beta`.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"

use super::pheromone::PheromoneTable;
use super::types::CityMap;
use rand::Rng;

/// Distance substituted for coincident distinct cities so the heuristic
/// term stays finite.
pub const MIN_DISTANCE: f64 = 1e-10;

/// Turns raw weights into a probability distribution.
///
/// Weights are scaled by the largest finite one before summing, so finite
/// weights near `f64::MAX` keep their proportions. Degenerate inputs still
/// yield a usable distribution:
///
/// - if any weight is `+inf`, the infinite ones share all the mass;
/// - if every weight is zero, the distribution is uniform.
///
/// `NaN` and negative weights count as zero.
///
/// # Examples
///
/// ```
/// use u_antcolony::aco::normalize_weights;
///
/// assert_eq!(normalize_weights(&[1.0, 1.0, 2.0]), vec![0.25, 0.25, 0.5]);
/// assert_eq!(normalize_weights(&[0.0, 0.0]), vec![0.5, 0.5]);
/// ```
pub fn normalize_weights(weights: &[f64]) -> Vec<f64> {
    let n = weights.len();
    let infinite = weights.iter().filter(|&&w| w == f64::INFINITY).count();
    if infinite > 0 {
        let share = 1.0 / infinite as f64;
        return weights
            .iter()
            .map(|&w| if w == f64::INFINITY { share } else { 0.0 })
            .collect();
    }

    let clean = |w: f64| if w > 0.0 { w } else { 0.0 };
    let max = weights.iter().map(|&w| clean(w)).fold(0.0, f64::max);
    if max <= 0.0 {
        return vec![1.0 / n as f64; n];
    }

    let scaled: Vec<f64> = weights.iter().map(|&w| clean(w) / max).collect();
    let total: f64 = scaled.iter().sum();
    scaled.into_iter().map(|w| w / total).collect()
}

/// Roulette-wheel choice over non-negative weights.
///
/// Normalizes with [`normalize_weights`], draws one uniform number in
/// `[0, 1)` and walks the cumulative sum, so the sampled distribution is
/// exactly the normalized one.
///
/// # Panics
/// Panics if `weights` is empty.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_antcolony::aco::weighted_choice;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// assert_eq!(weighted_choice(&[0.0, 2.0, 0.0], &mut rng), 1);
/// ```
pub fn weighted_choice<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    assert!(!weights.is_empty(), "cannot choose from empty weights");

    let probabilities = normalize_weights(weights);
    let total: f64 = probabilities.iter().sum();
    let target = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    let mut last_positive = 0;
    for (i, &p) in probabilities.iter().enumerate() {
        if p == 0.0 {
            continue;
        }
        cumulative += p;
        last_positive = i;
        if target < cumulative {
            return i;
        }
    }

    // Rounding can leave `target` just past the final cumulative sum.
    last_positive
}

/// Transition rule parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRule {
    /// Pheromone exponent.
    pub alpha: f64,
    /// Heuristic (inverse distance) exponent.
    pub beta: f64,
}

impl TransitionRule {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Unnormalized desirability of edge `(i, j)`.
    pub fn weight(&self, cities: &CityMap, table: &PheromoneTable, i: usize, j: usize) -> f64 {
        let d = cities.distance(i, j).max(MIN_DISTANCE);
        table.get(i, j).powf(self.alpha) * (1.0 / d).powf(self.beta)
    }

    /// Move probabilities from `current` to each of `candidates`, in order.
    ///
    /// This is the distribution [`select`](Self::select) samples from,
    /// including the overflow and underflow cases of [`normalize_weights`].
    pub fn probabilities(
        &self,
        cities: &CityMap,
        table: &PheromoneTable,
        current: usize,
        candidates: &[usize],
    ) -> Vec<f64> {
        normalize_weights(&self.weights(cities, table, current, candidates))
    }

    /// Picks the next city among `candidates`.
    ///
    /// # Panics
    /// Panics if `candidates` is empty; the caller stops once every city
    /// has been visited.
    pub fn select<R: Rng>(
        &self,
        cities: &CityMap,
        table: &PheromoneTable,
        current: usize,
        candidates: &[usize],
        rng: &mut R,
    ) -> usize {
        let weights = self.weights(cities, table, current, candidates);
        candidates[weighted_choice(&weights, rng)]
    }

    fn weights(
        &self,
        cities: &CityMap,
        table: &PheromoneTable,
        current: usize,
        candidates: &[usize],
    ) -> Vec<f64> {
        candidates
            .iter()
            .map(|&j| self.weight(cities, table, current, j))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::City;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line() -> CityMap {
        CityMap::new(vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 1.0, 0.0),
            City::new(2, 2.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_weighted_choice_distribution() {
        let mut rng = StdRng::seed_from_u64(42);
        let weights = [1.0, 3.0];
        let trials = 20_000;
        let hits = (0..trials)
            .filter(|_| weighted_choice(&weights, &mut rng) == 1)
            .count();
        let ratio = hits as f64 / trials as f64;
        assert!((ratio - 0.75).abs() < 0.02, "expected ~0.75, got {ratio}");
    }

    #[test]
    fn test_weighted_choice_skips_zero_weights() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let i = weighted_choice(&[0.0, 1.0, 0.0, 1.0, 0.0], &mut rng);
            assert!(i == 1 || i == 3);
        }
    }

    #[test]
    fn test_weighted_choice_all_zero_is_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0usize; 4];
        for _ in 0..8000 {
            counts[weighted_choice(&[0.0; 4], &mut rng)] += 1;
        }
        for c in counts {
            assert!(c > 1700 && c < 2300, "uniform fallback skewed: {counts:?}");
        }
    }

    #[test]
    fn test_weighted_choice_infinite_weight_wins() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(weighted_choice(&[1.0, f64::INFINITY, 5.0], &mut rng), 1);
        }
    }

    #[test]
    fn test_weighted_choice_huge_finite_weights_keep_proportions() {
        let weights = [1.5e308, 1.5e308, 1.0];
        let p = normalize_weights(&weights);
        assert!((p[0] - 0.5).abs() < 1e-12);
        assert!((p[1] - 0.5).abs() < 1e-12);
        assert!(p[2] < 1e-300);

        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0usize; 3];
        for _ in 0..3000 {
            counts[weighted_choice(&weights, &mut rng)] += 1;
        }
        assert_eq!(counts[2], 0, "negligible weight was picked: {counts:?}");
        assert!(counts[0] > 1300 && counts[1] > 1300, "skewed split: {counts:?}");
    }

    #[test]
    fn test_normalize_weights_cleans_nan_and_negative() {
        assert_eq!(
            normalize_weights(&[f64::NAN, -1.0, 2.0]),
            vec![0.0, 0.0, 1.0]
        );
        assert_eq!(
            normalize_weights(&[1.0, f64::INFINITY, f64::INFINITY]),
            vec![0.0, 0.5, 0.5]
        );
    }

    #[test]
    fn test_weighted_choice_reproducible() {
        let weights = [0.2, 0.5, 0.1, 0.9];
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        let xs: Vec<usize> = (0..50).map(|_| weighted_choice(&weights, &mut a)).collect();
        let ys: Vec<usize> = (0..50).map(|_| weighted_choice(&weights, &mut b)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_probabilities_prefer_near_city() {
        let cities = line();
        let table = PheromoneTable::new(3, 1.0, 1e-10);
        let rule = TransitionRule::new(1.0, 2.0);
        let p = rule.probabilities(&cities, &table, 0, &[1, 2]);
        // (1/1)^2 : (1/2)^2 = 4 : 1
        assert!((p[0] - 0.8).abs() < 1e-12);
        assert!((p[1] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_follow_pheromone() {
        let cities = line();
        let mut table = PheromoneTable::new(3, 1.0, 1e-10);
        table.set(0, 2, 3.0);
        let rule = TransitionRule::new(1.0, 0.0);
        let p = rule.probabilities(&cities, &table, 0, &[1, 2]);
        assert!((p[0] - 0.25).abs() < 1e-12);
        assert!((p[1] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_coincident_cities_weight_finite() {
        let cities = CityMap::new(vec![
            City::new(0, 1.0, 1.0),
            City::new(1, 1.0, 1.0),
            City::new(2, 5.0, 1.0),
        ])
        .unwrap();
        let table = PheromoneTable::new(3, 1.0, 1e-10);
        let rule = TransitionRule::new(1.0, 2.0);
        let w = rule.weight(&cities, &table, 0, 1);
        assert!(w.is_finite() && w > 0.0);

        let mut rng = StdRng::seed_from_u64(1);
        let next = rule.select(&cities, &table, 0, &[1, 2], &mut rng);
        assert!(next == 1 || next == 2);
    }

    #[test]
    fn test_probabilities_match_selection_on_overflow() {
        let cities = CityMap::new(vec![
            City::new(0, 1.0, 1.0),
            City::new(1, 1.0, 1.0),
            City::new(2, 5.0, 1.0),
        ])
        .unwrap();
        let table = PheromoneTable::new(3, 1.0, 1e-10);
        let rule = TransitionRule::new(1.0, 40.0);
        assert_eq!(rule.weight(&cities, &table, 0, 1), f64::INFINITY);

        let p = rule.probabilities(&cities, &table, 0, &[1, 2]);
        assert_eq!(p, vec![1.0, 0.0]);

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            assert_eq!(rule.select(&cities, &table, 0, &[1, 2], &mut rng), 1);
        }
    }

    #[test]
    fn test_underflow_falls_back_to_uniform() {
        let cities = CityMap::new(vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 1e6, 0.0),
            City::new(2, 0.0, 1e6),
        ])
        .unwrap();
        let table = PheromoneTable::new(3, 1e-10, 1e-10);
        let rule = TransitionRule::new(50.0, 50.0);
        let p = rule.probabilities(&cities, &table, 0, &[1, 2]);
        assert_eq!(p, vec![0.5, 0.5]);

        let mut rng = StdRng::seed_from_u64(3);
        let next = rule.select(&cities, &table, 0, &[1, 2], &mut rng);
        assert!(next == 1 || next == 2);
    }
}
