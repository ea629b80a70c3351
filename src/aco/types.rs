//! City records and the validated instance the colony walks over.

use crate::error::{AcoError, AcoResult};
use std::collections::HashSet;

/// A city with a unique id and planar coordinates.
///
/// Immutable once constructed; cities are plain values owned by a
/// [`CityMap`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Unique identifier within one instance.
    pub id: usize,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl City {
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A validated TSP instance.
///
/// Holds the cities in insertion order together with a cached, symmetric
/// distance matrix. The colony works on positions `0..len()`; ids only
/// appear at the boundary (see [`CityMap::ids_of`]).
///
/// # Examples
///
/// ```
/// use u_antcolony::aco::{City, CityMap};
///
/// let map = CityMap::new(vec![City::new(1, 0.0, 0.0), City::new(2, 3.0, 4.0)]).unwrap();
/// assert_eq!(map.distance(0, 1), 5.0);
/// assert_eq!(map.tour_cost(&[0, 1]), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct CityMap {
    cities: Vec<City>,
    distances: Vec<f64>,
}

impl CityMap {
    /// Builds an instance, rejecting anything on which a tour is undefined.
    ///
    /// # Errors
    ///
    /// [`AcoError::Configuration`] if there are fewer than 2 cities, an id
    /// repeats, or a coordinate is not finite.
    pub fn new(cities: Vec<City>) -> AcoResult<Self> {
        if cities.len() < 2 {
            return Err(AcoError::config(format!(
                "at least 2 cities are required, got {}",
                cities.len()
            )));
        }

        let mut seen = HashSet::with_capacity(cities.len());
        for city in &cities {
            if !seen.insert(city.id) {
                return Err(AcoError::config(format!("duplicate city id {}", city.id)));
            }
            if !city.x.is_finite() || !city.y.is_finite() {
                return Err(AcoError::config(format!(
                    "city {} has non-finite coordinates",
                    city.id
                )));
            }
        }

        let n = cities.len();
        let mut distances = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                distances[i * n + j] = d;
                distances[j * n + i] = d;
            }
        }

        Ok(Self { cities, distances })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always false for a validated instance.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// The cities in insertion order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The city at position `index`.
    pub fn city(&self, index: usize) -> &City {
        &self.cities[index]
    }

    /// Position of the city with the given id.
    pub fn position_of(&self, id: usize) -> Option<usize> {
        self.cities.iter().position(|c| c.id == id)
    }

    /// Distance between the cities at positions `a` and `b`.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.distances[a * self.cities.len() + b]
    }

    /// Distance between two cities looked up by id.
    pub fn distance_by_id(&self, id_a: usize, id_b: usize) -> Option<f64> {
        let a = self.position_of(id_a)?;
        let b = self.position_of(id_b)?;
        Some(self.distance(a, b))
    }

    /// Cost of a closed tour given as positions: consecutive edges plus the
    /// edge from the last city back to the first.
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        if tour.len() < 2 {
            return 0.0;
        }
        let open: f64 = tour.windows(2).map(|w| self.distance(w[0], w[1])).sum();
        open + self.distance(tour[tour.len() - 1], tour[0])
    }

    /// Maps a sequence of positions to city ids.
    pub fn ids_of(&self, tour: &[usize]) -> Vec<usize> {
        tour.iter().map(|&i| self.cities[i].id).collect()
    }
}
