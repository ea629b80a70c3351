//! Single-iteration tour construction.

use super::pheromone::PheromoneTable;
use super::transition::TransitionRule;
use super::types::CityMap;
use rand::Rng;

/// A walker that builds one closed tour.
///
/// Created fresh each iteration and dropped once its tour has been
/// evaluated; agents never carry state across iterations.
#[derive(Debug, Clone)]
pub struct Agent {
    current: usize,
    visited: Vec<bool>,
    path: Vec<usize>,
    cost: f64,
    closed: bool,
}

impl Agent {
    /// Places a new agent on city `start` of an `n`-city instance.
    ///
    /// # Panics
    /// Panics if `start >= n`.
    pub fn new(start: usize, n: usize) -> Self {
        let mut visited = vec![false; n];
        visited[start] = true;
        let mut path = Vec::with_capacity(n);
        path.push(start);
        Self {
            current: start,
            visited,
            path,
            cost: 0.0,
            closed: false,
        }
    }

    /// Places a new agent on a uniformly random city.
    pub fn spawn<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self::new(rng.random_range(0..n), n)
    }

    /// City the agent currently stands on.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether every city has been visited.
    pub fn is_complete(&self) -> bool {
        self.path.len() == self.visited.len()
    }

    /// Whether the closing edge back to the start has been walked.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether city `j` has been visited.
    pub fn has_visited(&self, j: usize) -> bool {
        self.visited[j]
    }

    /// Cities not yet visited, in ascending order.
    pub fn unvisited(&self) -> Vec<usize> {
        (0..self.visited.len()).filter(|&j| !self.visited[j]).collect()
    }

    /// Visit order so far, starting with the start city.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Length walked so far; includes the closing edge once closed.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Moves to `next`, returning the traversed edge.
    pub fn visit(&mut self, cities: &CityMap, next: usize) -> (usize, usize) {
        debug_assert!(!self.visited[next], "city {next} visited twice");
        let from = self.current;
        self.cost += cities.distance(from, next);
        self.visited[next] = true;
        self.path.push(next);
        self.current = next;
        (from, next)
    }

    /// Picks the next city with `rule` and moves there.
    ///
    /// # Panics
    /// Panics if the agent has already visited every city.
    pub fn step<R: Rng>(
        &mut self,
        cities: &CityMap,
        table: &PheromoneTable,
        rule: &TransitionRule,
        rng: &mut R,
    ) -> (usize, usize) {
        let candidates = self.unvisited();
        let next = rule.select(cities, table, self.current, &candidates, rng);
        self.visit(cities, next)
    }

    /// Walks the closing edge back to the start city.
    pub fn close(&mut self, cities: &CityMap) -> (usize, usize) {
        debug_assert!(self.is_complete(), "closing an incomplete tour");
        let from = self.current;
        let start = self.path[0];
        if !self.closed {
            self.cost += cities.distance(from, start);
            self.closed = true;
            self.current = start;
        }
        (from, start)
    }

    /// Every edge of the closed tour, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.path.len();
        (0..n).map(move |k| (self.path[k], self.path[(k + 1) % n]))
    }
}

/// Builds a complete tour, depositing `online_deposit` on each edge as
/// soon as it is traversed (closing edge included).
///
/// With `online_deposit == None` the table is only read.
pub fn construct_tour<R: Rng>(
    cities: &CityMap,
    table: &mut PheromoneTable,
    rule: &TransitionRule,
    online_deposit: Option<f64>,
    rng: &mut R,
) -> Agent {
    let mut agent = Agent::spawn(cities.len(), rng);
    while !agent.is_complete() {
        let (from, to) = agent.step(cities, table, rule, rng);
        if let Some(amount) = online_deposit {
            table.add(from, to, amount);
        }
    }
    let (from, to) = agent.close(cities);
    if let Some(amount) = online_deposit {
        table.add(from, to, amount);
    }
    agent
}

/// Builds a complete tour against a read-only snapshot of the table.
///
/// Used when agents run concurrently; any online deposits are applied
/// afterwards with [`apply_online_deposit`].
pub fn construct_on_snapshot<R: Rng>(
    cities: &CityMap,
    table: &PheromoneTable,
    rule: &TransitionRule,
    rng: &mut R,
) -> Agent {
    let mut agent = Agent::spawn(cities.len(), rng);
    while !agent.is_complete() {
        agent.step(cities, table, rule, rng);
    }
    agent.close(cities);
    agent
}

/// Deposits `amount` on every edge `agent` walked.
pub fn apply_online_deposit(table: &mut PheromoneTable, agent: &Agent, amount: f64) {
    for (from, to) in agent.edges() {
        table.add(from, to, amount);
    }
}
