//! Text input and output around the colony.
//!
//! The engine itself never touches these; they read `id x y` listings and
//! render results for people and plotting tools.

use super::pheromone::PheromoneTable;
use super::runner::AcoSolution;
use super::types::{City, CityMap};
use crate::error::{AcoError, AcoResult};
use std::fmt::Write;

/// Parses one city per line in `id x y` form.
///
/// Blank lines and lines starting with `#` are skipped. Columns may be
/// separated by any whitespace.
///
/// # Examples
///
/// ```
/// use u_antcolony::aco::parse_cities;
///
/// let cities = parse_cities("1 0 0\n2 3.5 4\n").unwrap();
/// assert_eq!(cities.len(), 2);
/// assert_eq!(cities[1].x, 3.5);
/// ```
pub fn parse_cities(input: &str) -> AcoResult<Vec<City>> {
    let mut cities = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(AcoError::parse(
                line_no,
                format!("expected 3 columns, got {}", fields.len()),
            ));
        }

        let id = fields[0]
            .parse::<usize>()
            .map_err(|e| AcoError::parse(line_no, format!("bad id '{}': {e}", fields[0])))?;
        let x = parse_coord(fields[1], line_no)?;
        let y = parse_coord(fields[2], line_no)?;
        cities.push(City::new(id, x, y));
    }
    Ok(cities)
}

fn parse_coord(field: &str, line_no: usize) -> AcoResult<f64> {
    let v = field
        .parse::<f64>()
        .map_err(|e| AcoError::parse(line_no, format!("bad coordinate '{field}': {e}")))?;
    if !v.is_finite() {
        return Err(AcoError::parse(
            line_no,
            format!("coordinate '{field}' is not finite"),
        ));
    }
    Ok(v)
}

/// One `id: (x, y)` row per city.
pub fn format_cities(cities: &CityMap) -> String {
    let mut out = String::new();
    for c in cities.cities() {
        let _ = writeln!(out, "{:>6}: ({}, {})", c.id, c.x, c.y);
    }
    out
}

/// The pheromone matrix, one row per city position.
///
/// Each row is the row index followed by that row's trail values.
pub fn format_pheromone_table(table: &PheromoneTable) -> String {
    let mut out = String::new();
    for i in 0..table.size() {
        let _ = write!(out, "{i:>4}:");
        for j in 0..table.size() {
            let _ = write!(out, " {:.6}", table.get(i, j));
        }
        out.push('\n');
    }
    out
}

/// Human-readable summary of a run.
pub fn format_solution(solution: &AcoSolution) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Iterations: {}", solution.iterations);
    if solution.cancelled {
        let _ = writeln!(out, "Cancelled:  yes");
    }
    let _ = writeln!(out, "Best cost:  {:.6}", solution.best_cost);

    let mut tour: Vec<String> = solution.best_path.iter().map(|id| id.to_string()).collect();
    if let Some(first) = solution.best_path.first() {
        tour.push(first.to_string());
    }
    let _ = writeln!(out, "Tour:       {}", tour.join(" -> "));
    out
}

/// Coordinates of the best tour, closed back to its start, as a matrix
/// literal with one `x y` row per stop.
///
/// Paste into a plotting tool and plot column 1 against column 2.
/// Ids missing from `cities` are skipped.
pub fn format_solution_matrix(cities: &CityMap, solution: &AcoSolution) -> String {
    let mut out = String::from("[\n");
    let closing = solution.best_path.first();
    for id in solution.best_path.iter().chain(closing) {
        if let Some(pos) = cities.position_of(*id) {
            let c = cities.city(pos);
            let _ = writeln!(out, "  {} {}", c.x, c.y);
        }
    }
    out.push(']');
    out
}
