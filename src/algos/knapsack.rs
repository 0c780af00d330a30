use super::{Algo, SelectError, validate};
use crate::model::{Project, Selection};
use pathfinding::matrix::Matrix;
use tracing::{debug, instrument, trace};

pub const DEFAULT_MAX_CELLS: usize = 100_000_000;

/// Exact 0/1 knapsack over integer costs, pseudo-polynomial in the budget.
///
/// `best[(n, w)]` holds the largest value reachable with the first `n`
/// projects and a budget of `w`, and `includes[(n, w)]` records whether
/// project `n` is part of that optimum. A project is only included when it
/// strictly improves the value, so among several optima the one leaving
/// later projects out is returned.
pub struct Knapsack {
    max_cells: usize,
}

impl Knapsack {
    pub fn new(max_cells: usize) -> Knapsack {
        Knapsack { max_cells }
    }

    /// Allocate a `rows` × `columns` table without aborting the process when
    /// the host cannot provide the memory.
    fn table<T: Clone>(rows: usize, columns: usize, fill: T) -> Result<Matrix<T>, SelectError> {
        let cells = rows * columns;
        let mut values = Vec::new();
        values.try_reserve_exact(cells).map_err(|e| {
            SelectError::ResourceExhausted(format!("cannot allocate a table of {cells} cells: {e}"))
        })?;
        values.resize(cells, fill);
        Matrix::from_vec(rows, columns, values)
            .map_err(|e| SelectError::ResourceExhausted(format!("cannot build table: {e:?}")))
    }

    /// Table dimensions for `count` projects and `budget`, checked against the
    /// configured ceiling.
    fn dimensions(&self, budget: i64, count: usize) -> Result<(usize, usize), SelectError> {
        let too_large = || {
            SelectError::ResourceExhausted(format!(
                "{count} projects with a budget of {budget} exceed the limit of {} table cells",
                self.max_cells
            ))
        };
        let columns = usize::try_from(budget)
            .ok()
            .and_then(|b| b.checked_add(1))
            .ok_or_else(too_large)?;
        let rows = count + 1;
        match rows.checked_mul(columns) {
            Some(cells) if cells <= self.max_cells => Ok((rows, columns)),
            _ => Err(too_large()),
        }
    }

    /// Project costs as table offsets. A cost which does not fit in `usize`
    /// exceeds any budget the table can hold.
    fn costs(projects: &[Project]) -> Vec<usize> {
        projects
            .iter()
            .map(|p| usize::try_from(p.cost).unwrap_or(usize::MAX))
            .collect()
    }

    #[instrument(skip_all, fields(projects = projects.len(), budget = budget))]
    fn fill(
        &self,
        budget: i64,
        projects: &[Project],
        costs: &[usize],
    ) -> Result<(Matrix<i64>, Matrix<bool>), SelectError> {
        let (rows, columns) = self.dimensions(budget, projects.len())?;
        debug!(cells = rows * columns, "allocating tables");
        let mut best = Self::table(rows, columns, 0i64)?;
        let mut includes = Self::table(rows, columns, false)?;
        for (n, (project, &cost)) in (1..rows).zip(projects.iter().zip(costs)) {
            for w in 0..columns {
                let without = best[(n - 1, w)];
                if cost > w {
                    best[(n, w)] = without;
                    continue;
                }
                let with = project
                    .value
                    .checked_add(best[(n - 1, w - cost)])
                    .ok_or_else(|| {
                        SelectError::ResourceExhausted("total value overflows".to_owned())
                    })?;
                if with > without {
                    best[(n, w)] = with;
                    includes[(n, w)] = true;
                } else {
                    best[(n, w)] = without;
                }
            }
        }
        Ok((best, includes))
    }

    /// Walk back from the last project and the full budget to recover the
    /// selected projects.
    fn backtrace(
        projects: &[Project],
        costs: &[usize],
        includes: &Matrix<bool>,
        budget: usize,
    ) -> Selection {
        let mut w = budget;
        let mut selected = Vec::new();
        for n in (1..=projects.len()).rev() {
            if includes[(n, w)] {
                let project = projects[n - 1];
                trace!(index = n - 1, %project, "project selected");
                selected.push(project);
                w -= costs[n - 1];
            }
        }
        selected.reverse();
        Selection::new(selected)
    }
}

impl Default for Knapsack {
    fn default() -> Self {
        Knapsack::new(DEFAULT_MAX_CELLS)
    }
}

impl Algo for Knapsack {
    fn select(&self, budget: i64, projects: &[Project]) -> Result<Selection, SelectError> {
        validate(budget, projects)?;
        let costs = Self::costs(projects);
        let (best, includes) = self.fill(budget, projects, &costs)?;
        let budget = best.columns - 1;
        let selection = Self::backtrace(projects, &costs, &includes, budget);
        debug_assert_eq!(selection.total_value(), best[(projects.len(), budget)]);
        Ok(selection)
    }

    fn name(&self) -> &'static str {
        "knapsack"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algos::Exhaustive;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn projects(pairs: &[(i64, i64)]) -> Vec<Project> {
        pairs.iter().map(|&(c, v)| Project::new(c, v)).collect()
    }

    /// Best value over every subset, computed independently of both algorithms.
    fn brute_force_value(budget: i64, projects: &[Project]) -> i64 {
        (0u32..1 << projects.len())
            .filter_map(|mask| {
                let chosen = projects
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, p)| *p)
                    .collect::<Vec<_>>();
                let cost: i64 = chosen.iter().map(|p| p.cost).sum();
                (cost <= budget).then(|| chosen.iter().map(|p| p.value).sum())
            })
            .max()
            .unwrap_or(0)
    }

    fn is_ordered_subset(selection: &Selection, projects: &[Project]) -> bool {
        let mut remaining = projects.iter();
        selection
            .projects
            .iter()
            .all(|s| remaining.any(|p| p == s))
    }

    #[test]
    fn test_reference_scenario() {
        let items = projects(&[(6, 30), (3, 14), (4, 16), (2, 9)]);
        let selection = Knapsack::default().select(10, &items).unwrap();
        assert_eq!(selection.total_value(), brute_force_value(10, &items));
        assert_eq!(selection.total_value(), 46);
        assert_eq!(selection.projects, projects(&[(6, 30), (4, 16)]));
        assert!(selection.total_cost() <= 10);
    }

    #[test]
    fn test_zero_budget() {
        let items = projects(&[(1, 1), (2, 2)]);
        let selection = Knapsack::default().select(0, &items).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_no_projects() {
        for budget in [0, 1, 1000] {
            assert!(Knapsack::default().select(budget, &[]).unwrap().is_empty());
        }
    }

    #[test]
    fn test_everything_too_expensive() {
        let items = projects(&[(11, 100), (20, 5), (12, 1)]);
        assert!(Knapsack::default().select(10, &items).unwrap().is_empty());
    }

    #[test]
    fn test_zero_cost_projects() {
        let items = projects(&[(0, 5), (1, 1), (0, 0), (0, 3)]);
        let selection = Knapsack::default().select(0, &items).unwrap();
        assert_eq!(selection.projects, projects(&[(0, 5), (0, 3)]));
        let selection = Knapsack::default().select(1, &items).unwrap();
        assert_eq!(selection.projects, projects(&[(0, 5), (1, 1), (0, 3)]));
    }

    #[test]
    fn test_duplicates_are_distinct() {
        let items = projects(&[(2, 3), (2, 3), (2, 3)]);
        let selection = Knapsack::default().select(4, &items).unwrap();
        assert_eq!(selection.projects, projects(&[(2, 3), (2, 3)]));
    }

    #[test]
    fn test_ties_exclude_later_projects() {
        // Both projects alone are optimal: the last one is not worth including.
        let items = projects(&[(5, 10), (5, 10)]);
        let selection = Knapsack::default().select(5, &items).unwrap();
        assert_eq!(selection.projects, projects(&[(5, 10)]));
    }

    #[test]
    fn test_input_order_is_kept() {
        let items = projects(&[(1, 1), (9, 2), (2, 8), (3, 7), (4, 1)]);
        let selection = Knapsack::default().select(6, &items).unwrap();
        assert_eq!(selection.projects, projects(&[(1, 1), (2, 8), (3, 7)]));
    }

    #[test]
    fn test_negative_input() {
        let algo = Knapsack::default();
        assert!(matches!(
            algo.select(-1, &projects(&[(1, 1)])),
            Err(SelectError::InvalidInput(_))
        ));
        assert!(matches!(
            algo.select(5, &projects(&[(1, 1), (-1, 3)])),
            Err(SelectError::InvalidInput(_))
        ));
        assert!(matches!(
            algo.select(5, &projects(&[(1, -1)])),
            Err(SelectError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_table_too_large() {
        let items = projects(&[(1, 1), (2, 2)]);
        assert!(matches!(
            Knapsack::new(30).select(10, &items),
            Err(SelectError::ResourceExhausted(_))
        ));
        assert!(Knapsack::new(30).select(9, &items).is_ok());
        assert!(matches!(
            Knapsack::default().select(i64::MAX, &items),
            Err(SelectError::ResourceExhausted(_))
        ));
    }

    #[test]
    fn test_cost_far_above_budget() {
        let items = projects(&[(i64::MAX, 100), (3, 4)]);
        let selection = Knapsack::default().select(5, &items).unwrap();
        assert_eq!(selection.projects, projects(&[(3, 4)]));
    }

    #[test]
    fn test_value_overflow() {
        let items = projects(&[(1, i64::MAX), (1, 1)]);
        assert!(matches!(
            Knapsack::default().select(2, &items),
            Err(SelectError::ResourceExhausted(_))
        ));
    }

    #[test]
    fn test_deterministic() {
        let items = projects(&[(3, 4), (4, 5), (2, 3), (5, 6), (1, 1)]);
        let algo = Knapsack::default();
        assert_eq!(algo.select(9, &items), algo.select(9, &items));
    }

    #[test]
    fn test_random_instances_are_optimal() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let knapsack = Knapsack::default();
        let exhaustive = Exhaustive::default();
        for _ in 0..300 {
            let len = rng.random_range(0..=12);
            let items = (0..len)
                .map(|_| Project::new(rng.random_range(0..=15), rng.random_range(0..=40)))
                .collect::<Vec<_>>();
            let budget = rng.random_range(0..=50);
            let selection = knapsack.select(budget, &items).unwrap();
            assert!(selection.total_cost() <= budget);
            assert!(is_ordered_subset(&selection, &items));
            let expected = brute_force_value(budget, &items);
            assert_eq!(selection.total_value(), expected, "{budget} {items:?}");
            assert_eq!(
                exhaustive.select(budget, &items).unwrap().total_value(),
                expected
            );
        }
    }
}
