use super::{Algo, SelectError, validate};
use crate::model::{Project, Selection};
use tracing::debug;

pub const DEFAULT_MAX_PROJECTS: usize = 24;

/// Beyond this, enumerating every subset does not finish in reasonable time.
pub const MAX_ENUMERABLE_PROJECTS: usize = 30;

/// Try every subset of projects. Only usable on small inputs, but independent
/// of the budget magnitude.
pub struct Exhaustive {
    max_projects: usize,
}

impl Exhaustive {
    pub fn new(max_projects: usize) -> Exhaustive {
        Exhaustive {
            max_projects: max_projects.min(MAX_ENUMERABLE_PROJECTS),
        }
    }
}

impl Default for Exhaustive {
    fn default() -> Self {
        Exhaustive::new(DEFAULT_MAX_PROJECTS)
    }
}

impl Algo for Exhaustive {
    fn select(&self, budget: i64, projects: &[Project]) -> Result<Selection, SelectError> {
        validate(budget, projects)?;
        if projects.len() > self.max_projects {
            return Err(SelectError::ResourceExhausted(format!(
                "{} projects exceed the limit of {} for an exhaustive search",
                projects.len(),
                self.max_projects
            )));
        }
        debug!(subsets = 1u64 << projects.len(), "enumerating subsets");
        let mut best = (0, 0, 0u64);
        for mask in 1u64..1 << projects.len() {
            let mut cost = 0i64;
            let mut value = 0i64;
            for (i, p) in projects.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    // A cost overflow is over budget anyway.
                    cost = cost.saturating_add(p.cost);
                    value = value.checked_add(p.value).ok_or_else(|| {
                        SelectError::ResourceExhausted("total value overflows".to_owned())
                    })?;
                }
            }
            let (best_value, best_cost, _) = best;
            if cost <= budget && (value > best_value || (value == best_value && cost < best_cost)) {
                best = (value, cost, mask);
            }
        }
        let mask = best.2;
        Ok(Selection::new(
            projects
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, p)| *p)
                .collect(),
        ))
    }

    fn name(&self) -> &'static str {
        "exhaustive"
    }
}
