use super::SelectError;
use crate::model::{Project, Selection};

pub trait Algo {
    /// Choose the subset of `projects` with the largest total value whose total
    /// cost does not exceed `budget`. Selected projects keep their input order.
    fn select(&self, budget: i64, projects: &[Project]) -> Result<Selection, SelectError>;

    fn name(&self) -> &'static str;
}

/// Reject negative budgets and projects with a negative cost or value.
pub fn validate(budget: i64, projects: &[Project]) -> Result<(), SelectError> {
    if budget < 0 {
        return Err(SelectError::InvalidInput(format!(
            "budget must not be negative (got {budget})"
        )));
    }
    if let Some((index, project)) = projects.iter().enumerate().find(|(_, p)| !p.is_valid()) {
        return Err(SelectError::InvalidInput(format!(
            "project #{} has a negative amount ({})",
            index + 1,
            project
        )));
    }
    Ok(())
}
