use super::Project;

/// Projects retained by a selection algorithm, in input order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Selection {
    pub projects: Vec<Project>,
}

impl Selection {
    pub fn new(projects: Vec<Project>) -> Selection {
        Selection { projects }
    }

    pub fn total_cost(&self) -> i64 {
        self.projects.iter().map(|p| p.cost).sum()
    }

    pub fn total_value(&self) -> i64 {
        self.projects.iter().map(|p| p.value).sum()
    }

    /// Part of the budget left unused by this selection.
    pub fn remaining(&self, budget: i64) -> i64 {
        budget - self.total_cost()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
