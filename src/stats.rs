use crate::model::{Project, Selection};

#[derive(Debug, PartialEq)]
pub struct Statistics {
    pub candidates: usize,
    pub selected: usize,
    pub total_cost: i64,
    pub total_value: i64,
    pub remaining: i64,
    /// Share of the budget spent, in percent. Zero for an empty budget.
    pub budget_use: f64,
}

pub fn statistics(budget: i64, projects: &[Project], selection: &Selection) -> Statistics {
    let total_cost = selection.total_cost();
    Statistics {
        candidates: projects.len(),
        selected: selection.len(),
        total_cost,
        total_value: selection.total_value(),
        remaining: selection.remaining(budget),
        budget_use: if budget > 0 {
            100.0 * total_cost as f64 / budget as f64
        } else {
            0.0
        },
    }
}

#[test]
fn test_statistics() {
    let projects = vec![Project::new(6, 30), Project::new(3, 14), Project::new(4, 16)];
    let selection = Selection::new(vec![projects[0], projects[2]]);
    let stats = statistics(20, &projects, &selection);
    assert_eq!(
        stats,
        Statistics {
            candidates: 3,
            selected: 2,
            total_cost: 10,
            total_value: 46,
            remaining: 10,
            budget_use: 50.0,
        }
    );
    assert_eq!(statistics(0, &projects, &Selection::default()).budget_use, 0.0);
}
