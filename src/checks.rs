use crate::model::{Project, Selection};
use eyre::{Error, bail};
use std::collections::HashMap;

pub fn ensure_feasible(budget: i64, selection: &Selection) -> Result<(), Error> {
    if selection.total_cost() > budget {
        bail!(
            "selected projects cost {} which exceeds the budget of {}",
            selection.total_cost(),
            budget
        );
    }
    Ok(())
}

/// Every selected project must come from the candidates, duplicates counted.
pub fn ensure_subset(projects: &[Project], selection: &Selection) -> Result<(), Error> {
    let mut available: HashMap<Project, usize> = HashMap::new();
    for p in projects {
        *available.entry(*p).or_default() += 1;
    }
    for p in &selection.projects {
        match available.get_mut(p) {
            Some(n) if *n > 0 => *n -= 1,
            _ => bail!("selected project ({}) is not a candidate", p),
        }
    }
    Ok(())
}
