use crate::model::{Project, Selection};
use crate::stats;

pub fn display_projects(budget: i64, projects: &[Project]) {
    println!("Total investment budget: {}", budget);
    println!("Candidate projects:");
    for p in projects {
        println!("  - {}", p);
    }
    println!();
}

pub fn display_selection(selection: &Selection) {
    if selection.is_empty() {
        println!("No project fits in the budget");
    } else {
        println!("Selected projects:");
        for p in &selection.projects {
            println!("  - {}", p);
        }
    }
    println!();
}

pub fn display_stats(budget: i64, projects: &[Project], selection: &Selection) {
    let stats = stats::statistics(budget, projects, selection);
    println!(
        "Projects selected/candidates: {}/{}",
        stats.selected, stats.candidates
    );
    println!("Total investment: {}", stats.total_cost);
    println!("Total net value: {}", stats.total_value);
    println!(
        "Remaining budget: {} ({:.2}% of the budget used)",
        stats.remaining, stats.budget_use
    );
}
