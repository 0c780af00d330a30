use serde::{Deserialize, Serialize};
use std::fmt;

/// An investment opportunity: what it costs and what it brings back.
///
/// Both amounts are kept signed so that a negative figure read from the
/// input survives loading and can be rejected by the selection algorithm.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Project {
    pub cost: i64,
    pub value: i64,
}

impl Project {
    pub fn new(cost: i64, value: i64) -> Project {
        Project { cost, value }
    }

    pub fn is_valid(&self) -> bool {
        self.cost >= 0 && self.value >= 0
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "investment = {} net value = {}", self.cost, self.value)
    }
}

#[test]
fn test_is_valid() {
    assert!(Project::new(0, 0).is_valid());
    assert!(Project::new(3, 14).is_valid());
    assert!(!Project::new(-1, 14).is_valid());
    assert!(!Project::new(3, -14).is_valid());
}
