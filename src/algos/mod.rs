pub use self::algo::{Algo, validate};
pub use self::error::SelectError;
pub use self::exhaustive::{DEFAULT_MAX_PROJECTS, Exhaustive};
pub use self::knapsack::{DEFAULT_MAX_CELLS, Knapsack};

mod algo;
mod error;
mod exhaustive;
mod knapsack;
