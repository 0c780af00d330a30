pub use self::project::Project;
pub use self::selection::Selection;

mod project;
mod selection;
