// Re-export modules
pub mod page;
pub mod runner;
pub mod set;
pub mod sets;
pub mod utils;

// Re-export commonly used types for convenience
pub use page::{NavigationHook, Page};
pub use runner::{Action, ActionRunner};
pub use set::{PageSet, UserAgentType};
pub use sets::test_set::TestPageSet;
