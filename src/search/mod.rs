pub mod filters;
pub mod orchestrator;
pub mod query;
pub mod recent;

pub use filters::{FilterField, FilterState};
pub use orchestrator::SearchOrchestrator;
pub use recent::RecentSearchStore;
