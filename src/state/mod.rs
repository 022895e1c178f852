pub mod catalog;
pub mod debounce;
pub mod menu;

pub use catalog::{CatalogLoader, CatalogSource};
pub use debounce::{Debouncer, Scheduler, TimeoutScheduler};
pub use menu::{MenuAction, MenuPhase, MenuState};
