pub mod controller;
pub mod slot;
pub mod store;

pub use controller::{nav_entries, Screen};
pub use slot::BrowserSlot;
pub use store::ProgressionStore;

/// Store type used by the running app.
pub type PortfolioStore = ProgressionStore<BrowserSlot>;
