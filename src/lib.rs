pub mod actions;
pub mod catalog;
pub mod config;
pub mod error;
pub mod inventory;
pub mod ledger;
pub mod persistence;
pub mod rng;
pub mod session;
pub mod ui;

pub use catalog::Catalog;
pub use config::GameConfig;
pub use error::{CatalogError, SaveLoadError};
pub use inventory::Inventory;
pub use ledger::Ledger;
pub use persistence::SaveFile;
pub use session::{Ending, Game, GameSummary, Session};
