pub mod roster_store;
pub mod seed;

pub use roster_store::RosterStore;
