//! Weather record store and its JSON persistence.

pub mod persistence;
pub mod registry;

pub use persistence::{load, save, Snapshot, SAVED_AT_FORMAT};
pub use registry::{CityRegistry, CityUpdate, LoadSummary, UpdateField, UpdateReport};
