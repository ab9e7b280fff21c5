//! Carkit application layer
//!
//! Loads car catalogs, builds the matching variants and walks them through
//! their operations.

pub mod catalog;
pub mod config;
pub mod showcase;
pub mod walkthrough;

pub use catalog::{CarCatalog, CatalogEntry};
pub use config::Config;
pub use showcase::showcase_catalog;
pub use walkthrough::{walk_through, AnyVehicle, Walkthrough};
