//! Carkit domain layer
//!
//! A `Car` is an immutable bag of descriptive attributes. Behaviour lives on
//! the [`Vehicle`] trait, and optional concerns such as street sweeping are
//! separate collaborator types that a variant owns and delegates to.

pub mod capability;
pub mod model;
pub mod variant;
pub mod vehicle;

pub use capability::{Capability, CargoTransport, FogLights, StreetSweeping};
pub use model::{Car, CarSpec};
pub use variant::VariantKind;
pub use vehicle::{Vehicle, VehicleSummary};
