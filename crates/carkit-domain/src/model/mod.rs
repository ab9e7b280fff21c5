//! Domain model types

pub mod car;

pub use car::{Car, CarSpec};
