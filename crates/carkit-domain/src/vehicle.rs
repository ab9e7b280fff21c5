//! The `Vehicle` trait and a serializable snapshot of any vehicle

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::capability::Capability;
use crate::model::Car;
use crate::variant::VariantKind;

/// Common contract for every car variant.
///
/// Accessors default to the owned [`Car`]. A variant may override one to fix
/// the value for its type, but the signature is shared, so callers written
/// against `dyn Vehicle` always get the same result type back.
pub trait Vehicle {
    fn car(&self) -> &Car;

    fn kind(&self) -> VariantKind;

    /// Optional capabilities this vehicle carries
    fn capabilities(&self) -> Vec<Capability> {
        Vec::new()
    }

    fn brand(&self) -> &str {
        self.car().brand()
    }

    fn model(&self) -> &str {
        self.car().model()
    }

    fn color(&self) -> &str {
        self.car().color()
    }

    fn body_type(&self) -> &str {
        self.car().body_type()
    }

    fn number_of_wheels(&self) -> i32 {
        self.car().number_of_wheels()
    }

    fn fuel_type(&self) -> &str {
        self.car().fuel_type()
    }

    fn transmission_type(&self) -> &str {
        self.car().transmission_type()
    }

    fn engine_capacity(&self) -> f64 {
        self.car().engine_capacity()
    }

    fn drive(&mut self);

    fn service(&mut self);

    fn switch_gear(&mut self);

    fn turn_on_headlights(&mut self);

    fn turn_on_wipers(&mut self);
}

/// Record a call to a behavioural hook that has no modelled effect
pub(crate) fn placeholder(kind: VariantKind, hook: &'static str) {
    trace!(kind = kind.label(), hook, "placeholder hook invoked");
}

/// Snapshot of a vehicle as seen through the `Vehicle` trait
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSummary {
    pub kind: VariantKind,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub body_type: String,
    pub number_of_wheels: i32,
    pub fuel_type: String,
    pub transmission_type: String,
    pub engine_capacity: f64,
    pub capabilities: Vec<Capability>,
}

impl VehicleSummary {
    pub fn of(vehicle: &dyn Vehicle) -> Self {
        Self {
            kind: vehicle.kind(),
            brand: vehicle.brand().to_string(),
            model: vehicle.model().to_string(),
            color: vehicle.color().to_string(),
            body_type: vehicle.body_type().to_string(),
            number_of_wheels: vehicle.number_of_wheels(),
            fuel_type: vehicle.fuel_type().to_string(),
            transmission_type: vehicle.transmission_type().to_string(),
            engine_capacity: vehicle.engine_capacity(),
            capabilities: vehicle.capabilities(),
        }
    }
}
