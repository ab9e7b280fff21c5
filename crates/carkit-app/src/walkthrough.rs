//! Concrete vehicle holder and the walkthrough service

use carkit_domain::variant::{
    CarWithCargoTransport, CarWithCargoTransportAndFogLights, CarWithFogLights,
    CarWithStreetCleaner, ThreeWheeler,
};
use carkit_domain::{
    Car, CargoTransport, FogLights, StreetSweeping, VariantKind, Vehicle, VehicleSummary,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Any variant the catalog can build
#[derive(Debug, Clone, PartialEq)]
pub enum AnyVehicle {
    StreetCleaner(CarWithStreetCleaner),
    CargoTransport(CarWithCargoTransport),
    FogLights(CarWithFogLights),
    CargoTransportAndFogLights(CarWithCargoTransportAndFogLights),
    ThreeWheeler(ThreeWheeler),
}

impl AnyVehicle {
    /// Wrap a car in the variant named by `kind`, with default equipment
    pub fn build(kind: VariantKind, car: Car) -> Self {
        match kind {
            VariantKind::StreetCleaner => {
                AnyVehicle::StreetCleaner(CarWithStreetCleaner::new(car))
            }
            VariantKind::CargoTransport => {
                AnyVehicle::CargoTransport(CarWithCargoTransport::new(car))
            }
            VariantKind::FogLights => AnyVehicle::FogLights(CarWithFogLights::new(car)),
            VariantKind::CargoTransportAndFogLights => {
                AnyVehicle::CargoTransportAndFogLights(CarWithCargoTransportAndFogLights::new(car))
            }
            VariantKind::ThreeWheeler => AnyVehicle::ThreeWheeler(ThreeWheeler::new(car)),
        }
    }

    pub fn as_vehicle(&self) -> &dyn Vehicle {
        match self {
            AnyVehicle::StreetCleaner(v) => v,
            AnyVehicle::CargoTransport(v) => v,
            AnyVehicle::FogLights(v) => v,
            AnyVehicle::CargoTransportAndFogLights(v) => v,
            AnyVehicle::ThreeWheeler(v) => v,
        }
    }

    pub fn as_vehicle_mut(&mut self) -> &mut dyn Vehicle {
        match self {
            AnyVehicle::StreetCleaner(v) => v,
            AnyVehicle::CargoTransport(v) => v,
            AnyVehicle::FogLights(v) => v,
            AnyVehicle::CargoTransportAndFogLights(v) => v,
            AnyVehicle::ThreeWheeler(v) => v,
        }
    }

    pub fn summary(&self) -> VehicleSummary {
        VehicleSummary::of(self.as_vehicle())
    }

    /// Invoke each owned capability once, returning the operation names
    fn use_capabilities(&mut self) -> Vec<&'static str> {
        match self {
            AnyVehicle::StreetCleaner(v) => {
                v.sweep_street();
                vec!["sweep_street"]
            }
            AnyVehicle::CargoTransport(v) => {
                v.carry_cargo();
                vec!["carry_cargo"]
            }
            AnyVehicle::FogLights(v) => {
                v.turn_on_fog_lights();
                vec!["turn_on_fog_lights"]
            }
            AnyVehicle::CargoTransportAndFogLights(v) => {
                v.carry_cargo();
                v.turn_on_fog_lights();
                vec!["carry_cargo", "turn_on_fog_lights"]
            }
            AnyVehicle::ThreeWheeler(_) => Vec::new(),
        }
    }
}

/// Outcome of walking a vehicle through its operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Walkthrough {
    pub summary: VehicleSummary,
    /// Operations invoked, in call order
    pub operations: Vec<String>,
    /// Whether the summary read after the walk matched the one before it
    pub unchanged: bool,
}

const HOOKS: [&str; 5] = [
    "drive",
    "service",
    "switch_gear",
    "turn_on_headlights",
    "turn_on_wipers",
];

/// Call every behavioural hook and every owned capability once.
pub fn walk_through(vehicle: &mut AnyVehicle) -> Walkthrough {
    let before = vehicle.summary();
    debug!(kind = %before.kind, brand = %before.brand, "walking through vehicle");

    {
        let v = vehicle.as_vehicle_mut();
        v.drive();
        v.service();
        v.switch_gear();
        v.turn_on_headlights();
        v.turn_on_wipers();
    }
    let mut operations: Vec<String> = HOOKS.iter().map(|s| s.to_string()).collect();
    operations.extend(vehicle.use_capabilities().into_iter().map(String::from));

    let after = vehicle.summary();
    let unchanged = after == before;
    if !unchanged {
        warn!(kind = %before.kind, "vehicle attributes changed during walkthrough");
    }

    Walkthrough {
        summary: after,
        operations,
        unchanged,
    }
}
