//! Car with both cargo transport and fog lights

use crate::capability::{Capability, CargoHold, CargoTransport, FogLamps, FogLights};
use crate::model::Car;
use crate::variant::VariantKind;
use crate::vehicle::{placeholder, Vehicle};

/// The two capabilities are independent collaborators; either can be
/// swapped without touching the other.
#[derive(Debug, Clone, PartialEq)]
pub struct CarWithCargoTransportAndFogLights<C = CargoHold, F = FogLamps> {
    car: Car,
    hold: C,
    lamps: F,
}

impl CarWithCargoTransportAndFogLights {
    pub fn new(car: Car) -> Self {
        Self::with_equipment(car, CargoHold, FogLamps)
    }
}

impl<C: CargoTransport, F: FogLights> CarWithCargoTransportAndFogLights<C, F> {
    pub fn with_equipment(car: Car, hold: C, lamps: F) -> Self {
        Self { car, hold, lamps }
    }

    pub fn hold(&self) -> &C {
        &self.hold
    }

    pub fn lamps(&self) -> &F {
        &self.lamps
    }
}

impl<C: CargoTransport, F: FogLights> CargoTransport for CarWithCargoTransportAndFogLights<C, F> {
    fn carry_cargo(&mut self) {
        self.hold.carry_cargo();
    }
}

impl<C: CargoTransport, F: FogLights> FogLights for CarWithCargoTransportAndFogLights<C, F> {
    fn turn_on_fog_lights(&mut self) {
        self.lamps.turn_on_fog_lights();
    }
}

impl<C: CargoTransport, F: FogLights> Vehicle for CarWithCargoTransportAndFogLights<C, F> {
    fn car(&self) -> &Car {
        &self.car
    }

    fn kind(&self) -> VariantKind {
        VariantKind::CargoTransportAndFogLights
    }

    fn capabilities(&self) -> Vec<Capability> {
        vec![Capability::CargoTransport, Capability::FogLights]
    }

    fn drive(&mut self) {
        placeholder(self.kind(), "drive");
    }

    fn service(&mut self) {
        placeholder(self.kind(), "service");
    }

    fn switch_gear(&mut self) {
        placeholder(self.kind(), "switch_gear");
    }

    fn turn_on_headlights(&mut self) {
        placeholder(self.kind(), "turn_on_headlights");
    }

    fn turn_on_wipers(&mut self) {
        placeholder(self.kind(), "turn_on_wipers");
    }
}
