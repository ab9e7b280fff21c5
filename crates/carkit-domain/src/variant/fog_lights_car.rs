//! Car fitted with fog lights

use crate::capability::{Capability, FogLamps, FogLights};
use crate::model::Car;
use crate::variant::VariantKind;
use crate::vehicle::{placeholder, Vehicle};

#[derive(Debug, Clone, PartialEq)]
pub struct CarWithFogLights<F = FogLamps> {
    car: Car,
    lamps: F,
}

impl CarWithFogLights {
    pub fn new(car: Car) -> Self {
        Self::with_lamps(car, FogLamps)
    }
}

impl<F: FogLights> CarWithFogLights<F> {
    pub fn with_lamps(car: Car, lamps: F) -> Self {
        Self { car, lamps }
    }

    pub fn lamps(&self) -> &F {
        &self.lamps
    }
}

impl<F: FogLights> FogLights for CarWithFogLights<F> {
    fn turn_on_fog_lights(&mut self) {
        self.lamps.turn_on_fog_lights();
    }
}

impl<F: FogLights> Vehicle for CarWithFogLights<F> {
    fn car(&self) -> &Car {
        &self.car
    }

    fn kind(&self) -> VariantKind {
        VariantKind::FogLights
    }

    fn capabilities(&self) -> Vec<Capability> {
        vec![Capability::FogLights]
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

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct CountingLamps {
        switched_on: u32,
    }

    impl FogLights for CountingLamps {
        fn turn_on_fog_lights(&mut self) {
            self.switched_on += 1;
        }
    }

    #[test]
    fn test_fog_lights_delegate_once() {
        let car = Car::new("Volvo", "XC90", "black", "suv", 4, "hybrid", "automatic", 2.0);
        let mut suv = CarWithFogLights::with_lamps(car.clone(), CountingLamps::default());
        suv.turn_on_fog_lights();
        assert_eq!(suv.lamps().switched_on, 1);
        assert_eq!(suv.car(), &car);
        assert_eq!(suv.kind(), VariantKind::FogLights);
    }
}
