//! Car that carries cargo

use crate::capability::{Capability, CargoHold, CargoTransport};
use crate::model::Car;
use crate::variant::VariantKind;
use crate::vehicle::{placeholder, Vehicle};

#[derive(Debug, Clone, PartialEq)]
pub struct CarWithCargoTransport<C = CargoHold> {
    car: Car,
    hold: C,
}

impl CarWithCargoTransport {
    pub fn new(car: Car) -> Self {
        Self::with_hold(car, CargoHold)
    }
}

impl<C: CargoTransport> CarWithCargoTransport<C> {
    pub fn with_hold(car: Car, hold: C) -> Self {
        Self { car, hold }
    }

    pub fn hold(&self) -> &C {
        &self.hold
    }
}

impl<C: CargoTransport> CargoTransport for CarWithCargoTransport<C> {
    fn carry_cargo(&mut self) {
        self.hold.carry_cargo();
    }
}

impl<C: CargoTransport> Vehicle for CarWithCargoTransport<C> {
    fn car(&self) -> &Car {
        &self.car
    }

    fn kind(&self) -> VariantKind {
        VariantKind::CargoTransport
    }

    fn capabilities(&self) -> Vec<Capability> {
        vec![Capability::CargoTransport]
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
    struct CountingHold {
        loads: u32,
    }

    impl CargoTransport for CountingHold {
        fn carry_cargo(&mut self) {
            self.loads += 1;
        }
    }

    #[test]
    fn test_carry_cargo_delegates_once() {
        let car = Car::new("Ford", "Transit", "white", "van", 4, "diesel", "manual", 2.2);
        let mut van = CarWithCargoTransport::with_hold(car.clone(), CountingHold::default());
        van.carry_cargo();
        assert_eq!(van.hold().loads, 1);
        assert_eq!(van.car(), &car);
    }
}
