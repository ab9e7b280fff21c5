//! Car that sweeps streets through an owned cleaner

use crate::capability::{Capability, StreetCleaner, StreetSweeping};
use crate::model::Car;
use crate::variant::VariantKind;
use crate::vehicle::{placeholder, Vehicle};

#[derive(Debug, Clone, PartialEq)]
pub struct CarWithStreetCleaner<S = StreetCleaner> {
    car: Car,
    cleaner: S,
}

impl CarWithStreetCleaner {
    pub fn new(car: Car) -> Self {
        Self::with_cleaner(car, StreetCleaner)
    }
}

impl<S: StreetSweeping> CarWithStreetCleaner<S> {
    pub fn with_cleaner(car: Car, cleaner: S) -> Self {
        Self { car, cleaner }
    }

    pub fn cleaner(&self) -> &S {
        &self.cleaner
    }
}

impl<S: StreetSweeping> StreetSweeping for CarWithStreetCleaner<S> {
    fn sweep_street(&mut self) {
        self.cleaner.sweep_street();
    }
}

impl<S: StreetSweeping> Vehicle for CarWithStreetCleaner<S> {
    fn car(&self) -> &Car {
        &self.car
    }

    fn kind(&self) -> VariantKind {
        VariantKind::StreetCleaner
    }

    fn capabilities(&self) -> Vec<Capability> {
        vec![Capability::StreetSweeping]
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
    struct CountingCleaner {
        sweeps: u32,
    }

    impl StreetSweeping for CountingCleaner {
        fn sweep_street(&mut self) {
            self.sweeps += 1;
        }
    }

    fn sweeper_truck() -> Car {
        Car::new("Isuzu", "Elf", "orange", "truck", 4, "diesel", "manual", 3.0)
    }

    #[test]
    fn test_sweep_delegates_once_to_cleaner() {
        let mut vehicle =
            CarWithStreetCleaner::with_cleaner(sweeper_truck(), CountingCleaner::default());
        vehicle.sweep_street();
        assert_eq!(vehicle.cleaner().sweeps, 1);
    }

    #[test]
    fn test_sweep_leaves_attributes_untouched() {
        let mut vehicle = CarWithStreetCleaner::new(sweeper_truck());
        let before = vehicle.car().clone();
        vehicle.sweep_street();
        assert_eq!(vehicle.car(), &before);
    }

    #[test]
    fn test_reports_street_sweeping() {
        let vehicle = CarWithStreetCleaner::new(sweeper_truck());
        assert_eq!(vehicle.capabilities(), vec![Capability::StreetSweeping]);
        assert_eq!(vehicle.number_of_wheels(), 4);
    }
}
