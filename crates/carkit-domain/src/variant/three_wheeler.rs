//! Three-wheeled car

use crate::model::Car;
use crate::variant::VariantKind;
use crate::vehicle::{placeholder, Vehicle};

/// Always reports three wheels, whatever the wrapped car was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreeWheeler {
    car: Car,
}

impl ThreeWheeler {
    pub const WHEELS: i32 = 3;

    pub fn new(car: Car) -> Self {
        Self { car }
    }
}

impl Vehicle for ThreeWheeler {
    fn car(&self) -> &Car {
        &self.car
    }

    fn kind(&self) -> VariantKind {
        VariantKind::ThreeWheeler
    }

    fn number_of_wheels(&self) -> i32 {
        Self::WHEELS
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
