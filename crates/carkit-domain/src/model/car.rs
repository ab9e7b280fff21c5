//! Car entity definition

use serde::{Deserialize, Serialize};

/// Plain attribute record used to describe a car in catalogs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarSpec {
    pub brand: String,
    pub model: String,
    pub color: String,
    pub body_type: String,
    pub number_of_wheels: i32,
    pub fuel_type: String,
    pub transmission_type: String,
    /// Engine displacement in litres
    pub engine_capacity: f64,
}

/// Immutable car entity
///
/// All attributes are fixed at construction. Values are stored as given,
/// without validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Car {
    spec: CarSpec,
}

impl Car {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
        body_type: impl Into<String>,
        number_of_wheels: i32,
        fuel_type: impl Into<String>,
        transmission_type: impl Into<String>,
        engine_capacity: f64,
    ) -> Self {
        Self::from_spec(CarSpec {
            brand: brand.into(),
            model: model.into(),
            color: color.into(),
            body_type: body_type.into(),
            number_of_wheels,
            fuel_type: fuel_type.into(),
            transmission_type: transmission_type.into(),
            engine_capacity,
        })
    }

    pub fn from_spec(spec: CarSpec) -> Self {
        Self { spec }
    }

    /// Borrow the underlying attribute record
    pub fn spec(&self) -> &CarSpec {
        &self.spec
    }

    pub fn brand(&self) -> &str {
        &self.spec.brand
    }

    pub fn model(&self) -> &str {
        &self.spec.model
    }

    pub fn color(&self) -> &str {
        &self.spec.color
    }

    pub fn body_type(&self) -> &str {
        &self.spec.body_type
    }

    pub fn number_of_wheels(&self) -> i32 {
        self.spec.number_of_wheels
    }

    pub fn fuel_type(&self) -> &str {
        &self.spec.fuel_type
    }

    pub fn transmission_type(&self) -> &str {
        &self.spec.transmission_type
    }

    pub fn engine_capacity(&self) -> f64 {
        self.spec.engine_capacity
    }
}

impl From<CarSpec> for Car {
    fn from(spec: CarSpec) -> Self {
        Self::from_spec(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corolla() -> Car {
        Car::new("Toyota", "Corolla", "white", "sedan", 4, "petrol", "automatic", 1.8)
    }

    #[test]
    fn test_accessors_return_constructor_values() {
        let car = corolla();
        assert_eq!(car.brand(), "Toyota");
        assert_eq!(car.model(), "Corolla");
        assert_eq!(car.color(), "white");
        assert_eq!(car.body_type(), "sedan");
        assert_eq!(car.number_of_wheels(), 4);
        assert_eq!(car.fuel_type(), "petrol");
        assert_eq!(car.transmission_type(), "automatic");
        assert_eq!(car.engine_capacity(), 1.8);
    }

    #[test]
    fn test_values_are_not_validated() {
        let car = Car::new("", "", "", "", -2, "", "", -0.5);
        assert_eq!(car.brand(), "");
        assert_eq!(car.number_of_wheels(), -2);
        assert_eq!(car.engine_capacity(), -0.5);
    }

    #[test]
    fn test_identical_arguments_give_equal_but_distinct_cars() {
        let a = corolla();
        let b = corolla();
        assert_eq!(a, b);
        assert!(!std::ptr::eq(&a, &b));
    }

    #[test]
    fn test_from_spec_matches_new() {
        let spec = corolla().spec().clone();
        assert_eq!(Car::from(spec), corolla());
    }

    #[test]
    fn test_serializes_as_flat_record() {
        let json = serde_json::to_value(corolla()).unwrap();
        assert_eq!(json["brand"], "Toyota");
        assert_eq!(json["number_of_wheels"], 4);
        assert!(json.get("spec").is_none());
    }
}
