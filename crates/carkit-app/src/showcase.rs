//! Built-in lineup with one car of every variant

use carkit_types::Result;

use crate::catalog::CarCatalog;

const SHOWCASE_TOML: &str = r#"
[[cars]]
variant = "street_cleaner"
brand = "Isuzu"
model = "Elf"
color = "orange"
body_type = "truck"
number_of_wheels = 4
fuel_type = "diesel"
transmission_type = "manual"
engine_capacity = 3.0

[[cars]]
variant = "cargo_transport"
brand = "Ford"
model = "Transit"
color = "white"
body_type = "van"
number_of_wheels = 4
fuel_type = "diesel"
transmission_type = "manual"
engine_capacity = 2.2

[[cars]]
variant = "fog_lights"
brand = "Volvo"
model = "XC90"
color = "black"
body_type = "suv"
number_of_wheels = 4
fuel_type = "hybrid"
transmission_type = "automatic"
engine_capacity = 2.0

[[cars]]
variant = "cargo_transport_and_fog_lights"
brand = "Toyota"
model = "Hilux"
color = "silver"
body_type = "pickup"
number_of_wheels = 4
fuel_type = "diesel"
transmission_type = "manual"
engine_capacity = 2.8

# Built with four wheels on purpose: the variant still reports three.
[[cars]]
variant = "three_wheeler"
brand = "Piaggio"
model = "Ape"
color = "blue"
body_type = "pickup"
number_of_wheels = 4
fuel_type = "petrol"
transmission_type = "manual"
engine_capacity = 0.2
"#;

pub fn showcase_catalog() -> Result<CarCatalog> {
    CarCatalog::load_from_str(SHOWCASE_TOML)
}
