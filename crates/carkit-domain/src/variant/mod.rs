//! Specialized car variants
//!
//! Every variant wraps a [`Car`](crate::Car) and implements
//! [`Vehicle`](crate::Vehicle). Capabilities are attached by owning a
//! collaborator, so adding a capability means a new trait and a new variant,
//! never a change to `Car` or to an existing variant.

pub mod cargo_car;
pub mod cargo_fog_car;
pub mod fog_lights_car;
pub mod street_cleaner_car;
pub mod three_wheeler;

pub use cargo_car::CarWithCargoTransport;
pub use cargo_fog_car::CarWithCargoTransportAndFogLights;
pub use fog_lights_car::CarWithFogLights;
pub use street_cleaner_car::CarWithStreetCleaner;
pub use three_wheeler::ThreeWheeler;

use serde::{Deserialize, Serialize};

/// Identifies a variant, both in catalogs and in output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    StreetCleaner,
    CargoTransport,
    FogLights,
    CargoTransportAndFogLights,
    ThreeWheeler,
}

impl VariantKind {
    pub const ALL: [VariantKind; 5] = [
        VariantKind::StreetCleaner,
        VariantKind::CargoTransport,
        VariantKind::FogLights,
        VariantKind::CargoTransportAndFogLights,
        VariantKind::ThreeWheeler,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VariantKind::StreetCleaner => "car with street cleaner",
            VariantKind::CargoTransport => "car with cargo transport",
            VariantKind::FogLights => "car with fog lights",
            VariantKind::CargoTransportAndFogLights => "car with cargo transport and fog lights",
            VariantKind::ThreeWheeler => "three-wheeler",
        }
    }
}

impl std::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_kind_serde_names() {
        let json = serde_json::to_string(&VariantKind::CargoTransportAndFogLights).unwrap();
        assert_eq!(json, "\"cargo_transport_and_fog_lights\"");
        let parsed: VariantKind = serde_json::from_str("\"three_wheeler\"").unwrap();
        assert_eq!(parsed, VariantKind::ThreeWheeler);
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = VariantKind::ALL.iter().map(|k| k.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), VariantKind::ALL.len());
    }
}
