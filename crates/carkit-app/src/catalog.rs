//! Car catalog loader from TOML
//!
//! ```toml
//! [[cars]]
//! variant = "three_wheeler"
//! brand = "Piaggio"
//! model = "Ape"
//! color = "blue"
//! body_type = "pickup"
//! number_of_wheels = 4
//! fuel_type = "petrol"
//! transmission_type = "manual"
//! engine_capacity = 0.2
//! ```

use std::fs;
use std::path::Path;

use carkit_domain::{Car, CarSpec, VariantKind};
use carkit_types::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::walkthrough::AnyVehicle;

/// One car in a catalog, tagged with the variant to build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub variant: VariantKind,
    #[serde(flatten)]
    pub car: CarSpec,
}

impl CatalogEntry {
    pub fn build(&self) -> AnyVehicle {
        AnyVehicle::build(self.variant, Car::from_spec(self.car.clone()))
    }
}

/// Container for parsing catalog files
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    cars: Vec<CatalogEntry>,
}

/// Ordered list of catalog entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarCatalog {
    entries: Vec<CatalogEntry>,
}

impl CarCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Load a catalog from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::load_from_str(&content)?;
        debug!(path = %path.display(), cars = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Load a catalog from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(toml_content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self::new(file.cars))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build every entry, in catalog order
    pub fn build(&self) -> Vec<AnyVehicle> {
        self.entries.iter().map(CatalogEntry::build).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carkit_types::Error;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const TEST_TOML: &str = r#"
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

[[cars]]
variant = "street_cleaner"
brand = "Isuzu"
model = "Elf"
color = "orange"
body_type = "truck"
number_of_wheels = 6
fuel_type = "diesel"
transmission_type = "manual"
engine_capacity = 3.0
"#;

    #[test]
    fn test_load_from_str() {
        let catalog = CarCatalog::load_from_str(TEST_TOML).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].variant, VariantKind::ThreeWheeler);
        assert_eq!(catalog.entries()[1].car.brand, "Isuzu");
        assert_eq!(catalog.entries()[1].car.engine_capacity, 3.0);
    }

    #[test]
    fn test_build_keeps_order_and_overrides() {
        let vehicles = CarCatalog::load_from_str(TEST_TOML).unwrap().build();
        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[0].as_vehicle().number_of_wheels(), 3);
        assert_eq!(vehicles[0].as_vehicle().car().number_of_wheels(), 4);
        assert_eq!(vehicles[1].as_vehicle().kind(), VariantKind::StreetCleaner);
        assert_eq!(vehicles[1].as_vehicle().number_of_wheels(), 6);
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        assert!(CarCatalog::load_from_str("").unwrap().is_empty());
        assert!(CarCatalog::load_from_str("cars = []").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_variant_is_parse_error() {
        let toml = TEST_TOML.replace("three_wheeler", "hovercraft");
        let err = CarCatalog::load_from_str(&toml).unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::Parse(_))));
    }

    #[test]
    fn test_missing_attribute_is_parse_error() {
        let toml = TEST_TOML.replace("color = \"blue\"\n", "");
        let err = CarCatalog::load_from_str(&toml).unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cars.toml");
        fs::write(&path, TEST_TOML).unwrap();
        let catalog = CarCatalog::load_from_file(&path).unwrap();
        assert_eq!(catalog, CarCatalog::load_from_str(TEST_TOML).unwrap());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let err = CarCatalog::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::Read { .. })));
    }
}
