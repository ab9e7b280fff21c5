//! Optional capabilities and the collaborators that provide them
//!
//! Each capability is its own trait with a single operation. None of them
//! depend on `Car`; a variant that needs one owns a collaborator and
//! forwards the call.

pub mod cargo_hold;
pub mod fog_lamps;
pub mod street_cleaner;

pub use cargo_hold::CargoHold;
pub use fog_lamps::FogLamps;
pub use street_cleaner::StreetCleaner;

use serde::{Deserialize, Serialize};

pub trait StreetSweeping {
    fn sweep_street(&mut self);
}

pub trait CargoTransport {
    fn carry_cargo(&mut self);
}

pub trait FogLights {
    fn turn_on_fog_lights(&mut self);
}

/// Names of the capabilities a vehicle may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    StreetSweeping,
    CargoTransport,
    FogLights,
}

impl Capability {
    pub fn label(&self) -> &'static str {
        match self {
            Capability::StreetSweeping => "street sweeping",
            Capability::CargoTransport => "cargo transport",
            Capability::FogLights => "fog lights",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
