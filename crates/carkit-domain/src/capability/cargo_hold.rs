use tracing::trace;

use super::CargoTransport;

/// Cargo carrying equipment
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CargoHold;

impl CargoTransport for CargoHold {
    fn carry_cargo(&mut self) {
        trace!("cargo hold: carry");
    }
}
