use tracing::trace;

use super::FogLights;

/// Fog lamp unit
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FogLamps;

impl FogLights for FogLamps {
    fn turn_on_fog_lights(&mut self) {
        trace!("fog lamps: on");
    }
}
