use tracing::trace;

use super::StreetSweeping;

/// Street sweeping equipment
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreetCleaner;

impl StreetSweeping for StreetCleaner {
    fn sweep_street(&mut self) {
        trace!("street cleaner: sweep");
    }
}
