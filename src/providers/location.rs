//! Location collaborator.
//!
//! The core only consumes "is location permitted" and "current coordinates";
//! how a fix is obtained stays behind this trait. Acquisition is a single
//! asynchronous operation with an internal fallback chain, so callers never
//! sequence multiple attempts themselves.

use crate::models::coordinates::Coordinates;
use async_trait::async_trait;

#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Whether the user has granted location access at all.
    fn has_permission(&self) -> bool;

    /// Best current coordinates, or `None` when no fix can be produced.
    async fn current_coordinates(&self) -> Option<Coordinates>;
}

/// CLI implementation: an explicit per-invocation override (`--at lat,lon`)
/// falls back to the site coordinates from the configuration file.
pub struct ConfiguredLocation {
    permitted: bool,
    override_fix: Option<Coordinates>,
    site: Option<Coordinates>,
}

impl ConfiguredLocation {
    pub fn new(permitted: bool, override_fix: Option<Coordinates>, site: Option<Coordinates>) -> Self {
        Self {
            permitted,
            override_fix,
            site,
        }
    }
}

#[async_trait]
impl LocationProvider for ConfiguredLocation {
    fn has_permission(&self) -> bool {
        self.permitted
    }

    async fn current_coordinates(&self) -> Option<Coordinates> {
        self.override_fix.or(self.site)
    }
}
