use serde::{Deserialize, Serialize};

use crate::Location;

/// The vehicle taking part in one planning call.
///
/// # Examples
/// ```
/// use courier_core::{CarrierProfile, Location};
///
/// let carrier = CarrierProfile::new(Location::new(0), 30, 5.0);
/// assert_eq!(carrier.capacity, 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarrierProfile {
    /// Where the carrier currently stands.
    pub position: Location,
    /// Maximum total weight aboard.
    pub capacity: u32,
    /// Cost charged per unit of distance travelled.
    pub cost_per_distance: f64,
}

impl CarrierProfile {
    /// Construct a carrier profile.
    pub const fn new(position: Location, capacity: u32, cost_per_distance: f64) -> Self {
        Self {
            position,
            capacity,
            cost_per_distance,
        }
    }
}
