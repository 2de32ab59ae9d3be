use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The vehicle currently holding a spot, with the time it arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occupancy {
    pub vehicle_id: String,
    pub since: DateTime<Utc>,
}

/// A single parking spot. Vehicle identity and start time exist exactly
/// when the spot is occupied, so the occupancy invariant holds by
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParkingSpot {
    occupant: Option<Occupancy>,
}

impl ParkingSpot {
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Id of the vehicle holding this spot, or `None` when vacant.
    pub fn vehicle_id(&self) -> Option<&str> {
        self.occupant.as_ref().map(|o| o.vehicle_id.as_str())
    }

    /// Instant the current occupancy began, or `None` when vacant.
    pub fn occupied_since(&self) -> Option<DateTime<Utc>> {
        self.occupant.as_ref().map(|o| o.since)
    }

    /// Marks the spot as occupied by `vehicle_id`, starting the clock now.
    ///
    /// Calling this on an already-occupied spot silently replaces the
    /// occupant and restarts the clock; `ParkingLot::occupy_spot` is the
    /// checked entry point that refuses a double occupation.
    pub fn occupy(&mut self, vehicle_id: impl Into<String>) {
        self.occupant = Some(Occupancy {
            vehicle_id: vehicle_id.into(),
            since: Utc::now(),
        });
    }

    /// Makes the spot available again. No-op when already vacant.
    pub fn vacate(&mut self) {
        self.occupant = None;
    }

    /// Elapsed time since the current occupancy began, zero when vacant.
    /// Recomputed against the clock on every call, never cached.
    pub fn occupation_duration(&self) -> Duration {
        match &self.occupant {
            Some(occupancy) => Utc::now() - occupancy.since,
            None => Duration::zero(),
        }
    }

    /// Human-readable occupation time: `"Available"` when vacant, otherwise
    /// `"2h 5m"` style (minutes are the remainder after whole hours).
    pub fn formatted_occupation_time(&self) -> String {
        if !self.is_occupied() {
            return "Available".to_string();
        }
        let duration = self.occupation_duration();
        let hours = duration.num_hours();
        let minutes = duration.num_minutes() % 60;
        if hours > 0 {
            format!("{hours}h {minutes}m")
        } else {
            format!("{minutes}m")
        }
    }
}
