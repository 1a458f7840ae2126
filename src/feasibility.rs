//! Hard eligibility checks for a (driver, job) pair.
//!
//! Feasibility is pass/fail and independent of scoring: an infeasible pair
//! is skipped, never an error.

use serde::{Deserialize, Serialize};

use crate::haversine::distance_km;
use crate::model::{Driver, Waypoint};

/// Jobs farther than this from a driver's current position are never
/// assigned to that driver, regardless of score.
pub const MAX_ASSIGNMENT_DISTANCE_KM: f64 = 50.0;

/// Why a driver cannot take a job. Feeds the unassigned report and debug
/// logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Infeasibility {
    OverCapacity,
    TooFar,
    OutsideWorkingHours,
}

/// First failing check in order: capacity, proximity bound, time-window
/// nesting. `None` means the pair is feasible.
pub fn infeasibility(driver: &Driver, job: &Waypoint) -> Option<Infeasibility> {
    if driver.current_load_kg() + job.weight_kg() > driver.capacity_kg() {
        return Some(Infeasibility::OverCapacity);
    }
    if distance_km(driver.position(), job.position()) > MAX_ASSIGNMENT_DISTANCE_KM {
        return Some(Infeasibility::TooFar);
    }
    if !driver.working_hours().encloses(&job.window()) {
        return Some(Infeasibility::OutsideWorkingHours);
    }
    None
}

pub fn is_feasible(driver: &Driver, job: &Waypoint) -> bool {
    infeasibility(driver, job).is_none()
}
