//! Multi-factor evaluation of a feasible (driver, job) pair.
//!
//! Combines proximity, insertion savings against a naive append baseline,
//! consolidation with already-planned stops, and driver track record into a
//! single confidence score in [0, 1].

use serde::{Deserialize, Serialize};

use crate::feasibility::MAX_ASSIGNMENT_DISTANCE_KM;
use crate::haversine::distance_km;
use crate::model::{Driver, TrafficSegment, Waypoint};
use crate::route::{best_insertion, total_distance_km, total_duration_minutes};

/// Planned stops within this radius of a new job count as consolidation
/// opportunities.
const CONSOLIDATION_RADIUS_KM: f64 = 5.0;

/// Assumed fuel burn per kilometer driven.
pub(crate) const FUEL_CONSUMPTION_L_PER_KM: f64 = 0.1;

/// Tunable weights, threshold, and prices for one assignment run.
///
/// Defaults are the production dispatch values; prices are in shillings.
/// Physical constants (Earth radius, distance cutoffs, fuel burn, assumed
/// speeds) are fixed and not configurable here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignOptions {
    /// Weight of the proximity sub-score.
    pub proximity_weight: f64,
    /// Weight of the normalized cost-saving sub-score.
    pub savings_weight: f64,
    /// Weight of the driver performance factor.
    pub performance_weight: f64,
    /// Score bonus per consolidation opportunity.
    pub consolidation_bonus: f64,
    /// Upper bound on the total consolidation bonus.
    pub consolidation_bonus_cap: f64,
    /// Feasible pairs scoring below this are not assignable.
    pub score_threshold: f64,
    /// Cost saving that counts as a full savings sub-score.
    pub cost_saving_scale: f64,
    /// Fuel price per liter.
    pub fuel_price_per_liter: f64,
    /// Driver cost per hour on the road.
    pub driver_cost_per_hour: f64,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self {
            proximity_weight: 0.4,
            savings_weight: 0.3,
            performance_weight: 0.2,
            consolidation_bonus: 0.1,
            consolidation_bonus_cap: 0.3,
            score_threshold: 0.3,
            cost_saving_scale: 1000.0,
            fuel_price_per_liter: 180.0,
            driver_cost_per_hour: 500.0,
        }
    }
}

/// Estimated savings of the chosen insertion over appending the job at the
/// end of the route. All fields are non-negative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Savings {
    pub distance_km: f64,
    pub time_minutes: f64,
    pub fuel_liters: f64,
    pub cost: f64,
}

/// Outcome of scoring one feasible pair.
#[derive(Debug, Clone)]
pub struct PairEvaluation {
    /// Composite confidence in [0, 1].
    pub score: f64,
    pub savings: Savings,
    /// Free-text consolidation opportunities, one per nearby planned stop.
    pub opportunities: Vec<String>,
    /// The driver's route with the job inserted at the best position.
    pub route: Vec<Waypoint>,
    pub route_distance_km: f64,
    pub route_duration_minutes: f64,
}

/// Scores a feasible pair. Callers must have passed the pair through the
/// feasibility filter first.
pub fn evaluate(
    driver: &Driver,
    job: &Waypoint,
    segments: &[TrafficSegment],
    options: &AssignOptions,
) -> PairEvaluation {
    let existing = driver.planned_route();

    let direct_km = distance_km(driver.position(), job.position());
    let min_km = existing
        .iter()
        .map(|stop| distance_km(stop.position(), job.position()))
        .fold(direct_km, f64::min);
    let proximity = ((MAX_ASSIGNMENT_DISTANCE_KM - min_km) / MAX_ASSIGNMENT_DISTANCE_KM).max(0.0);

    let (route, _) = best_insertion(existing, job);
    let mut appended = existing.to_vec();
    appended.push(job.clone());

    let route_distance_km = total_distance_km(&route);
    let route_duration_minutes = total_duration_minutes(&route, segments);
    let distance_saved = (total_distance_km(&appended) - route_distance_km).max(0.0);
    let time_saved = (total_duration_minutes(&appended, segments) - route_duration_minutes).max(0.0);

    let fuel_saved = distance_saved * FUEL_CONSUMPTION_L_PER_KM;
    let cost_saved = fuel_saved * options.fuel_price_per_liter
        + time_saved / 60.0 * options.driver_cost_per_hour;
    let savings = Savings {
        distance_km: distance_saved,
        time_minutes: time_saved,
        fuel_liters: fuel_saved,
        cost: cost_saved,
    };

    let opportunities: Vec<String> = existing
        .iter()
        .filter_map(|stop| {
            let km = distance_km(stop.position(), job.position());
            (km <= CONSOLIDATION_RADIUS_KM)
                .then(|| format!("{:.1} km from planned stop {}", km, stop.id()))
        })
        .collect();

    let bonus = (opportunities.len() as f64 * options.consolidation_bonus)
        .min(options.consolidation_bonus_cap);
    let savings_factor = (savings.cost / options.cost_saving_scale).min(1.0);
    let performance_factor = driver.performance_score() / 100.0;

    let score = (options.proximity_weight * proximity
        + options.savings_weight * savings_factor
        + bonus
        + options.performance_weight * performance_factor)
        .clamp(0.0, 1.0);

    PairEvaluation {
        score,
        savings,
        opportunities,
        route,
        route_distance_km,
        route_duration_minutes,
    }
}
