//! Route totals and the single-job insertion heuristic.

use crate::haversine::distance_km;
use crate::model::{TrafficSegment, Waypoint};

/// Assumed free-flow driving speed.
const BASE_SPEED_KMH: f64 = 40.0;

/// Congestion never degrades the assumed speed below this floor.
const MIN_SPEED_KMH: f64 = 10.0;

/// Effective travel speed under the supplied traffic observations.
///
/// The mean congestion factor across all segments degrades the free-flow
/// speed. No observations means free flow.
pub fn travel_speed_kmh(segments: &[TrafficSegment]) -> f64 {
    if segments.is_empty() {
        return BASE_SPEED_KMH;
    }
    let mean_factor = segments
        .iter()
        .map(|segment| segment.congestion().speed_factor())
        .sum::<f64>()
        / segments.len() as f64;
    (BASE_SPEED_KMH * mean_factor).max(MIN_SPEED_KMH)
}

/// Sum of consecutive leg distances in kilometers. Zero for fewer than two
/// stops.
pub fn total_distance_km(route: &[Waypoint]) -> f64 {
    route
        .windows(2)
        .map(|leg| distance_km(leg[0].position(), leg[1].position()))
        .sum()
}

/// Estimated minutes to drive the route, including the on-site service time
/// at each leg's origin stop. Zero for fewer than two stops.
pub fn total_duration_minutes(route: &[Waypoint], segments: &[TrafficSegment]) -> f64 {
    let speed = travel_speed_kmh(segments);
    route
        .windows(2)
        .map(|leg| {
            let km = distance_km(leg[0].position(), leg[1].position());
            km / speed * 60.0 + f64::from(leg[0].service_minutes())
        })
        .sum()
}

/// Cheapest position at which to insert `job` into `existing`.
///
/// Tries every position and keeps the one adding the least distance, ties
/// broken by earliest index. Only the single new job is placed; the existing
/// order is never re-optimized. O(n²) in the route length, which stays in
/// the tens of stops.
pub fn best_insertion(existing: &[Waypoint], job: &Waypoint) -> (Vec<Waypoint>, f64) {
    if existing.is_empty() {
        return (vec![job.clone()], 0.0);
    }

    let base_km = total_distance_km(existing);
    let mut best_route = Vec::new();
    let mut best_added = f64::INFINITY;

    for position in 0..=existing.len() {
        let mut candidate = existing.to_vec();
        candidate.insert(position, job.clone());
        let added = total_distance_km(&candidate) - base_km;
        if added < best_added {
            best_added = added;
            best_route = candidate;
        }
    }

    // Guard against floating noise on degenerate geometries.
    (best_route, best_added.max(0.0))
}
