//! Per-job aggregation, output ordering, and run analytics.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::feasibility::is_feasible;
use crate::model::{Driver, TrafficSegment, Waypoint};
use crate::scorer::{self, AssignOptions, FUEL_CONSUMPTION_L_PER_KM, PairEvaluation, Savings};

/// A proposed (job, driver) pairing with its score, savings, and the route
/// the driver would run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub job_id: String,
    pub driver_id: String,
    /// Composite confidence in [0, 1].
    pub confidence: f64,
    pub savings: Savings,
    pub consolidation_opportunities: Vec<String>,
    /// The driver's planned route with the job inserted.
    pub route: Vec<Waypoint>,
    pub route_distance_km: f64,
    pub route_duration_minutes: f64,
}

/// Why a job produced no assignment. Reporting only, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnassignedReason {
    NoFeasibleDriver,
    BelowScoreThreshold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnassignedJob {
    pub job_id: String,
    pub reason: UnassignedReason,
}

/// Run-level summary across all assignments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub jobs_submitted: usize,
    pub jobs_assigned: usize,
    pub total_savings: Savings,
    pub consolidation_opportunities: usize,
    /// Mean confidence over produced assignments; 0 when none were produced.
    pub mean_confidence: f64,
    /// 100 × cost saving / (running cost of the final routes + cost saving),
    /// so always in [0, 100].
    pub efficiency_gain_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentPlan {
    /// Sorted descending by confidence × cost saving.
    pub assignments: Vec<Assignment>,
    /// Jobs that produced no assignment, in input order.
    pub unassigned: Vec<UnassignedJob>,
    pub analytics: Analytics,
}

/// Assigns each job to its single best feasible driver.
///
/// Jobs are evaluated independently (and in parallel); the output is
/// identical to a sequential pass over the input order. Never fails: a job
/// nobody can take is reported in `unassigned`, and an empty result is a
/// valid plan.
pub fn assign(
    jobs: &[Waypoint],
    drivers: &[Driver],
    segments: &[TrafficSegment],
    options: &AssignOptions,
) -> AssignmentPlan {
    let outcomes: Vec<Result<Assignment, UnassignedJob>> = jobs
        .par_iter()
        .map(|job| best_assignment(job, drivers, segments, options))
        .collect();

    let mut assignments = Vec::new();
    let mut unassigned = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(assignment) => assignments.push(assignment),
            Err(skipped) => {
                debug!(job = %skipped.job_id, reason = ?skipped.reason, "job left unassigned");
                unassigned.push(skipped);
            }
        }
    }

    // Stable sort: equal keys keep job evaluation order.
    assignments.sort_by(|a, b| {
        let key_a = a.confidence * a.savings.cost;
        let key_b = b.confidence * b.savings.cost;
        key_b.partial_cmp(&key_a).unwrap_or(Ordering::Equal)
    });

    let analytics = summarize(&assignments, jobs.len(), options);
    info!(
        jobs = jobs.len(),
        assigned = assignments.len(),
        total_cost_saving = analytics.total_savings.cost,
        "assignment run complete"
    );

    AssignmentPlan {
        assignments,
        unassigned,
        analytics,
    }
}

/// Picks the highest-scoring feasible driver for one job, ties broken by
/// earliest driver in input order.
fn best_assignment(
    job: &Waypoint,
    drivers: &[Driver],
    segments: &[TrafficSegment],
    options: &AssignOptions,
) -> Result<Assignment, UnassignedJob> {
    let mut best: Option<(&Driver, PairEvaluation)> = None;

    for driver in drivers {
        if !is_feasible(driver, job) {
            continue;
        }
        let eval = scorer::evaluate(driver, job, segments, options);
        if best.as_ref().is_none_or(|(_, held)| eval.score > held.score) {
            best = Some((driver, eval));
        }
    }

    match best {
        Some((driver, eval)) if eval.score >= options.score_threshold => Ok(Assignment {
            job_id: job.id().to_string(),
            driver_id: driver.id().to_string(),
            confidence: eval.score,
            savings: eval.savings,
            consolidation_opportunities: eval.opportunities,
            route: eval.route,
            route_distance_km: eval.route_distance_km,
            route_duration_minutes: eval.route_duration_minutes,
        }),
        Some(_) => Err(UnassignedJob {
            job_id: job.id().to_string(),
            reason: UnassignedReason::BelowScoreThreshold,
        }),
        None => Err(UnassignedJob {
            job_id: job.id().to_string(),
            reason: UnassignedReason::NoFeasibleDriver,
        }),
    }
}

fn summarize(assignments: &[Assignment], jobs_submitted: usize, options: &AssignOptions) -> Analytics {
    let mut total = Savings::default();
    let mut opportunities = 0;
    let mut confidence_sum = 0.0;
    let mut running_cost = 0.0;

    for assignment in assignments {
        total.distance_km += assignment.savings.distance_km;
        total.time_minutes += assignment.savings.time_minutes;
        total.fuel_liters += assignment.savings.fuel_liters;
        total.cost += assignment.savings.cost;
        opportunities += assignment.consolidation_opportunities.len();
        confidence_sum += assignment.confidence;
        running_cost += assignment.route_distance_km
            * FUEL_CONSUMPTION_L_PER_KM
            * options.fuel_price_per_liter
            + assignment.route_duration_minutes / 60.0 * options.driver_cost_per_hour;
    }

    let mean_confidence = if assignments.is_empty() {
        0.0
    } else {
        confidence_sum / assignments.len() as f64
    };
    let efficiency_gain_pct = if running_cost + total.cost > 0.0 {
        100.0 * total.cost / (running_cost + total.cost)
    } else {
        0.0
    };

    Analytics {
        jobs_submitted,
        jobs_assigned: assignments.len(),
        total_savings: total,
        consolidation_opportunities: opportunities,
        mean_confidence,
        efficiency_gain_pct,
    }
}
