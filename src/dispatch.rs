//! One-shot orchestration: fetch traffic, assign, then optionally enrich.
//!
//! External services are consulted once per run and their failure never
//! blocks the plan; degradations are reported to the caller instead.

use serde::Serialize;
use tracing::{instrument, warn};

use crate::advisory::{AdvisoryProvider, AdvisoryReport};
use crate::assign::{self, AssignmentPlan};
use crate::model::{Driver, Waypoint};
use crate::scorer::AssignOptions;
use crate::traffic::TrafficProvider;

/// An external call that failed during the run. Non-fatal: the plan is still
/// computed from whatever data arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "service", content = "detail")]
pub enum DegradedService {
    Traffic(String),
    Advisory(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct DispatchReport {
    pub plan: AssignmentPlan,
    /// Absent when the advisory call failed.
    pub advisory: Option<AdvisoryReport>,
    pub degraded: Vec<DegradedService>,
}

/// Runs one full dispatch pass.
///
/// A failed traffic fetch falls back to free-flow speeds; a failed advisory
/// call drops the suggestions. Both are recorded in `degraded`.
#[instrument(skip_all, fields(jobs = jobs.len(), drivers = drivers.len()))]
pub fn dispatch(
    jobs: &[Waypoint],
    drivers: &[Driver],
    traffic: &dyn TrafficProvider,
    advisor: &dyn AdvisoryProvider,
    options: &AssignOptions,
) -> DispatchReport {
    let mut degraded = Vec::new();

    let segments = match traffic.fetch() {
        Ok(segments) => segments,
        Err(err) => {
            warn!(error = %err, "traffic feed unavailable, using free-flow speeds");
            degraded.push(DegradedService::Traffic(err.to_string()));
            Vec::new()
        }
    };

    let plan = assign::assign(jobs, drivers, &segments, options);

    let advisory = match advisor.advise(&plan) {
        Ok(report) => Some(report),
        Err(err) => {
            warn!(error = %err, "advisory service unavailable, continuing without suggestions");
            degraded.push(DegradedService::Advisory(err.to_string()));
            None
        }
    };

    DispatchReport {
        plan,
        advisory,
        degraded,
    }
}
