//! dispatch-planner core
//!
//! Heuristic job-to-driver assignment for delivery dispatch: feasibility
//! filtering, multi-factor scoring, and single-job route insertion.

pub mod model;
pub mod haversine;
pub mod route;
pub mod feasibility;
pub mod scorer;
pub mod assign;
pub mod traffic;
pub mod advisory;
pub mod dispatch;
