//! Strategic-advisory boundary.
//!
//! An advisory service reads a finished plan and suggests operational
//! improvements in free text. It is enrichment only; the planner never
//! depends on it to produce a valid plan.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assign::AssignmentPlan;

#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisory request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("advisory service unavailable: {0}")]
    Unavailable(String),
}

/// Free-text suggestions returned alongside a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub summary: String,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    pub impact: String,
}

/// Reviews a finished plan. Implementations may be remote and slow; callers
/// treat failure as a degraded run, not an error.
pub trait AdvisoryProvider {
    fn advise(&self, plan: &AssignmentPlan) -> Result<AdvisoryReport, AdvisoryError>;
}

/// No-op advisor for tests and offline runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdvisory;

impl AdvisoryProvider for NoAdvisory {
    fn advise(&self, _plan: &AssignmentPlan) -> Result<AdvisoryReport, AdvisoryError> {
        Ok(AdvisoryReport::default())
    }
}

#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8601".to_string(),
            timeout_secs: 10,
        }
    }
}

/// HTTP advisor: POSTs the plan as JSON and expects an [`AdvisoryReport`].
#[derive(Debug, Clone)]
pub struct HttpAdvisor {
    config: AdvisorConfig,
    client: reqwest::blocking::Client,
}

impl HttpAdvisor {
    pub fn new(config: AdvisorConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn advise_url(&self) -> String {
        format!("{}/advise", self.config.base_url)
    }
}

impl AdvisoryProvider for HttpAdvisor {
    fn advise(&self, plan: &AssignmentPlan) -> Result<AdvisoryReport, AdvisoryError> {
        let report = self
            .client
            .post(self.advise_url())
            .json(plan)
            .send()?
            .error_for_status()?
            .json::<AdvisoryReport>()?;

        Ok(report)
    }
}
