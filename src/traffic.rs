//! Traffic feed boundary.
//!
//! The planner never requires traffic data: a failed or absent feed falls
//! back to the free-flow duration model.

use serde::Deserialize;
use thiserror::Error;

use crate::model::{CongestionLevel, InputError, TrafficSegment};

#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("traffic feed request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("traffic feed returned an invalid segment: {0}")]
    InvalidSegment(#[from] InputError),
    #[error("traffic feed unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the traffic observations for one assignment run.
pub trait TrafficProvider {
    fn fetch(&self) -> Result<Vec<TrafficSegment>, TrafficError>;
}

/// Always reports free-flow conditions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTraffic;

impl TrafficProvider for NoTraffic {
    fn fetch(&self) -> Result<Vec<TrafficSegment>, TrafficError> {
        Ok(Vec::new())
    }
}

#[derive(Debug, Clone)]
pub struct TrafficFeedConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for TrafficFeedConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8600".to_string(),
            timeout_secs: 10,
        }
    }
}

/// HTTP traffic feed returning current segment observations as JSON.
#[derive(Debug, Clone)]
pub struct HttpTrafficFeed {
    config: TrafficFeedConfig,
    client: reqwest::blocking::Client,
}

impl HttpTrafficFeed {
    pub fn new(config: TrafficFeedConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn segments_url(&self) -> String {
        format!("{}/segments", self.config.base_url)
    }
}

impl TrafficProvider for HttpTrafficFeed {
    fn fetch(&self) -> Result<Vec<TrafficSegment>, TrafficError> {
        let records: Vec<SegmentRecord> = self
            .client
            .get(self.segments_url())
            .send()?
            .error_for_status()?
            .json()?;

        records.into_iter().map(SegmentRecord::into_segment).collect()
    }
}

/// Wire shape of one feed entry; field names follow the upstream service.
#[derive(Debug, Deserialize)]
struct SegmentRecord {
    #[serde(rename = "segmentId")]
    id: String,
    #[serde(rename = "averageSpeed")]
    average_speed: f64,
    #[serde(rename = "congestionLevel")]
    congestion: CongestionLevel,
    #[serde(rename = "estimatedDelay")]
    delay: f64,
}

impl SegmentRecord {
    fn into_segment(self) -> Result<TrafficSegment, TrafficError> {
        Ok(TrafficSegment::new(
            self.id,
            self.average_speed,
            self.congestion,
            self.delay,
        )?)
    }
}
