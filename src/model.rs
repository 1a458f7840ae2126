//! Domain records for assignment planning.
//!
//! Every record validates at construction and is immutable afterwards; the
//! planner never mutates or revalidates its inputs. Callers that hold a
//! `Waypoint` or `Driver` therefore hold structurally sound data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structural input error: the caller handed us a record that cannot exist.
///
/// These are programmer/caller errors and are never recovered internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("required field `{0}` was not provided")]
    MissingField(&'static str),
    #[error("field `{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("time window start {start} is not before end {end}")]
    WindowOrder { start: TimeOfDay, end: TimeOfDay },
    #[error("package weight {0} kg is negative")]
    NegativeWeight(f64),
    #[error("vehicle capacity {0} kg is negative")]
    NegativeCapacity(f64),
    #[error("current load {0} kg is negative")]
    NegativeLoad(f64),
    #[error("current load {load_kg} kg exceeds capacity {capacity_kg} kg")]
    LoadExceedsCapacity { load_kg: f64, capacity_kg: f64 },
    #[error("performance score {0} outside [0, 100]")]
    PerformanceOutOfRange(f64),
    #[error("invalid clock time `{0}`, expected HH:MM")]
    InvalidClockTime(String),
    #[error("average speed {0} km/h must be positive")]
    NonPositiveSpeed(f64),
    #[error("estimated delay {0} minutes is negative")]
    NegativeDelay(f64),
}

/// A validated WGS-84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, InputError> {
        if !lat.is_finite() {
            return Err(InputError::NonFinite {
                field: "lat",
                value: lat,
            });
        }
        if !lng.is_finite() {
            return Err(InputError::NonFinite {
                field: "lng",
                value: lng,
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InputError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(InputError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

/// A clock time with minute precision. Date-free: assignment windows are
/// compared as time-of-day values only.
///
/// Parses from and displays as `HH:MM` (the form the upstream booking forms
/// submit), which is also its serde representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self, InputError> {
        if hour >= 24 || minute >= 60 {
            return Err(InputError::InvalidClockTime(format!(
                "{:02}:{:02}",
                hour, minute
            )));
        }
        Ok(Self {
            minutes: u16::from(hour) * 60 + u16::from(minute),
        })
    }

    /// Minutes since midnight.
    pub fn minutes_since_midnight(&self) -> u16 {
        self.minutes
    }
}

impl FromStr for TimeOfDay {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InputError::InvalidClockTime(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u8 = hour.trim().parse().map_err(|_| invalid())?;
        let minute: u8 = minute.trim().parse().map_err(|_| invalid())?;
        TimeOfDay::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// A same-day time window, start strictly before end.
///
/// Overnight windows (start after end) are rejected rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeWindow {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, InputError> {
        if start >= end {
            return Err(InputError::WindowOrder { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// True if `inner` lies entirely within this window.
    pub fn encloses(&self, inner: &TimeWindow) -> bool {
        inner.start >= self.start && inner.end <= self.end
    }
}

/// Delivery urgency tag carried on each waypoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    #[default]
    Standard,
    Flexible,
}

/// Coarse traffic-density classification for a road segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CongestionLevel {
    Low,
    Medium,
    High,
}

impl CongestionLevel {
    /// Multiplier applied to the assumed free-flow speed.
    pub fn speed_factor(&self) -> f64 {
        match self {
            CongestionLevel::Low => 1.0,
            CongestionLevel::Medium => 0.8,
            CongestionLevel::High => 0.6,
        }
    }
}

/// A stop a vehicle must visit: either a pending job or an entry on a
/// driver's already-planned route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    id: String,
    position: GeoPoint,
    address: String,
    priority: Priority,
    weight_kg: f64,
    window: TimeWindow,
    service_minutes: u32,
}

impl Waypoint {
    /// Creates a waypoint. Defaults: empty address, standard priority,
    /// zero on-site service time.
    pub fn new(
        id: impl Into<String>,
        position: GeoPoint,
        window: TimeWindow,
        weight_kg: f64,
    ) -> Result<Self, InputError> {
        if !weight_kg.is_finite() {
            return Err(InputError::NonFinite {
                field: "weight_kg",
                value: weight_kg,
            });
        }
        if weight_kg < 0.0 {
            return Err(InputError::NegativeWeight(weight_kg));
        }
        Ok(Self {
            id: id.into(),
            position,
            address: String::new(),
            priority: Priority::Standard,
            weight_kg,
            window,
            service_minutes: 0,
        })
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Estimated on-site service duration in whole minutes.
    pub fn with_service_minutes(mut self, minutes: u32) -> Self {
        self.service_minutes = minutes;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn service_minutes(&self) -> u32 {
        self.service_minutes
    }
}

/// A driver's state for one assignment run. Supplied fresh per invocation;
/// the planner only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    id: String,
    position: GeoPoint,
    vehicle_type: String,
    capacity_kg: f64,
    current_load_kg: f64,
    planned_route: Vec<Waypoint>,
    working_hours: TimeWindow,
    performance_score: f64,
}

impl Driver {
    /// Starts a builder. `vehicle_type`, `capacity_kg` and `working_hours`
    /// are required; load defaults to 0, the planned route to empty, and the
    /// performance score to 50.
    pub fn builder(id: impl Into<String>, position: GeoPoint) -> DriverBuilder {
        DriverBuilder {
            id: id.into(),
            position,
            vehicle_type: None,
            capacity_kg: None,
            current_load_kg: 0.0,
            planned_route: Vec::new(),
            working_hours: None,
            performance_score: 50.0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    pub fn capacity_kg(&self) -> f64 {
        self.capacity_kg
    }

    pub fn current_load_kg(&self) -> f64 {
        self.current_load_kg
    }

    pub fn planned_route(&self) -> &[Waypoint] {
        &self.planned_route
    }

    pub fn working_hours(&self) -> TimeWindow {
        self.working_hours
    }

    /// Historical delivery performance, 0–100.
    pub fn performance_score(&self) -> f64 {
        self.performance_score
    }
}

#[derive(Debug, Clone)]
pub struct DriverBuilder {
    id: String,
    position: GeoPoint,
    vehicle_type: Option<String>,
    capacity_kg: Option<f64>,
    current_load_kg: f64,
    planned_route: Vec<Waypoint>,
    working_hours: Option<TimeWindow>,
    performance_score: f64,
}

impl DriverBuilder {
    pub fn with_vehicle_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = Some(vehicle_type.into());
        self
    }

    pub fn with_capacity_kg(mut self, capacity_kg: f64) -> Self {
        self.capacity_kg = Some(capacity_kg);
        self
    }

    pub fn with_current_load_kg(mut self, load_kg: f64) -> Self {
        self.current_load_kg = load_kg;
        self
    }

    pub fn with_planned_route(mut self, route: Vec<Waypoint>) -> Self {
        self.planned_route = route;
        self
    }

    pub fn with_working_hours(mut self, window: TimeWindow) -> Self {
        self.working_hours = Some(window);
        self
    }

    pub fn with_performance_score(mut self, score: f64) -> Self {
        self.performance_score = score;
        self
    }

    pub fn build(self) -> Result<Driver, InputError> {
        let vehicle_type = self
            .vehicle_type
            .ok_or(InputError::MissingField("vehicle_type"))?;
        let capacity_kg = self
            .capacity_kg
            .ok_or(InputError::MissingField("capacity_kg"))?;
        let working_hours = self
            .working_hours
            .ok_or(InputError::MissingField("working_hours"))?;

        if !capacity_kg.is_finite() {
            return Err(InputError::NonFinite {
                field: "capacity_kg",
                value: capacity_kg,
            });
        }
        if capacity_kg < 0.0 {
            return Err(InputError::NegativeCapacity(capacity_kg));
        }
        if !self.current_load_kg.is_finite() {
            return Err(InputError::NonFinite {
                field: "current_load_kg",
                value: self.current_load_kg,
            });
        }
        if self.current_load_kg < 0.0 {
            return Err(InputError::NegativeLoad(self.current_load_kg));
        }
        if self.current_load_kg > capacity_kg {
            return Err(InputError::LoadExceedsCapacity {
                load_kg: self.current_load_kg,
                capacity_kg,
            });
        }
        if !self.performance_score.is_finite() {
            return Err(InputError::NonFinite {
                field: "performance_score",
                value: self.performance_score,
            });
        }
        if !(0.0..=100.0).contains(&self.performance_score) {
            return Err(InputError::PerformanceOutOfRange(self.performance_score));
        }

        Ok(Driver {
            id: self.id,
            position: self.position,
            vehicle_type,
            capacity_kg,
            current_load_kg: self.current_load_kg,
            planned_route: self.planned_route,
            working_hours,
            performance_score: self.performance_score,
        })
    }
}

/// Optional traffic observation for the current run. Only the congestion
/// level feeds the duration model; speed and delay are carried for callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSegment {
    id: String,
    average_speed_kmh: f64,
    congestion: CongestionLevel,
    delay_minutes: f64,
}

impl TrafficSegment {
    pub fn new(
        id: impl Into<String>,
        average_speed_kmh: f64,
        congestion: CongestionLevel,
        delay_minutes: f64,
    ) -> Result<Self, InputError> {
        if !average_speed_kmh.is_finite() || average_speed_kmh <= 0.0 {
            return Err(InputError::NonPositiveSpeed(average_speed_kmh));
        }
        if !delay_minutes.is_finite() {
            return Err(InputError::NonFinite {
                field: "delay_minutes",
                value: delay_minutes,
            });
        }
        if delay_minutes < 0.0 {
            return Err(InputError::NegativeDelay(delay_minutes));
        }
        Ok(Self {
            id: id.into(),
            average_speed_kmh,
            congestion,
            delay_minutes,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn average_speed_kmh(&self) -> f64 {
        self.average_speed_kmh
    }

    pub fn congestion(&self) -> CongestionLevel {
        self.congestion
    }

    pub fn delay_minutes(&self) -> f64 {
        self.delay_minutes
    }
}
