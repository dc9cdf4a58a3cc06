//! Shared SageMaker types: enumerations and nested configuration shapes.
//!
//! Request and response shapes live in [`crate::input`] and
//! [`crate::output`]; everything they embed lives here, grouped by API area.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

mod common;
mod experiment;
mod human;
mod monitoring;
mod notebook;
mod registry;
mod training;
mod transform;
mod tuning;

pub use common::*;
pub use experiment::*;
pub use human::*;
pub use monitoring::*;
pub use notebook::*;
pub use registry::*;
pub use training::*;
pub use transform::*;
pub use tuning::*;

/// Behavior shared by every closed string enumeration.
pub trait ClosedEnum {
    /// The enumeration's type name, for error messages.
    const NAME: &'static str;

    /// The closed set of wire values.
    fn values() -> &'static [&'static str];

    /// The wire-format string of this value.
    fn as_str(&self) -> &str;

    /// `false` for values received from the wire that are not in the closed set.
    fn is_known(&self) -> bool;
}

/// A floating-point metric reading.
///
/// Compared and hashed by bit pattern so that shapes holding metrics remain
/// `Eq + Hash`; `NaN` equals itself and `0.0` differs from `-0.0`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricValue(f64);

impl MetricValue {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for MetricValue {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for MetricValue {}

impl Hash for MetricValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<f32> for MetricValue {
    fn from(value: f32) -> Self {
        Self(f64::from(value))
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_should_round_trip_enum_symbol_and_string() {
        let status = TrainingJobStatus::InProgress;
        assert_eq!(status.as_str(), "InProgress");
        assert_eq!("InProgress".parse::<TrainingJobStatus>().ok(), Some(status));
        assert_eq!(
            "ml.m5.xlarge".parse::<TrainingInstanceType>().ok(),
            Some(TrainingInstanceType::MlM5Xlarge)
        );
    }

    #[test]
    fn test_should_reject_unknown_string_on_parse() {
        let err = "Sideways".parse::<SortOrder>().expect_err("not in the set");
        assert_eq!(err.to_string(), "unknown SortOrder value: Sideways");
    }

    #[test]
    fn test_should_deserialize_unknown_value_leniently() {
        let status: TrainingJobStatus = serde_json::from_str(r#""Paused""#).expect("lenient");
        assert_eq!(status, TrainingJobStatus::Unknown("Paused".to_owned()));
        assert!(!status.is_known());
        assert_eq!(serde_json::to_string(&status).expect("serialize"), r#""Paused""#);
    }

    #[test]
    fn test_should_list_values_in_declaration_order() {
        assert_eq!(
            TrainingJobStatus::values(),
            &["InProgress", "Completed", "Failed", "Stopping", "Stopped"]
        );
        assert_eq!(<SortOrder as ClosedEnum>::NAME, "SortOrder");
    }

    #[test]
    fn test_should_compare_metric_values_by_bits() {
        assert_eq!(MetricValue::new(f64::NAN), MetricValue::new(f64::NAN));
        assert_ne!(MetricValue::new(0.0), MetricValue::new(-0.0));
        let set: HashSet<_> = [MetricValue::new(0.5), MetricValue::from(0.5_f32)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }
}
