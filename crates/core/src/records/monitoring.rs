use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use mediboard_types::RecordId;

use crate::filter::Filterable;

/// One vitals reading in a monitored patient's time series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VitalsSample {
    pub time: DateTime<Utc>,
    pub heart_rate: u32,
    pub temperature: f64,
    pub spo2: u32,
}

/// An ICU patient under continuous monitoring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MonitoredPatient {
    #[schema(value_type = String)]
    pub id: RecordId,
    pub name: String,
    pub age: u32,
    pub admission_date: NaiveDate,
    pub diagnosis: String,
    pub doctor: String,
    /// Chronological vitals history; may be empty for a fresh admission.
    #[serde(default)]
    pub history: Vec<VitalsSample>,
}

impl MonitoredPatient {
    /// Most recent reading, if any exist.
    pub fn latest_sample(&self) -> Option<&VitalsSample> {
        self.history.last()
    }
}

impl Filterable for MonitoredPatient {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, self.id.as_str(), &self.diagnosis]
    }

    fn facet(&self, dimension: &str) -> Option<Cow<'_, str>> {
        match dimension {
            "doctor" => Some(Cow::Borrowed(&self.doctor)),
            _ => None,
        }
    }
}
