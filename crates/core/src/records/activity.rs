use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mediboard_types::RecordId;

use crate::filter::Filterable;

/// One entry in the system activity log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ActivityEntry {
    #[schema(value_type = String)]
    pub id: RecordId,
    pub user: String,
    pub action: String,
    /// Originating module label (e.g. "Patients", "Appointments").
    pub module: String,
    pub timestamp: DateTime<Utc>,
}

impl Filterable for ActivityEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.user, &self.action]
    }

    fn facet(&self, dimension: &str) -> Option<Cow<'_, str>> {
        match dimension {
            "module" => Some(Cow::Borrowed(&self.module)),
            _ => None,
        }
    }
}
