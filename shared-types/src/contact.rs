use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Status assigned to a contact created without one.
pub const DEFAULT_CONTACT_STATUS: &str = "prospect";

/// Filter value that disables the company or status filter.
pub const FILTER_ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub status: String, // free text, "prospect" and "active" drive the metrics
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Partial contact update.
///
/// Each field distinguishes "not sent" (`None`) from "sent as null" (`Some(None)`),
/// so optional fields can be cleared while untouched ones keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    #[serde(default, deserialize_with = "crate::deserialize_some")]
    #[ts(optional)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::deserialize_some")]
    #[ts(optional)]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::deserialize_some")]
    #[ts(optional)]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::deserialize_some")]
    #[ts(optional)]
    pub company: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::deserialize_some")]
    #[ts(optional)]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::deserialize_some")]
    #[ts(optional)]
    pub status: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::deserialize_some")]
    #[ts(optional)]
    pub notes: Option<Option<String>>,
}

/// Query-string filters for listing contacts. All filters are AND-combined.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactFilters {
    pub search: Option<String>,
    pub company: Option<String>,
    pub status: Option<String>,
}

impl ContactFilters {
    /// Search term, or `None` when absent or empty.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Company to match exactly, or `None` when absent, empty or "all".
    pub fn company_filter(&self) -> Option<&str> {
        active_filter(self.company.as_deref())
    }

    /// Status to match exactly, or `None` when absent, empty or "all".
    pub fn status_filter(&self) -> Option<&str> {
        active_filter(self.status.as_deref())
    }
}

fn active_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != FILTER_ALL)
}
