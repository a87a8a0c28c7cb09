use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

pub mod activity;
pub mod contact;
pub mod metrics;
pub mod user;

pub use activity::{Activity, ActivityFilters, CreateActivityRequest};
pub use contact::{
    Contact, ContactFilters, CreateContactRequest, UpdateContactRequest, DEFAULT_CONTACT_STATUS,
    FILTER_ALL,
};
pub use metrics::DashboardMetrics;
pub use user::{CreateUserRequest, User, UserResponse};

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationIssue>,
}

/// One violated rule on one request field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MessageResponse {
    pub message: String,
}

/// Deserializes a present field (including an explicit `null`) as `Some(..)`.
/// Paired with `#[serde(default)]`, a missing field stays `None`.
pub fn deserialize_some<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
