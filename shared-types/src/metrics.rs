use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Dashboard aggregates
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_contacts: usize,
    pub active_leads: usize,
    pub today_activities: usize,
    pub conversion_rate: f64, // percent, one decimal place
}
