//! Reminder dispatch DTOs

use serde::{Deserialize, Serialize};

use tp_core::services::reminder::DispatchSummary;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatchRequest {
    /// Restrict the pass to one user's tasks; absent means all tasks
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResponse {
    pub sent_count: usize,
    pub due_count: usize,
}

impl From<DispatchSummary> for DispatchResponse {
    fn from(summary: DispatchSummary) -> Self {
        Self {
            sent_count: summary.sent_count,
            due_count: summary.due_count,
        }
    }
}
