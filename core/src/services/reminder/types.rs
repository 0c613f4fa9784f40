//! Types for reminder dispatch results

use serde::{Deserialize, Serialize};

/// Outcome of one dispatch pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchSummary {
    /// Tasks whose resolved channels all succeeded and were marked sent
    pub sent_count: usize,
    /// Tasks that were due when the pass scanned
    pub due_count: usize,
}
