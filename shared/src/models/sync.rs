//! Sync DTOs

use serde::{Deserialize, Serialize};

/// Outcome of a chunked bulk import.
///
/// `chunks_committed` is the high-water-mark of the write saga: on a partial
/// failure it tells the caller which chunks already landed so a retry can
/// resume instead of re-running from zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub total_rows: usize,
    pub chunks_total: usize,
    pub chunks_committed: usize,
    /// Row count confirmed by the post-import re-fetch
    pub confirmed_rows: usize,
}
