//! Workload API DTOs

use serde::Serialize;

/// Fixed-shape projection of a pod, one entry per item in the `/pods` response.
///
/// Both fields are always present; a source object lacking one serializes it
/// as an empty string.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WorkloadSummary {
    pub name: String,
    pub namespace: String,
}
