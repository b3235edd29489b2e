use anyhow::Result;
use kube::Config;

use crate::api::dto::workload_dto::WorkloadSummary;
use crate::core::client::kube_client::build_kube_client;
use crate::core::client::mappers::map_pod_to_summary;
use crate::core::client::pods::fetch_pods;

/// Lists every workload the control plane reports, in the order it returns.
///
/// A fresh client is built per call from the startup-loaded credentials;
/// failures from the cluster API propagate unmodified.
pub async fn list_workloads(config: &Config) -> Result<Vec<WorkloadSummary>> {
    let client = build_kube_client(config)?;
    let pods = fetch_pods(&client).await?;

    Ok(pods.iter().map(map_pod_to_summary).collect())
}
