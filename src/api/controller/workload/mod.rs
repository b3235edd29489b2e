//! Workload controller: connects routes to the cluster listing usecase

use axum::extract::State;
use axum::Json;

use crate::api::dto::workload_dto::WorkloadSummary;
use crate::app_state::AppState;
use crate::domain::workload::service;
use crate::errors::AppError;

pub struct WorkloadController;

impl WorkloadController {
    /// List every pod the control plane reports, across all namespaces.
    ///
    /// Query parameters are ignored; the response is a bare JSON array.
    pub async fn list_workloads(
        State(state): State<AppState>,
    ) -> Result<Json<Vec<WorkloadSummary>>, AppError> {
        let workloads = service::list_workloads(&state.kube_config).await?;
        Ok(Json(workloads))
    }
}
