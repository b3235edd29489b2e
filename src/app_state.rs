use kube::Config;

use crate::core::client::kube_client::load_kube_config;

/// Shared read-only state threaded into every handler.
#[derive(Clone)]
pub struct AppState {
    pub kube_config: Config,
}

pub async fn build_app_state() -> anyhow::Result<AppState> {
    let kube_config = load_kube_config().await?;
    Ok(AppState { kube_config })
}
