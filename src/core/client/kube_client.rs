use anyhow::{Context, Result};
use kube::{Client, Config};
use tracing::debug;

/// Loads cluster credentials once at process start.
///
/// `Config::infer` checks the in-cluster service account first and falls back
/// to the local kubeconfig, covering both deployment modes.
pub async fn load_kube_config() -> Result<Config> {
    let config = Config::infer()
        .await
        .context("no Kubernetes credentials discoverable (in-cluster or kubeconfig)")?;

    debug!(cluster_url = %config.cluster_url, "Kubernetes credentials loaded");
    Ok(config)
}

/// Builds a client bound to previously loaded credentials.
///
/// Clients are constructed fresh per request and never reused.
pub fn build_kube_client(config: &Config) -> Result<Client> {
    let client = Client::try_from(config.clone())?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn builds_client_from_explicit_config() {
        let config = Config::new("http://127.0.0.1:8080".parse().unwrap());
        assert!(build_kube_client(&config).is_ok());
    }
}
