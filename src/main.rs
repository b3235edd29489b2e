use std::env;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod app_state;
mod core;
mod domain;
mod errors;
mod routes;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let _guard = init_tracing()?;

    // Cluster credentials are loaded once here; handlers only build clients.
    let state = app_state::build_app_state().await?;

    let bind_addr =
        env::var("KUBE_MONITOR_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("kube-monitor listening on {bind_addr}");

    let app = routes::app_router().with_state(state);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Stdout logging always; a daily-rolled log file too when KUBE_MONITOR_LOG_DIR is set.
/// The returned guard must stay alive so buffered file output gets flushed.
fn init_tracing() -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "kube_monitor=info".into());
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    match env::var("KUBE_MONITOR_LOG_DIR") {
        Ok(dir) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_appender(&dir)?);
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .init();
            Ok(Some(guard))
        }
        Err(_) => {
            registry.init();
            Ok(None)
        }
    }
}

// The builder reports an unusable directory as an error; the `rolling::daily`
// shorthand would panic on it.
fn open_log_appender(dir: &str) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("kube-monitor.log")
        .build(dir)
        .with_context(|| format!("cannot write logs under {dir}"))
}
