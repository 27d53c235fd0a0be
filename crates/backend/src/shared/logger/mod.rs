use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::config::{get_log_dir, Config};

/// Инициализация логирования: консоль + файл `<logs>/backend.log`
///
/// Фильтр берётся из RUST_LOG, если он задан, иначе из конфигурации.
pub fn init(config: &Config) -> anyhow::Result<()> {
    let log_dir = get_log_dir(config);
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.filter.clone());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("logger init failed: {e}"))?;

    Ok(())
}
