use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_API_LOG_DIRECTIVES: &str = "api_jb=debug,core_jb=info,data_model_jb=info,tower_http=debug";

/// Installs the global tracing subscriber. RUST_LOG wins over `default_directives`.
/// A second call keeps the first subscriber.
pub fn setup_logging(default_directives: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
