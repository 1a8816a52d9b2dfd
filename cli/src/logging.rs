use tracing_forest::{ForestLayer, printer::PrettyPrinter};
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log to stderr so stdout only carries the confirmation line or the dry-run output.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(ForestLayer::from(
            PrettyPrinter::new().writer(std::io::stderr),
        ))
        .init();
}
