use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

/// Installs the stderr subscriber. Silent unless `verbose` or `RUST_LOG` asks otherwise.
pub fn init_logging(verbose: bool) {
    let crate_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let crate_filter = Targets::new()
        .with_target(env!("CARGO_CRATE_NAME"), crate_level)
        .with_default(LevelFilter::OFF);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(crate_level.to_string()));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(crate_filter)
        .with(env_filter)
        .try_init();
}
