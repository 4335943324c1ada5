use std::panic;
use tracing::error;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    filter::EnvFilter,
    fmt,
    prelude::*,
    registry::Registry,
};

/// Install the global subscriber: env-filtered fmt output on stderr, so
/// stdout stays reserved for command output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let subscriber = Registry::default()
        .with(filter)
        .with(fmt_layer)
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global tracing subscriber");
}

pub fn init_panic_handler() {
    panic::set_hook(Box::new(|panic_info| {
        let msg = match panic_info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => "Unknown panic",
        };

        let location = panic_info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());

        error!(
            message = %msg,
            location = %location,
            "Application panicked!"
        );
    }));
}
