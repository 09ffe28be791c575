use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Installs a stderr subscriber. `RUST_LOG` wins over `verbose`.
pub fn init(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "gitgraph=info,warn",
        _ => "gitgraph=debug,info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());

    let layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .without_time()
        .with_writer(std::io::stderr);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = Registry::default().with(filter).with(layer).try_init();
}
