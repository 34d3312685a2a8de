use pwgen::{cli::pwgen::run, TARGET};
use pwgen_cli_helpers::messages::fail;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "pwgen=info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = run() {
        tracing::debug!(target: TARGET, error = ?e, "run::failed");
        fail(e.to_string());
        std::process::exit(1);
    }
}
