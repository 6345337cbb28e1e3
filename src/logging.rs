use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Sends logs to stderr so they never mix with the snippet on stdout.
///
/// `RUST_LOG` takes precedence over the level picked on the command line.
pub fn init(level: LevelFilter) {
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
