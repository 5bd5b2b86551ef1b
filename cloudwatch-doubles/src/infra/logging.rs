use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_tracing() -> anyhow::Result<()> {
    Ok(tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()?)
}

/// Subscriber for test binaries: output goes through the test harness
/// capture, and repeated calls from several tests are harmless.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cloudwatch_doubles=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init_test_tracing();
        init_test_tracing();
        assert!(init_tracing().is_err());
    }
}
