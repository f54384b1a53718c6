use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global fmt subscriber on stderr, keeping stdout clean for
/// the grid and the prompts.
pub fn init(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    // Ignore the error if a subscriber is already set (e.g. in tests).
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn accepts_explicit_levels() {
        assert!(init(Some("debug")).is_ok());
        assert!(init(None).is_ok());
    }

    #[test]
    fn rejects_malformed_filters() {
        assert!(init(Some("not=a=filter")).is_err());
    }
}
