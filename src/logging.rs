use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,wp_version_control=debug"
    } else {
        "warn"
    }
}

/// Setup diagnostic logging to stderr.
///
/// `RUST_LOG` takes precedence; an invalid value falls back to the default
/// filter with a note on stderr.
///
/// # Errors
/// - If the global tracing subscriber is already installed.
pub fn setup(verbose: bool) -> Result<()> {
    let default_filter = || EnvFilter::new(default_directive(verbose));

    let filter = match std::env::var("RUST_LOG") {
        Ok(directive) => EnvFilter::try_new(&directive).unwrap_or_else(|err| {
            eprintln!("invalid log filter {directive:?}: {err}");
            eprintln!("falling back to default logging");
            default_filter()
        }),
        Err(_) => default_filter(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install logger: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert!(default_directive(true).contains("wp_version_control=debug"));
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }
}
