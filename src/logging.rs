use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// `-q` wins over everything, `-v`/`-vv` over the configured level.
/// `RUST_LOG` still refines the result.
pub fn level_for(verbose: u8, quiet: bool, configured: &str) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => match configured {
            "error" => LevelFilter::ERROR,
            "info" => LevelFilter::INFO,
            "debug" => LevelFilter::DEBUG,
            "trace" => LevelFilter::TRACE,
            _ => LevelFilter::WARN,
        },
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

pub fn init(level: LevelFilter) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_forces_error_level() {
        assert_eq!(level_for(2, true, "debug"), LevelFilter::ERROR);
    }

    #[test]
    fn verbosity_overrides_configured_level() {
        assert_eq!(level_for(0, false, "info"), LevelFilter::INFO);
        assert_eq!(level_for(0, false, "warn"), LevelFilter::WARN);
        assert_eq!(level_for(1, false, "error"), LevelFilter::INFO);
        assert_eq!(level_for(3, false, "warn"), LevelFilter::DEBUG);
    }
}
