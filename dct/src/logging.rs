//! Diagnostic logging to stderr.

use tracing::Level;

/// Map `-v` occurrences to a maximum log level.
pub fn level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Reports go to stdout; logs stay on stderr.
pub fn init(verbose: u8) {
    tracing_subscriber::fmt()
        .with_max_level(level(verbose))
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(level(0), Level::WARN);
        assert_eq!(level(1), Level::INFO);
        assert_eq!(level(2), Level::DEBUG);
        assert_eq!(level(3), Level::TRACE);
        assert_eq!(level(9), Level::TRACE);
    }
}
