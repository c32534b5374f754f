//! Debug logging to standard error, backed by `env_logger`.

use log::LevelFilter;

/// Level used for the given `--verbose` setting.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::Debug } else { LevelFilter::Warn }
}

/// Installs the logger. `RUST_LOG` refines the level picked by `--verbose`.
///
/// A second call keeps the first logger.
pub fn init(verbose: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
