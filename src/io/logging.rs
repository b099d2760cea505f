//! Logger setup for the command-line tool

use log::LevelFilter;

/// Initialize logging at Debug when `debug_enabled`, Info otherwise
///
/// `RUST_LOG` overrides the default filter when set. Calling this more than
/// once keeps the first logger.
pub fn init_logger(debug_enabled: bool) {
    let level = level_for(debug_enabled);

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}

/// Filter level selected by the verbosity flag
pub const fn level_for(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
