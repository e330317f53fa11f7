//! Logger setup for the command line tool.

use log::LevelFilter;

/// Initialize logging for the command line tool.
///
/// `verbose` selects `Debug` level, otherwise `Info`. `RUST_LOG` overrides both.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
