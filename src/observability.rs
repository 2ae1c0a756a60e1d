//! Logging setup for hosts that embed the registry.
//!
//! The library itself only talks to the `log` facade. Hosts that have no logger
//! of their own can call `init_logging` once to install an `env_logger` backend.

use log::LevelFilter;
use std::fs::OpenOptions;
use std::io;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Builds the `[LEVEL] message` logger, appending to `log_file` if given.
fn build_logger(level: LevelFilter, log_file: Option<&str>) -> io::Result<env_logger::Builder> {
    let mut builder = env_logger::Builder::new();

    builder.is_test(false);
    builder.filter_level(level);

    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(buf, "[{}] {}", record.level(), record.args())
    });

    if let Some(path) = log_file {
        let file = OpenOptions::new().append(true).create(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    Ok(builder)
}

/// Installs a `[LEVEL] message` logger at `level`, optionally appending to
/// `log_file` instead of stderr. Only the first call has any effect; later
/// calls do not touch `log_file`.
pub fn init_logging(level: LevelFilter, log_file: Option<&str>) -> io::Result<()> {
    let mut result = Ok(());
    INIT_LOGGER.call_once(|| match build_logger(level, log_file) {
        // Another logger may already be installed by the host; that one wins.
        Ok(mut builder) => {
            let _ = builder.try_init();
        }
        Err(e) => result = Err(e),
    });
    result
}
