//! Logger initialisation for the binary.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Initialise log4rs from `config_file`, or log warnings to stderr when it is missing.
pub fn init_logging(config_file: &Path) -> Result<(), Box<dyn Error>> {
    if config_file.exists() {
        log4rs::init_file(config_file, Default::default()).map_err(|e| {
            format!(
                "Error initializing log4rs from {}: {e}",
                config_file.display()
            )
        })?;
        log::debug!("log4rs configured from {}", config_file.display());
    } else {
        log4rs::init_config(fallback_config()?)?;
        log::debug!(
            "log config {} not found, using stderr fallback",
            config_file.display()
        );
    }
    Ok(())
}

/// Console logging on stderr at `warn`, stdout stays clean for results.
fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}
