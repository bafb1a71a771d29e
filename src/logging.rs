use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::General;
use crate::errors::LoggingError;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l:<5} {t} - {m}{n}";

/// Sets up log4rs as the logger given the general configuration
///
/// # Arguments
///
/// * 'general' - the general section of the configuration
pub fn setup_logger(general: &General) -> Result<(), LoggingError> {
    let config = build_config(general)?;
    let _ = log4rs::init_config(config)?;

    Ok(())
}

/// Builds a log4rs configuration with a file appender and, if configured, a stdout appender
///
/// # Arguments
///
/// * 'general' - the general section of the configuration
fn build_config(general: &General) -> Result<Config, LoggingError> {
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(&general.log_path)?;

    let mut builder = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file)));
    let mut root = Root::builder().appender("file");

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    Ok(builder.build(root.build(general.log_level))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn test_build_config() {
        let dir = tempfile::tempdir().unwrap();
        let general = General {
            log_path: dir.path().join("solforecast.log").to_str().unwrap().to_string(),
            log_level: LevelFilter::Debug,
            log_to_stdout: true,
            show_notices: false,
        };

        let config = build_config(&general).unwrap();

        assert_eq!(config.appenders().len(), 2);
        assert_eq!(config.root().level(), LevelFilter::Debug);
        assert_eq!(config.root().appenders(), ["file".to_string(), "stdout".to_string()]);
    }
}
