use thiserror::Error;

#[derive(Error, Debug)]
#[error("unknown weather category value: {0}")]
pub struct CategoryError(pub i32);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ConfigError::Io: {0}")]
    Io(#[from] std::io::Error),
    #[error("ConfigError::Document: {0}")]
    Document(#[from] toml::de::Error),
    #[error("ConfigError::Invalid: {0}")]
    Invalid(String),
}

/// Errors while converting a response section into forecast records
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("ExtractError::MissingSection: {0}")]
    MissingSection(&'static str),
    #[error("ExtractError::Document: {0}")]
    Document(#[from] serde_json::Error),
    #[error("ExtractError::LengthMismatch: '{field}' has {found} values, expected {expected}")]
    LengthMismatch { field: &'static str, found: usize, expected: usize },
    #[error("ExtractError::Timestamp: {0} is out of range")]
    Timestamp(i64),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("StoreError::Io: {0}")]
    Io(#[from] std::io::Error),
    #[error("StoreError::Document: {0}")]
    Document(#[from] serde_json::Error),
    #[error("StoreError::Pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("StoreError::Glob: {0}")]
    Glob(#[from] glob::GlobError),
}

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("ProcessError::Document: response is not valid json: {0}")]
    Document(#[from] serde_json::Error),
    #[error("ProcessError::Extract: {section}: {source}")]
    Extract { section: &'static str, source: ExtractError },
    #[error("ProcessError::Empty: no {0} forecasts in response")]
    Empty(&'static str),
    #[error("ProcessError::Store: {0}")]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("LoggingError::Io: {0}")]
    Io(#[from] std::io::Error),
    #[error("LoggingError::Config: {0}")]
    Config(#[from] log4rs::config::runtime::ConfigErrors),
    #[error("LoggingError::SetLogger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

#[derive(Error, Debug)]
#[error("SolForecastInitError: {0}")]
pub struct InitError(pub String);
impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self { InitError(e.to_string()) }
}
impl From<LoggingError> for InitError {
    fn from(e: LoggingError) -> Self { InitError(e.to_string()) }
}
impl From<StoreError> for InitError {
    fn from(e: StoreError) -> Self { InitError(e.to_string()) }
}
