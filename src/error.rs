use thiserror::Error;

/// Failures while bringing the browser app up
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("Element #{0} not found")]
    MissingElement(&'static str),
    #[error("Element #{0} is not a canvas")]
    NotACanvas(&'static str),
    #[error("Failed to create surface: {0}")]
    Surface(String),
    #[error("Failed to get adapter: {0}")]
    Adapter(String),
    #[error("Failed to create device: {0}")]
    Device(String),
    #[error("Logger already initialised")]
    Logger,
}
