//! Error handling

/// Failure definitions for the autostock pipeline.
#[derive(Debug)]
pub enum AutostockError {
    /// Filesystem operations failed
    Io(std::io::Error),
    /// HTTP transport failure talking to a generation service
    Http(reqwest::Error),
    /// Image decode or encode failure
    Image(image::ImageError),
    /// Metadata table write failure
    Csv(csv::Error),
    /// The service answered but the payload was unusable
    Api(String),
}

impl std::fmt::Display for AutostockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::Http(err) => write!(f, "HTTP error: {err}"),
            Self::Image(err) => write!(f, "Image error: {err}"),
            Self::Csv(err) => write!(f, "CSV error: {err}"),
            Self::Api(message) => write!(f, "Service error: {message}"),
        }
    }
}

impl std::error::Error for AutostockError {}

impl From<std::io::Error> for AutostockError {
    fn from(err: std::io::Error) -> Self {
        AutostockError::Io(err)
    }
}

impl From<reqwest::Error> for AutostockError {
    fn from(err: reqwest::Error) -> Self {
        AutostockError::Http(err)
    }
}

impl From<image::ImageError> for AutostockError {
    fn from(err: image::ImageError) -> Self {
        AutostockError::Image(err)
    }
}

impl From<csv::Error> for AutostockError {
    fn from(err: csv::Error) -> Self {
        AutostockError::Csv(err)
    }
}
