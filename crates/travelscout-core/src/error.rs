use thiserror::Error;

/// All the ways a lookup can go wrong
///
/// Every variant is terminal for the current user action. None of them
/// should ever take the session down with it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load catalog: {0}")]
    LoadError(String),

    #[error("Search query is empty")]
    EmptyQuery,

    #[error("Catalog is not loaded")]
    NotReady,

    #[error("No destinations matched the query")]
    NoResults,

    #[error("Unknown time zone: {0}")]
    InvalidTimeZone(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// The text shown in the shared error area
    pub fn user_message(&self) -> String {
        match self {
            Error::LoadError(_) => {
                "Could not load travel recommendations. Please try again later.".to_string()
            }
            Error::EmptyQuery => "Please enter a destination or keyword.".to_string(),
            Error::NotReady => "Data is loading. Please wait a moment and try again.".to_string(),
            Error::NoResults => "No destinations found.".to_string(),
            Error::InvalidTimeZone(_) => crate::slots::TIME_UNAVAILABLE.to_string(),
            other => other.to_string(),
        }
    }
}
