use thiserror::Error;

/// Failure of the planting data source.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Planting data source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidQuery {
    #[error("Missing required field `{0}`.")]
    MissingField(&'static str),
}
