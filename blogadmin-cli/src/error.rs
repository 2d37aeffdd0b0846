//! CLI error type

use blogadmin_lib::error::ApiError;
use blogadmin_lib::error::ConfigError;
use blogadmin_lib::error::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Could not read password: {0}")]
    Password(#[source] std::io::Error),

    /// The backend answered, but not with success.
    #[error("{0}")]
    Rejected(String),

    #[error("No {resource} with id {id}")]
    NotFound { resource: String, id: String },
}
