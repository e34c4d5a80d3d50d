use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Account is already in use")]
    AccountInUse,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Backend error: {0}")]
    Backend(String),
}

impl Error {
    /// Whether this error is a login decision rather than an
    /// infrastructure fault.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }
}
