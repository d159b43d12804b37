use sea_orm::DbErr;
use thiserror::Error;

/// Coarse classification the web layer uses to decide how to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Auth,
    Forbidden,
    NotFound,
    Internal,
}

pub trait DomainError: std::error::Error + Send + Sync + 'static {
    fn kind(&self) -> ErrorKind;
}

#[derive(Debug, Error)]
pub enum UserError {
    #[error("{0}")]
    Validation(String),
    #[error("Username already exists.")]
    UsernameTaken,
    #[error("Email already registered.")]
    EmailTaken,
    /// Deliberately the same message for unknown users and wrong passwords.
    #[error("Invalid username or password.")]
    InvalidCredentials,
    #[error("User not found")]
    NotFound,
    #[error("failed to hash password")]
    Hash(#[from] bcrypt::BcryptError),
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl DomainError for UserError {
    fn kind(&self) -> ErrorKind {
        match self {
            UserError::Validation(_) | UserError::UsernameTaken | UserError::EmailTaken => {
                ErrorKind::Validation
            }
            UserError::InvalidCredentials => ErrorKind::Auth,
            UserError::NotFound => ErrorKind::NotFound,
            UserError::Hash(_) | UserError::Db(_) => ErrorKind::Internal,
        }
    }
}

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("Invalid game name.")]
    UnknownGame,
    #[error("Invalid number of tries or date format.")]
    InvalidValue,
    #[error("Invalid number of tries or date format.")]
    InvalidDate,
    #[error("Score not found.")]
    NotFound,
    #[error("You cannot delete this score.")]
    Forbidden,
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl DomainError for ScoreError {
    fn kind(&self) -> ErrorKind {
        match self {
            ScoreError::UnknownGame | ScoreError::InvalidValue | ScoreError::InvalidDate => {
                ErrorKind::Validation
            }
            ScoreError::NotFound => ErrorKind::NotFound,
            ScoreError::Forbidden => ErrorKind::Forbidden,
            ScoreError::Db(_) => ErrorKind::Internal,
        }
    }
}
