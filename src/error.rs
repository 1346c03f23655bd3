use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Connection pool is already started")]
    AlreadyStarted,

    #[error("Connection pool is not started")]
    NotStarted,

    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Unable to create new friend")]
    InsertFailed,
}

pub type Result<T> = std::result::Result<T, DbError>;
