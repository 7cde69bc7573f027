use thiserror::Error;

pub mod app_error;
pub mod db_error;
pub mod validation_error;

pub use app_error::AppError;
pub use db_error::DbError;
pub use validation_error::ValidationError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Db(#[from] DbError),
}
