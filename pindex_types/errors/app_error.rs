use thiserror::Error;

/// Errors for app setup.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} must be set")]
    MissingEnv(&'static str),
}
