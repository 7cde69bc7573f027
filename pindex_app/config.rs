use dotenvy::dotenv;
use std::env;

use pindex_types::errors::{AppError, ApplicationError};

const DATABASE_NAME_VAR: &str = "PINDEX_DATABASE_NAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    /// Falls back to the default database of `database_url` when `None`.
    pub database_name: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::load("DATABASE_URL")
    }

    pub fn test_from_env() -> Result<Self, ApplicationError> {
        Self::load("TEST_DATABASE_URL")
    }

    fn load(url_var: &'static str) -> Result<Self, ApplicationError> {
        dotenv().ok();

        Self::from_values(
            url_var,
            env::var(url_var).ok(),
            env::var(DATABASE_NAME_VAR).ok(),
        )
    }

    fn from_values(
        url_var: &'static str,
        database_url: Option<String>,
        database_name: Option<String>,
    ) -> Result<Self, ApplicationError> {
        let database_url = match database_url {
            Some(val) if !val.trim().is_empty() => val,
            _ => return Err(AppError::MissingEnv(url_var).into()),
        };

        let database_name = database_name.filter(|name| !name.trim().is_empty());

        Ok(Self {
            database_url,
            database_name,
        })
    }
}
