//! Error type for the interactive shell and program bootstrap.

use academico_core::db::DbError;
use academico_core::{CatalogServiceError, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ShellError {
    Io(std::io::Error),
    /// Input where a menu or course number was expected did not parse.
    InvalidNumber(String),
    Db(DbError),
    Catalog(CatalogServiceError),
    Seed(RepoError),
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "console I/O failed: {err}"),
            Self::InvalidNumber(text) => write!(f, "expected a number, got `{text}`"),
            Self::Db(err) => write!(f, "database error: {err}"),
            Self::Catalog(err) => write!(f, "catalog error: {err}"),
            Self::Seed(err) => write!(f, "failed to seed catalog: {err}"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidNumber(_) => None,
            Self::Db(err) => Some(err),
            Self::Catalog(err) => Some(err),
            Self::Seed(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ShellError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DbError> for ShellError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<CatalogServiceError> for ShellError {
    fn from(value: CatalogServiceError) -> Self {
        Self::Catalog(value)
    }
}
