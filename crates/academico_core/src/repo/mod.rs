//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for the catalog.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Write paths validate insert models before any SQL mutation.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Referenced rows are checked for existence and role before insert, so
//!   callers get `NotFound`/`RoleMismatch` instead of a raw constraint error.

use crate::db::DbError;
use crate::model::person::{PersonId, PersonType};
use crate::model::validation::CatalogValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod course_repo;
pub mod person_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Catalog entity names used in `NotFound` errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Course,
    Subject,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Person => "person",
            Self::Course => "course",
            Self::Subject => "subject",
        };
        f.write_str(name)
    }
}

/// Repository error for catalog persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(CatalogValidationError),
    Db(DbError),
    NotFound {
        entity: EntityKind,
        id: i64,
    },
    /// Referenced person exists but has another role.
    RoleMismatch {
        person_id: PersonId,
        expected: PersonType,
        actual: PersonType,
    },
    /// Subject code already used inside the same course.
    DuplicateSubjectCode {
        course_id: i64,
        code: String,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::RoleMismatch {
                person_id,
                expected,
                actual,
            } => write!(
                f,
                "person {person_id} is a {} but a {} is required",
                actual.as_db(),
                expected.as_db()
            ),
            Self::DuplicateSubjectCode { course_id, code } => {
                write!(f, "subject code `{code}` already exists in course {course_id}")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted catalog data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CatalogValidationError> for RepoError {
    fn from(value: CatalogValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

pub(crate) fn to_u32(value: i64, column: &str) -> RepoResult<u32> {
    u32::try_from(value)
        .map_err(|_| RepoError::InvalidData(format!("value `{value}` out of range in {column}")))
}
