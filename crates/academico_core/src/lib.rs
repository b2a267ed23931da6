//! Core domain logic for the academic records console.
//! This crate owns the catalog schema, its invariants and the session grid.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;

pub use logging::{init_logging, logging_status, LogLevel, LoggingError};
pub use model::course::{
    Course, CourseDetail, CourseId, CourseSummary, NewCourse, NewSubject, Subject, SubjectDetail,
    SubjectId,
};
pub use model::person::{
    NewPerson, Person, PersonId, PersonKind, PersonType, StaffInfo, StudentInfo,
};
pub use model::validation::CatalogValidationError;
pub use repo::course_repo::{CourseRepository, SqliteCourseRepository};
pub use repo::person_repo::{PersonRepository, SqlitePersonRepository};
pub use repo::{EntityKind, RepoError, RepoResult};
pub use service::catalog_service::{
    CatalogCounts, CatalogResult, CatalogService, CatalogServiceError,
};
pub use service::seed_service::{seed_sample_catalog, SeedSummary};
pub use session::grid::{CurriculumGrid, GridChange};
pub use session::Session;
