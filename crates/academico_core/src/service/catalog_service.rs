//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide course listing and course detail reads for the shell.
//! - Expose reverse lookups and catalog counts over both repositories.
//! - Enroll students into existing courses.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - A missing course surfaces as `CourseNotFound`, not a repository error.

use crate::model::course::{
    Course, CourseDetail, CourseId, CourseSummary, Subject, SubjectDetail,
};
use crate::model::person::{NewPerson, Person, PersonId, PersonType};
use crate::repo::course_repo::{CourseRepository, SqliteCourseRepository};
use crate::repo::person_repo::{PersonRepository, SqlitePersonRepository};
use crate::repo::{EntityKind, RepoError};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for catalog use-cases.
#[derive(Debug)]
pub enum CatalogServiceError {
    /// Target course does not exist.
    CourseNotFound(CourseId),
    /// `enroll_student` was given a non-student record.
    NotAStudent(PersonType),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for CatalogServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CourseNotFound(id) => write!(f, "course not found: {id}"),
            Self::NotAStudent(kind) => {
                write!(f, "only students can be enrolled, got {}", kind.as_db())
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CatalogServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound {
                entity: EntityKind::Course,
                id,
            } => Self::CourseNotFound(id),
            other => Self::Repo(other),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogServiceError>;

/// Row counts per catalog entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub coordinators: u32,
    pub professors: u32,
    pub students: u32,
    pub courses: u32,
    pub subjects: u32,
}

/// Catalog service facade over course and person repositories.
pub struct CatalogService<C: CourseRepository, P: PersonRepository> {
    courses: C,
    people: P,
}

impl<'conn> CatalogService<SqliteCourseRepository<'conn>, SqlitePersonRepository<'conn>> {
    /// Builds a service backed by SQLite repositories on one connection.
    pub fn from_connection(conn: &'conn Connection) -> Self {
        Self::new(
            SqliteCourseRepository::new(conn),
            SqlitePersonRepository::new(conn),
        )
    }
}

impl<C: CourseRepository, P: PersonRepository> CatalogService<C, P> {
    pub fn new(courses: C, people: P) -> Self {
        Self { courses, people }
    }

    /// Lists every course with its coordinator, in insertion order.
    pub fn list_courses(&self) -> CatalogResult<Vec<CourseSummary>> {
        Ok(self.courses.list_courses()?)
    }

    /// Loads a course with coordinator, subjects and professors attached.
    pub fn course_detail(&self, course_id: CourseId) -> CatalogResult<CourseDetail> {
        self.courses
            .get_course_detail(course_id)?
            .ok_or(CatalogServiceError::CourseNotFound(course_id))
    }

    /// Finds a subject of `course_id` by exact code.
    ///
    /// Returns `Ok(None)` when the course exists but has no such subject.
    pub fn find_subject(
        &self,
        course_id: CourseId,
        code: &str,
    ) -> CatalogResult<Option<SubjectDetail>> {
        let detail = self.course_detail(course_id)?;
        Ok(detail.find_subject(code).cloned())
    }

    pub fn subjects_taught_by(&self, professor_id: PersonId) -> CatalogResult<Vec<Subject>> {
        Ok(self.courses.list_subjects_by_professor(professor_id)?)
    }

    pub fn courses_coordinated_by(&self, coordinator_id: PersonId) -> CatalogResult<Vec<Course>> {
        Ok(self.courses.list_courses_by_coordinator(coordinator_id)?)
    }

    pub fn students_of(&self, course_id: CourseId) -> CatalogResult<Vec<Person>> {
        Ok(self.people.list_students_by_course(course_id)?)
    }

    /// Persists a student record; the referenced course must exist.
    pub fn enroll_student(&self, student: &NewPerson) -> CatalogResult<Person> {
        let kind = student.kind.person_type();
        if kind != PersonType::Student {
            return Err(CatalogServiceError::NotAStudent(kind));
        }
        Ok(self.people.create_person(student)?)
    }

    pub fn catalog_counts(&self) -> CatalogResult<CatalogCounts> {
        Ok(CatalogCounts {
            coordinators: self.people.count_people(PersonType::Coordinator)?,
            professors: self.people.count_people(PersonType::Professor)?,
            students: self.people.count_people(PersonType::Student)?,
            courses: self.courses.count_courses()?,
            subjects: self.courses.count_subjects()?,
        })
    }
}
