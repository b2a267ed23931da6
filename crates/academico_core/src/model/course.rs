//! Course and subject records plus their eager-loaded read models.
//!
//! # Invariants
//! - `duration_terms` is at least one.
//! - Subject `code` is non-blank and unique within its course (enforced by
//!   storage).

use super::person::{Person, PersonId};
use super::validation::{require_text, CatalogValidationError};
use serde::{Deserialize, Serialize};

pub type CourseId = i64;
pub type SubjectId = i64;

/// Insert model for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    pub name: String,
    pub coordinator_id: PersonId,
    pub duration_terms: u32,
}

impl NewCourse {
    pub fn new(name: impl Into<String>, coordinator_id: PersonId, duration_terms: u32) -> Self {
        Self {
            name: name.into(),
            coordinator_id,
            duration_terms,
        }
    }

    pub fn validate(&self) -> Result<(), CatalogValidationError> {
        require_text("course name", &self.name)?;
        if self.duration_terms == 0 {
            return Err(CatalogValidationError::ZeroDuration);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub coordinator_id: PersonId,
    /// Length of the course in terms (semesters).
    pub duration_terms: u32,
}

/// Insert model for a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubject {
    pub course_id: CourseId,
    pub professor_id: PersonId,
    pub name: String,
    pub code: String,
    pub credits: u32,
}

impl NewSubject {
    pub fn new(
        course_id: CourseId,
        professor_id: PersonId,
        name: impl Into<String>,
        code: impl Into<String>,
        credits: u32,
    ) -> Self {
        Self {
            course_id,
            professor_id,
            name: name.into(),
            code: code.into(),
            credits,
        }
    }

    pub fn validate(&self) -> Result<(), CatalogValidationError> {
        require_text("subject name", &self.name)?;
        require_text("subject code", &self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub course_id: CourseId,
    pub professor_id: PersonId,
    pub name: String,
    pub code: String,
    pub credits: u32,
}

/// Subject with its teaching professor attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectDetail {
    pub subject: Subject,
    pub professor: Person,
}

impl SubjectDetail {
    pub fn code(&self) -> &str {
        &self.subject.code
    }

    pub fn name(&self) -> &str {
        &self.subject.name
    }
}

/// Course with its coordinator attached, used by course listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub course: Course,
    pub coordinator: Person,
}

/// Course with coordinator and every subject (plus professor) attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDetail {
    pub course: Course,
    pub coordinator: Person,
    /// Subjects in insertion order.
    pub subjects: Vec<SubjectDetail>,
}

impl CourseDetail {
    /// Finds the first subject of this course with an exactly matching code.
    pub fn find_subject(&self, code: &str) -> Option<&SubjectDetail> {
        self.subjects.iter().find(|detail| detail.code() == code)
    }
}
