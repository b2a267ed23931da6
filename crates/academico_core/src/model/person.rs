//! Person records and their role-specific payloads.
//!
//! # Responsibility
//! - Model professors, coordinators and students as one tagged union.
//! - Keep shared identity fields (`name`, `national_id`, `email`) in one place.
//!
//! # Invariants
//! - Staff payloads carry a non-negative salary.
//! - A student always references exactly one course.

use super::course::CourseId;
use super::validation::{require_text, CatalogValidationError};
use serde::{Deserialize, Serialize};

/// Storage-assigned person identifier, shared by every role.
pub type PersonId = i64;

/// Discriminator for the person hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonType {
    Professor,
    Coordinator,
    Student,
}

impl PersonType {
    /// Value stored in the `people.person_type` discriminator column.
    pub fn as_db(self) -> &'static str {
        match self {
            Self::Professor => "professor",
            Self::Coordinator => "coordinator",
            Self::Student => "student",
        }
    }

    pub fn parse_db(value: &str) -> Option<Self> {
        match value {
            "professor" => Some(Self::Professor),
            "coordinator" => Some(Self::Coordinator),
            "student" => Some(Self::Student),
            _ => None,
        }
    }
}

/// Employment data shared by professors and coordinators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffInfo {
    /// Unix epoch milliseconds.
    pub hire_date: i64,
    pub job_title: String,
    pub salary: f64,
}

/// Enrollment data for a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    pub course_id: CourseId,
    /// Unix epoch milliseconds.
    pub enrollment_date: i64,
    pub registration_number: String,
}

/// Role payload of a person. Serialized with a `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PersonKind {
    Professor(StaffInfo),
    Coordinator(StaffInfo),
    Student(StudentInfo),
}

impl PersonKind {
    pub fn person_type(&self) -> PersonType {
        match self {
            Self::Professor(_) => PersonType::Professor,
            Self::Coordinator(_) => PersonType::Coordinator,
            Self::Student(_) => PersonType::Student,
        }
    }

    /// Staff payload for professors and coordinators, `None` for students.
    pub fn staff(&self) -> Option<&StaffInfo> {
        match self {
            Self::Professor(info) | Self::Coordinator(info) => Some(info),
            Self::Student(_) => None,
        }
    }

    pub fn student(&self) -> Option<&StudentInfo> {
        match self {
            Self::Student(info) => Some(info),
            _ => None,
        }
    }

    fn validate(&self) -> Result<(), CatalogValidationError> {
        match self {
            Self::Professor(info) | Self::Coordinator(info) => {
                require_text("job_title", &info.job_title)?;
                if info.salary.is_nan() || info.salary < 0.0 {
                    return Err(CatalogValidationError::InvalidSalary(info.salary));
                }
                Ok(())
            }
            Self::Student(info) => require_text("registration_number", &info.registration_number),
        }
    }
}

/// Insert model for a person; the id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub kind: PersonKind,
}

impl NewPerson {
    pub fn professor(
        name: impl Into<String>,
        national_id: impl Into<String>,
        email: impl Into<String>,
        staff: StaffInfo,
    ) -> Self {
        Self::with_kind(name, national_id, email, PersonKind::Professor(staff))
    }

    pub fn coordinator(
        name: impl Into<String>,
        national_id: impl Into<String>,
        email: impl Into<String>,
        staff: StaffInfo,
    ) -> Self {
        Self::with_kind(name, national_id, email, PersonKind::Coordinator(staff))
    }

    pub fn student(
        name: impl Into<String>,
        national_id: impl Into<String>,
        email: impl Into<String>,
        enrollment: StudentInfo,
    ) -> Self {
        Self::with_kind(name, national_id, email, PersonKind::Student(enrollment))
    }

    fn with_kind(
        name: impl Into<String>,
        national_id: impl Into<String>,
        email: impl Into<String>,
        kind: PersonKind,
    ) -> Self {
        Self {
            name: name.into(),
            national_id: national_id.into(),
            email: email.into(),
            kind,
        }
    }

    /// Checks shared and role-specific invariants before persistence.
    pub fn validate(&self) -> Result<(), CatalogValidationError> {
        require_text("name", &self.name)?;
        require_text("national_id", &self.national_id)?;
        require_text("email", &self.email)?;
        self.kind.validate()
    }
}

/// Persisted person record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub kind: PersonKind,
}

impl Person {
    pub fn from_new(id: PersonId, person: NewPerson) -> Self {
        Self {
            id,
            name: person.name,
            national_id: person.national_id,
            email: person.email,
            kind: person.kind,
        }
    }

    pub fn person_type(&self) -> PersonType {
        self.kind.person_type()
    }
}
