//! Person repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist professors, coordinators and students in the single `people`
//!   table keyed by the `person_type` discriminator.
//! - Provide role-filtered listings and the course -> students reverse lookup.
//!
//! # Invariants
//! - Role-specific columns are written only for the matching discriminator.
//! - Student rows reference an existing course.

use crate::model::course::CourseId;
use crate::model::person::{
    NewPerson, Person, PersonId, PersonKind, PersonType, StaffInfo, StudentInfo,
};
use crate::repo::{EntityKind, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const PERSON_COLUMNS: [&str; 11] = [
    "id",
    "person_type",
    "name",
    "national_id",
    "email",
    "hire_date",
    "job_title",
    "salary",
    "course_id",
    "enrollment_date",
    "registration_number",
];

/// Repository interface for people of every role.
pub trait PersonRepository {
    fn create_person(&self, person: &NewPerson) -> RepoResult<Person>;
    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>>;
    /// Lists people in id order, optionally restricted to one role.
    fn list_people(&self, kind: Option<PersonType>) -> RepoResult<Vec<Person>>;
    fn count_people(&self, kind: PersonType) -> RepoResult<u32>;
    fn list_students_by_course(&self, course_id: CourseId) -> RepoResult<Vec<Person>>;
}

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn select_where(&self, condition: &str) -> String {
        format!(
            "SELECT {} FROM people p WHERE {condition} ORDER BY p.id ASC",
            person_select_list("p", "")
        )
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn create_person(&self, person: &NewPerson) -> RepoResult<Person> {
        person.validate()?;

        let (staff, student): (Option<&StaffInfo>, Option<&StudentInfo>) = match &person.kind {
            PersonKind::Professor(info) | PersonKind::Coordinator(info) => (Some(info), None),
            PersonKind::Student(info) => {
                ensure_course_exists(self.conn, info.course_id)?;
                (None, Some(info))
            }
        };

        self.conn.execute(
            "INSERT INTO people (
                person_type,
                name,
                national_id,
                email,
                hire_date,
                job_title,
                salary,
                course_id,
                enrollment_date,
                registration_number
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                person.kind.person_type().as_db(),
                person.name.as_str(),
                person.national_id.as_str(),
                person.email.as_str(),
                staff.map(|info| info.hire_date),
                staff.map(|info| info.job_title.as_str()),
                staff.map(|info| info.salary),
                student.map(|info| info.course_id),
                student.map(|info| info.enrollment_date),
                student.map(|info| info.registration_number.as_str()),
            ],
        )?;

        Ok(Person::from_new(self.conn.last_insert_rowid(), person.clone()))
    }

    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>> {
        let sql = self.select_where("p.id = ?1");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_person_row(row, "")?));
        }
        Ok(None)
    }

    fn list_people(&self, kind: Option<PersonType>) -> RepoResult<Vec<Person>> {
        let sql = self.select_where("(?1 IS NULL OR p.person_type = ?1)");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([kind.map(PersonType::as_db)])?;
        let mut people = Vec::new();
        while let Some(row) = rows.next()? {
            people.push(parse_person_row(row, "")?);
        }
        Ok(people)
    }

    fn count_people(&self, kind: PersonType) -> RepoResult<u32> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM people WHERE person_type = ?1;",
            [kind.as_db()],
            |row| row.get(0),
        )?;
        crate::repo::to_u32(count, "people count")
    }

    fn list_students_by_course(&self, course_id: CourseId) -> RepoResult<Vec<Person>> {
        let sql = self.select_where("p.person_type = 'student' AND p.course_id = ?1");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([course_id])?;
        let mut students = Vec::new();
        while let Some(row) = rows.next()? {
            students.push(parse_person_row(row, "")?);
        }
        Ok(students)
    }
}

/// Builds a `SELECT` column list for `people` aliased as `alias`, with every
/// output column renamed to `<prefix><column>`.
///
/// Lets join queries pull a full person next to other tables without name
/// clashes on `id`/`name`.
pub(crate) fn person_select_list(alias: &str, prefix: &str) -> String {
    PERSON_COLUMNS
        .iter()
        .map(|column| format!("{alias}.{column} AS {prefix}{column}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses a person from columns produced by [`person_select_list`].
pub(crate) fn parse_person_row(row: &Row<'_>, prefix: &str) -> RepoResult<Person> {
    let col = |name: &str| format!("{prefix}{name}");

    let id: PersonId = row.get(col("id").as_str())?;
    let type_text: String = row.get(col("person_type").as_str())?;
    let person_type = PersonType::parse_db(&type_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid person type `{type_text}` in people.person_type"
        ))
    })?;

    let kind = match person_type {
        PersonType::Professor | PersonType::Coordinator => {
            let staff = StaffInfo {
                hire_date: required(row, &col("hire_date"), id)?,
                job_title: required(row, &col("job_title"), id)?,
                salary: required(row, &col("salary"), id)?,
            };
            if person_type == PersonType::Professor {
                PersonKind::Professor(staff)
            } else {
                PersonKind::Coordinator(staff)
            }
        }
        PersonType::Student => PersonKind::Student(StudentInfo {
            course_id: required(row, &col("course_id"), id)?,
            enrollment_date: required(row, &col("enrollment_date"), id)?,
            registration_number: required(row, &col("registration_number"), id)?,
        }),
    };

    let person = NewPerson {
        name: row.get(col("name").as_str())?,
        national_id: row.get(col("national_id").as_str())?,
        email: row.get(col("email").as_str())?,
        kind,
    };
    person.validate()?;
    Ok(Person::from_new(id, person))
}

/// Loads a person and checks it has the expected role.
pub(crate) fn ensure_person_role(
    conn: &Connection,
    person_id: PersonId,
    expected: PersonType,
) -> RepoResult<()> {
    let type_text: Option<String> = conn
        .query_row(
            "SELECT person_type FROM people WHERE id = ?1;",
            [person_id],
            |row| row.get(0),
        )
        .optional()?;
    let type_text = type_text.ok_or(RepoError::NotFound {
        entity: EntityKind::Person,
        id: person_id,
    })?;
    let actual = PersonType::parse_db(&type_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid person type `{type_text}` in people.person_type"
        ))
    })?;
    if actual != expected {
        return Err(RepoError::RoleMismatch {
            person_id,
            expected,
            actual,
        });
    }
    Ok(())
}

pub(crate) fn ensure_course_exists(conn: &Connection, course_id: CourseId) -> RepoResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM courses WHERE id = ?1);",
        [course_id],
        |row| row.get(0),
    )?;
    if exists == 0 {
        return Err(RepoError::NotFound {
            entity: EntityKind::Course,
            id: course_id,
        });
    }
    Ok(())
}

fn required<T: rusqlite::types::FromSql>(
    row: &Row<'_>,
    column: &str,
    person_id: PersonId,
) -> RepoResult<T> {
    row.get::<_, Option<T>>(column)?.ok_or_else(|| {
        RepoError::InvalidData(format!("missing {column} for person {person_id}"))
    })
}
