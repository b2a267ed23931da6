//! Course/subject repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist courses and their subjects.
//! - Serve eager-loaded reads: courses with coordinator, course detail with
//!   subjects and professors.
//! - Derive reverse lookups (subjects per professor, courses per coordinator).
//!
//! # Invariants
//! - Listings are returned in insertion (`id ASC`) order.
//! - A course's coordinator must be a coordinator; a subject's professor must
//!   be a professor.

use crate::model::course::{
    Course, CourseDetail, CourseId, CourseSummary, NewCourse, NewSubject, Subject, SubjectDetail,
};
use crate::model::person::{PersonId, PersonType};
use crate::repo::person_repo::{
    ensure_course_exists, ensure_person_role, parse_person_row, person_select_list,
};
use crate::repo::{to_u32, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const COORDINATOR_PREFIX: &str = "coord_";
const PROFESSOR_PREFIX: &str = "prof_";

/// Repository interface for course and subject operations.
pub trait CourseRepository {
    fn create_course(&self, course: &NewCourse) -> RepoResult<Course>;
    fn create_subject(&self, subject: &NewSubject) -> RepoResult<Subject>;
    /// Lists every course with its coordinator attached.
    fn list_courses(&self) -> RepoResult<Vec<CourseSummary>>;
    /// Loads one course with coordinator, subjects and their professors.
    fn get_course_detail(&self, id: CourseId) -> RepoResult<Option<CourseDetail>>;
    fn list_subjects_by_professor(&self, professor_id: PersonId) -> RepoResult<Vec<Subject>>;
    fn list_courses_by_coordinator(&self, coordinator_id: PersonId) -> RepoResult<Vec<Course>>;
    fn count_courses(&self) -> RepoResult<u32>;
    fn count_subjects(&self) -> RepoResult<u32>;
}

/// SQLite-backed course repository.
pub struct SqliteCourseRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCourseRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn course_summary_sql(condition: &str) -> String {
        format!(
            "SELECT
                c.id,
                c.name,
                c.coordinator_id,
                c.duration_terms,
                {}
             FROM courses c
             INNER JOIN people p ON p.id = c.coordinator_id
             WHERE {condition}
             ORDER BY c.id ASC",
            person_select_list("p", COORDINATOR_PREFIX)
        )
    }

    fn load_subject_details(&self, course_id: CourseId) -> RepoResult<Vec<SubjectDetail>> {
        let sql = format!(
            "SELECT
                s.id,
                s.course_id,
                s.professor_id,
                s.name,
                s.code,
                s.credits,
                {}
             FROM subjects s
             INNER JOIN people p ON p.id = s.professor_id
             WHERE s.course_id = ?1
             ORDER BY s.id ASC",
            person_select_list("p", PROFESSOR_PREFIX)
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([course_id])?;
        let mut details = Vec::new();
        while let Some(row) = rows.next()? {
            details.push(SubjectDetail {
                subject: parse_subject_row(row)?,
                professor: parse_person_row(row, PROFESSOR_PREFIX)?,
            });
        }
        Ok(details)
    }

    fn count_table(&self, table: &'static str) -> RepoResult<u32> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {table};"),
            [],
            |row| row.get(0),
        )?;
        to_u32(count, table)
    }
}

impl CourseRepository for SqliteCourseRepository<'_> {
    fn create_course(&self, course: &NewCourse) -> RepoResult<Course> {
        course.validate()?;
        ensure_person_role(self.conn, course.coordinator_id, PersonType::Coordinator)?;

        self.conn.execute(
            "INSERT INTO courses (name, coordinator_id, duration_terms) VALUES (?1, ?2, ?3);",
            params![
                course.name.as_str(),
                course.coordinator_id,
                course.duration_terms
            ],
        )?;

        Ok(Course {
            id: self.conn.last_insert_rowid(),
            name: course.name.clone(),
            coordinator_id: course.coordinator_id,
            duration_terms: course.duration_terms,
        })
    }

    fn create_subject(&self, subject: &NewSubject) -> RepoResult<Subject> {
        subject.validate()?;
        ensure_course_exists(self.conn, subject.course_id)?;
        ensure_person_role(self.conn, subject.professor_id, PersonType::Professor)?;

        let taken: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM subjects WHERE course_id = ?1 AND code = ?2);",
            params![subject.course_id, subject.code.as_str()],
            |row| row.get(0),
        )?;
        if taken == 1 {
            return Err(RepoError::DuplicateSubjectCode {
                course_id: subject.course_id,
                code: subject.code.clone(),
            });
        }

        self.conn.execute(
            "INSERT INTO subjects (course_id, professor_id, name, code, credits)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                subject.course_id,
                subject.professor_id,
                subject.name.as_str(),
                subject.code.as_str(),
                subject.credits,
            ],
        )?;

        Ok(Subject {
            id: self.conn.last_insert_rowid(),
            course_id: subject.course_id,
            professor_id: subject.professor_id,
            name: subject.name.clone(),
            code: subject.code.clone(),
            credits: subject.credits,
        })
    }

    fn list_courses(&self) -> RepoResult<Vec<CourseSummary>> {
        let sql = Self::course_summary_sql("1 = 1");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut courses = Vec::new();
        while let Some(row) = rows.next()? {
            courses.push(CourseSummary {
                course: parse_course_row(row)?,
                coordinator: parse_person_row(row, COORDINATOR_PREFIX)?,
            });
        }
        Ok(courses)
    }

    fn get_course_detail(&self, id: CourseId) -> RepoResult<Option<CourseDetail>> {
        let sql = Self::course_summary_sql("c.id = ?1");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([id])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let course = parse_course_row(row)?;
        let coordinator = parse_person_row(row, COORDINATOR_PREFIX)?;
        let subjects = self.load_subject_details(course.id)?;

        Ok(Some(CourseDetail {
            course,
            coordinator,
            subjects,
        }))
    }

    fn list_subjects_by_professor(&self, professor_id: PersonId) -> RepoResult<Vec<Subject>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, course_id, professor_id, name, code, credits
             FROM subjects
             WHERE professor_id = ?1
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([professor_id])?;
        let mut subjects = Vec::new();
        while let Some(row) = rows.next()? {
            subjects.push(parse_subject_row(row)?);
        }
        Ok(subjects)
    }

    fn list_courses_by_coordinator(&self, coordinator_id: PersonId) -> RepoResult<Vec<Course>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, coordinator_id, duration_terms
             FROM courses
             WHERE coordinator_id = ?1
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([coordinator_id])?;
        let mut courses = Vec::new();
        while let Some(row) = rows.next()? {
            courses.push(parse_course_row(row)?);
        }
        Ok(courses)
    }

    fn count_courses(&self) -> RepoResult<u32> {
        self.count_table("courses")
    }

    fn count_subjects(&self) -> RepoResult<u32> {
        self.count_table("subjects")
    }
}

fn parse_course_row(row: &Row<'_>) -> RepoResult<Course> {
    let duration: i64 = row.get("duration_terms")?;
    let course = Course {
        id: row.get("id")?,
        name: row.get("name")?,
        coordinator_id: row.get("coordinator_id")?,
        duration_terms: to_u32(duration, "courses.duration_terms")?,
    };
    if course.duration_terms == 0 {
        return Err(RepoError::InvalidData(format!(
            "course {} has zero duration",
            course.id
        )));
    }
    Ok(course)
}

fn parse_subject_row(row: &Row<'_>) -> RepoResult<Subject> {
    let credits: i64 = row.get("credits")?;
    Ok(Subject {
        id: row.get("id")?,
        course_id: row.get("course_id")?,
        professor_id: row.get("professor_id")?,
        name: row.get("name")?,
        code: row.get("code")?,
        credits: to_u32(credits, "subjects.credits")?,
    })
}
