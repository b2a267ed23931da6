//! Sample catalog seeding.
//!
//! # Responsibility
//! - Insert the fixed demo catalog (coordinators, professors, courses,
//!   subjects) into a freshly migrated database.
//!
//! # Invariants
//! - Seeding runs in one transaction: either the whole catalog lands or none.
//! - Insert order is stable, so ids are deterministic on an empty database.

use crate::model::course::{NewCourse, NewSubject};
use crate::model::person::{NewPerson, PersonId, StaffInfo};
use crate::repo::course_repo::{CourseRepository, SqliteCourseRepository};
use crate::repo::person_repo::{PersonRepository, SqlitePersonRepository};
use crate::repo::RepoResult;
use log::{error, info};
use rusqlite::Connection;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

const COORDINATOR_TITLE: &str = "Coordenador";
const PROFESSOR_TITLE: &str = "Professor";

struct StaffSeed {
    name: &'static str,
    national_id: &'static str,
    email: &'static str,
    salary: f64,
}

struct CourseSeed {
    name: &'static str,
    coordinator: usize,
    duration_terms: u32,
}

struct SubjectSeed {
    name: &'static str,
    code: &'static str,
    credits: u32,
    professor: usize,
    course: usize,
}

const COORDINATORS: [StaffSeed; 4] = [
    staff("Alan", "12345678900", "carlos@exemplo.com", 8000.0),
    staff("Maria", "22345678900", "maria@exemplo.com", 8500.0),
    staff("João", "32345678900", "joao@exemplo.com", 9000.0),
    staff("Carla", "42345678900", "ana@exemplo.com", 8200.0),
];

const PROFESSORS: [StaffSeed; 8] = [
    staff("Ana", "98765432100", "ana@exemplo.com", 6000.0),
    staff("Pedro", "98765432101", "pedro@exemplo.com", 6100.0),
    staff("Lucas", "98765432102", "lucas@exemplo.com", 6200.0),
    staff("Fernanda", "98765432103", "fernanda@exemplo.com", 6300.0),
    staff("William", "98225432100", "william@exemplo.com", 6000.0),
    staff("Marcia", "98744432101", "marcia@exemplo.com", 6100.0),
    staff("Felipe", "98765435102", "felipe@exemplo.com", 6200.0),
    staff("Mariana", "98885432103", "mariana@exemplo.com", 6300.0),
];

const COURSES: [CourseSeed; 4] = [
    CourseSeed {
        name: "Engenharia de Software",
        coordinator: 0,
        duration_terms: 8,
    },
    CourseSeed {
        name: "Psicologia",
        coordinator: 1,
        duration_terms: 10,
    },
    CourseSeed {
        name: "Direito",
        coordinator: 2,
        duration_terms: 10,
    },
    CourseSeed {
        name: "Enfermagem",
        coordinator: 3,
        duration_terms: 8,
    },
];

const SUBJECTS: [SubjectSeed; 16] = [
    subject("Programação Orientada a Objetos", "POO101", 4, 0, 0),
    subject("Estruturas de Dados", "ED102", 4, 0, 0),
    subject("Fisica Geral", "FS103", 4, 4, 0),
    subject("Calculo", "CC104", 4, 4, 0),
    subject("Psicologia Geral", "PSI101", 3, 1, 1),
    subject("Psicologia do Desenvolvimento", "PSI102", 3, 1, 1),
    subject("Direito Constitucional", "DIR101", 5, 2, 2),
    subject("Direito Civil", "DIR102", 5, 2, 2),
    subject("Anatomia Humana", "ENF101", 4, 3, 3),
    subject("Enfermagem Clínica", "ENF102", 4, 3, 3),
    subject("Psicologia Comportamental", "PSI103", 3, 5, 1),
    subject("Historia da psicologia", "PSI104", 3, 5, 1),
    subject("Direito Administrativo", "DIR103", 5, 6, 2),
    subject("Direito Penal", "DIR104", 5, 6, 2),
    subject("Bioquimica", "ENF103", 4, 7, 3),
    subject("Clinica", "ENF104", 4, 7, 3),
];

const fn staff(
    name: &'static str,
    national_id: &'static str,
    email: &'static str,
    salary: f64,
) -> StaffSeed {
    StaffSeed {
        name,
        national_id,
        email,
        salary,
    }
}

const fn subject(
    name: &'static str,
    code: &'static str,
    credits: u32,
    professor: usize,
    course: usize,
) -> SubjectSeed {
    SubjectSeed {
        name,
        code,
        credits,
        professor,
        course,
    }
}

/// Counts of rows inserted by [`seed_sample_catalog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub coordinators: usize,
    pub professors: usize,
    pub courses: usize,
    pub subjects: usize,
}

/// Inserts the sample catalog inside one transaction.
///
/// Expects an empty, migrated database (see `db::recreate_db`). Running it
/// twice on the same file inserts a second copy of every row.
///
/// # Side effects
/// - Emits a `catalog_seed` event with counts and duration.
pub fn seed_sample_catalog(conn: &mut Connection) -> RepoResult<SeedSummary> {
    let started_at = Instant::now();
    match insert_sample_catalog(conn) {
        Ok(summary) => {
            info!(
                "event=catalog_seed module=service status=ok coordinators={} professors={} courses={} subjects={} duration_ms={}",
                summary.coordinators,
                summary.professors,
                summary.courses,
                summary.subjects,
                started_at.elapsed().as_millis()
            );
            Ok(summary)
        }
        Err(err) => {
            error!(
                "event=catalog_seed module=service status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn insert_sample_catalog(conn: &mut Connection) -> RepoResult<SeedSummary> {
    let hired_at = now_epoch_ms();
    let tx = conn.transaction()?;
    let summary = {
        let people = SqlitePersonRepository::new(&tx);
        let courses = SqliteCourseRepository::new(&tx);

        let coordinator_ids = COORDINATORS
            .iter()
            .map(|seed| {
                let info = staff_info(seed, COORDINATOR_TITLE, hired_at);
                people
                    .create_person(&NewPerson::coordinator(
                        seed.name,
                        seed.national_id,
                        seed.email,
                        info,
                    ))
                    .map(|person| person.id)
            })
            .collect::<RepoResult<Vec<PersonId>>>()?;

        let professor_ids = PROFESSORS
            .iter()
            .map(|seed| {
                let info = staff_info(seed, PROFESSOR_TITLE, hired_at);
                people
                    .create_person(&NewPerson::professor(
                        seed.name,
                        seed.national_id,
                        seed.email,
                        info,
                    ))
                    .map(|person| person.id)
            })
            .collect::<RepoResult<Vec<PersonId>>>()?;

        let course_ids = COURSES
            .iter()
            .map(|seed| {
                courses
                    .create_course(&NewCourse::new(
                        seed.name,
                        coordinator_ids[seed.coordinator],
                        seed.duration_terms,
                    ))
                    .map(|course| course.id)
            })
            .collect::<RepoResult<Vec<_>>>()?;

        for seed in &SUBJECTS {
            courses.create_subject(&NewSubject::new(
                course_ids[seed.course],
                professor_ids[seed.professor],
                seed.name,
                seed.code,
                seed.credits,
            ))?;
        }

        SeedSummary {
            coordinators: coordinator_ids.len(),
            professors: professor_ids.len(),
            courses: course_ids.len(),
            subjects: SUBJECTS.len(),
        }
    };
    tx.commit()?;
    Ok(summary)
}

fn staff_info(seed: &StaffSeed, job_title: &str, hired_at: i64) -> StaffInfo {
    StaffInfo {
        hire_date: hired_at,
        job_title: job_title.to_string(),
        salary: seed.salary,
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{COURSES, PROFESSORS, SUBJECTS};
    use std::collections::HashSet;

    #[test]
    fn seed_tables_reference_valid_indexes() {
        for seed in &SUBJECTS {
            assert!(seed.professor < PROFESSORS.len(), "{}", seed.code);
            assert!(seed.course < COURSES.len(), "{}", seed.code);
        }
    }

    #[test]
    fn seed_subject_codes_are_unique_per_course() {
        let mut seen = HashSet::new();
        for seed in &SUBJECTS {
            assert!(seen.insert((seed.course, seed.code)), "{}", seed.code);
        }
    }
}
