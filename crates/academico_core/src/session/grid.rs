//! In-memory curriculum grid.
//!
//! # Responsibility
//! - Keep the subjects a user picked, in the order they were added.
//! - Report every mutation as a [`GridChange`] the shell can print.
//!
//! # Invariants
//! - `add` always appends; duplicates by code are allowed.
//! - `remove_by_code` removes at most one entry, the first match, and keeps
//!   the relative order of the rest.
//! - A missing code is a normal outcome, never an error.

use crate::model::course::SubjectDetail;
use log::debug;
use std::fmt::{Display, Formatter};

/// Result of a grid mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum GridChange {
    Added(SubjectDetail),
    Removed(SubjectDetail),
    /// No entry carried the requested code; the grid is unchanged.
    NotFound(String),
}

impl Display for GridChange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added(entry) => write!(f, "Disciplina {} adicionada à grade.", entry.name()),
            Self::Removed(entry) => write!(f, "Disciplina {} removida da grade.", entry.name()),
            Self::NotFound(code) => {
                write!(f, "Disciplina com código {code} não encontrada na grade.")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurriculumGrid {
    entries: Vec<SubjectDetail>,
}

impl CurriculumGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry` unconditionally.
    pub fn add(&mut self, entry: SubjectDetail) -> GridChange {
        debug!(
            "event=grid_add module=session status=ok code={} size_after={}",
            entry.code(),
            self.entries.len() + 1
        );
        self.entries.push(entry.clone());
        GridChange::Added(entry)
    }

    /// Removes the first entry whose code equals `code` exactly.
    pub fn remove_by_code(&mut self, code: &str) -> GridChange {
        match self.entries.iter().position(|entry| entry.code() == code) {
            Some(index) => {
                let removed = self.entries.remove(index);
                debug!(
                    "event=grid_remove module=session status=ok code={} size_after={}",
                    code,
                    self.entries.len()
                );
                GridChange::Removed(removed)
            }
            None => {
                debug!("event=grid_remove module=session status=not_found code={code}");
                GridChange::NotFound(code.to_string())
            }
        }
    }

    pub fn entries(&self) -> &[SubjectDetail] {
        &self.entries
    }

    /// Entry codes in grid order.
    pub fn codes(&self) -> Vec<&str> {
        self.entries.iter().map(SubjectDetail::code).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Display for CurriculumGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grade Curricular:")?;
        for entry in &self.entries {
            writeln!(
                f,
                "Disciplina: {}, Código: {}, Créditos: {}, Professor: {}",
                entry.subject.name, entry.subject.code, entry.subject.credits, entry.professor.name
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CurriculumGrid, GridChange};
    use crate::model::course::{Subject, SubjectDetail};
    use crate::model::person::{Person, PersonKind, StaffInfo};

    fn entry(id: i64, code: &str, name: &str) -> SubjectDetail {
        SubjectDetail {
            subject: Subject {
                id,
                course_id: 1,
                professor_id: 5,
                name: name.to_string(),
                code: code.to_string(),
                credits: 4,
            },
            professor: Person {
                id: 5,
                name: "Ana".to_string(),
                national_id: "98765432100".to_string(),
                email: "ana@exemplo.com".to_string(),
                kind: PersonKind::Professor(StaffInfo {
                    hire_date: 0,
                    job_title: "Professor".to_string(),
                    salary: 6000.0,
                }),
            },
        }
    }

    #[test]
    fn add_appends_and_keeps_prior_order() {
        let mut grid = CurriculumGrid::new();
        grid.add(entry(1, "POO101", "Programação Orientada a Objetos"));
        let change = grid.add(entry(2, "ED102", "Estruturas de Dados"));

        assert_eq!(grid.codes(), vec!["POO101", "ED102"]);
        assert_eq!(
            change.to_string(),
            "Disciplina Estruturas de Dados adicionada à grade."
        );
    }

    #[test]
    fn add_does_not_deduplicate_codes() {
        let mut grid = CurriculumGrid::new();
        grid.add(entry(1, "POO101", "POO"));
        grid.add(entry(1, "POO101", "POO"));
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn remove_takes_first_match_only() {
        let mut grid = CurriculumGrid::new();
        grid.add(entry(1, "POO101", "first"));
        grid.add(entry(2, "ED102", "middle"));
        grid.add(entry(1, "POO101", "second"));

        let change = grid.remove_by_code("POO101");

        assert!(matches!(change, GridChange::Removed(ref removed) if removed.name() == "first"));
        assert_eq!(grid.codes(), vec!["ED102", "POO101"]);
        assert_eq!(grid.entries()[1].name(), "second");
    }

    #[test]
    fn remove_missing_code_leaves_grid_unchanged() {
        let mut grid = CurriculumGrid::new();
        grid.add(entry(1, "POO101", "POO"));
        grid.add(entry(2, "ED102", "ED"));
        assert!(matches!(grid.remove_by_code("ED102"), GridChange::Removed(_)));
        let before = grid.clone();

        let change = grid.remove_by_code("ED102");

        assert_eq!(change, GridChange::NotFound("ED102".to_string()));
        assert_eq!(
            change.to_string(),
            "Disciplina com código ED102 não encontrada na grade."
        );
        assert_eq!(grid, before);
        assert_eq!(grid.codes(), vec!["POO101"]);
    }

    #[test]
    fn code_match_is_exact() {
        let mut grid = CurriculumGrid::new();
        grid.add(entry(1, "POO101", "POO"));
        assert!(matches!(grid.remove_by_code("poo101"), GridChange::NotFound(_)));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn display_lists_entries_in_order_with_professor() {
        let mut grid = CurriculumGrid::new();
        assert_eq!(grid.to_string(), "Grade Curricular:\n");

        grid.add(entry(2, "ED102", "Estruturas de Dados"));
        grid.add(entry(1, "POO101", "Programação Orientada a Objetos"));

        let rendered = grid.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Grade Curricular:",
                "Disciplina: Estruturas de Dados, Código: ED102, Créditos: 4, Professor: Ana",
                "Disciplina: Programação Orientada a Objetos, Código: POO101, Créditos: 4, Professor: Ana",
            ]
        );
    }
}
