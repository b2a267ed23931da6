//! Interactive menu loop.
//!
//! # Responsibility
//! - Print the menu, read choices and dispatch to catalog/grid actions.
//! - Own the [`Session`] for the lifetime of the loop.
//!
//! # Invariants
//! - Every action that touches storage opens its own connection and drops it
//!   before returning to the menu.
//! - "Not found" outcomes are printed and the loop continues.
//! - Unparseable numbers end the loop with [`ShellError::InvalidNumber`].
//! - End of input ends the loop normally.

use crate::error::ShellError;
use crate::menu::MenuOption;
use academico_core::db::open_db;
use academico_core::{CatalogService, CatalogServiceError, CourseDetail, Session};
use log::{info, warn};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub struct Shell<R, W> {
    input: R,
    output: W,
    db_path: PathBuf,
    session: Session,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, db_path: impl Into<PathBuf>) -> Self {
        Self {
            input,
            output,
            db_path: db_path.into(),
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), ShellError> {
        info!(
            "event=shell_start module=cli status=ok db_path={}",
            self.db_path.display()
        );
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_number()? else {
                info!("event=shell_exit module=cli status=ok reason=eof");
                return Ok(());
            };

            match MenuOption::from_number(choice) {
                Some(MenuOption::SelectCourse) => self.select_course()?,
                Some(MenuOption::AddSubject) => self.add_subject()?,
                Some(MenuOption::RemoveSubject) => self.remove_subject()?,
                Some(MenuOption::ShowGrid) => self.show_grid()?,
                Some(MenuOption::Exit) => {
                    writeln!(self.output, "Saindo...")?;
                    info!(
                        "event=shell_exit module=cli status=ok reason=menu grid_size={}",
                        self.session.grid().len()
                    );
                    return Ok(());
                }
                None => {
                    warn!("event=menu_choice module=cli status=invalid choice={choice}");
                    writeln!(self.output, "Opção inválida. Tente novamente.")?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "\nSistema de Gestão Acadêmica")?;
        for option in MenuOption::ALL {
            writeln!(self.output, "{}. {}", option.number(), option.label())?;
        }
        self.prompt("Escolha uma opção: ")
    }

    fn select_course(&mut self) -> Result<(), ShellError> {
        let conn = open_db(&self.db_path)?;
        let catalog = CatalogService::from_connection(&conn);
        let courses = catalog.list_courses()?;

        writeln!(self.output, "\nCursos Disponíveis:")?;
        for (index, summary) in courses.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, summary.course.name)?;
        }
        self.prompt("Escolha um curso: ")?;
        let Some(choice) = self.read_number()? else {
            return Ok(());
        };

        let picked = usize::try_from(choice)
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| courses.get(index));
        let Some(summary) = picked else {
            writeln!(self.output, "Curso inválido.")?;
            return Ok(());
        };

        let detail = catalog.course_detail(summary.course.id)?;
        write_course_detail(&mut self.output, &detail)?;
        self.session.select_course(detail);
        Ok(())
    }

    fn add_subject(&mut self) -> Result<(), ShellError> {
        let Some(course_id) = self.session.selected_course().map(|c| c.course.id) else {
            writeln!(self.output, "Nenhum curso selecionado.")?;
            return Ok(());
        };

        let conn = open_db(&self.db_path)?;
        let catalog = CatalogService::from_connection(&conn);
        let detail = match catalog.course_detail(course_id) {
            Ok(detail) => detail,
            Err(CatalogServiceError::CourseNotFound(_)) => {
                writeln!(self.output, "Curso não encontrado.")?;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        writeln!(self.output, "\nDisciplinas Disponíveis:")?;
        for entry in &detail.subjects {
            writeln!(self.output, "- {} (Código: {})", entry.name(), entry.code())?;
        }
        self.prompt("Digite o código da disciplina que deseja adicionar: ")?;
        let Some(code) = self.read_line()? else {
            return Ok(());
        };

        match detail.find_subject(&code) {
            Some(entry) => {
                let change = self.session.grid_mut().add(entry.clone());
                writeln!(self.output, "{change}")?;
            }
            None => writeln!(self.output, "Disciplina não encontrada.")?,
        }
        Ok(())
    }

    fn remove_subject(&mut self) -> Result<(), ShellError> {
        self.prompt("Digite o código da disciplina que deseja remover: ")?;
        let Some(code) = self.read_line()? else {
            return Ok(());
        };
        let change = self.session.grid_mut().remove_by_code(&code);
        writeln!(self.output, "{change}")?;
        Ok(())
    }

    fn show_grid(&mut self) -> Result<(), ShellError> {
        write!(self.output, "{}", self.session.grid())?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), ShellError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one trimmed line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn read_number(&mut self) -> Result<Option<i64>, ShellError> {
        match self.read_line()? {
            Some(text) => text
                .parse::<i64>()
                .map(Some)
                .map_err(|_| ShellError::InvalidNumber(text)),
            None => Ok(None),
        }
    }
}

fn write_course_detail(output: &mut impl Write, detail: &CourseDetail) -> std::io::Result<()> {
    writeln!(output, "\nCurso Selecionado: {}", detail.course.name)?;
    writeln!(output, "Coordenador: {}", detail.coordinator.name)?;
    writeln!(output, "Duração: {} semestres", detail.course.duration_terms)?;
    writeln!(output, "Disciplinas:")?;
    for entry in &detail.subjects {
        writeln!(
            output,
            "- {} (Código: {}, Créditos: {}, Professor: {})",
            entry.subject.name, entry.subject.code, entry.subject.credits, entry.professor.name
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Shell;
    use crate::error::ShellError;
    use academico_core::db::recreate_db;
    use academico_core::seed_sample_catalog;
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn seeded_db() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("academico.db");
        let mut conn = recreate_db(&path).unwrap();
        seed_sample_catalog(&mut conn).unwrap();
        (dir, path)
    }

    fn run_script(path: &PathBuf, script: &str) -> (Result<(), ShellError>, Vec<String>, String) {
        let mut shell = Shell::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), path);
        let result = shell.run();
        let codes = shell
            .session()
            .grid()
            .codes()
            .into_iter()
            .map(str::to_string)
            .collect();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (result, codes, output)
    }

    #[test]
    fn select_add_remove_and_show_grid() {
        let (_dir, path) = seeded_db();
        let script = "1\n1\n2\nPOO101\n2\nED102\n3\nED102\n3\nED102\n4\n0\n";

        let (result, codes, output) = run_script(&path, script);

        result.unwrap();
        assert_eq!(codes, vec!["POO101".to_string()]);
        assert!(output.contains("Curso Selecionado: Engenharia de Software"));
        assert!(output.contains("Coordenador: Alan"));
        assert!(output.contains("Duração: 8 semestres"));
        assert!(output.contains("Disciplina Programação Orientada a Objetos adicionada à grade."));
        assert!(output.contains("Disciplina Estruturas de Dados removida da grade."));
        assert!(output.contains("Disciplina com código ED102 não encontrada na grade."));
        assert!(output.contains(
            "Disciplina: Programação Orientada a Objetos, Código: POO101, Créditos: 4, Professor: Ana"
        ));
        assert!(output.ends_with("Saindo...\n"));
    }

    #[test]
    fn add_without_selected_course_reports_and_continues() {
        let (_dir, path) = seeded_db();
        let (result, codes, output) = run_script(&path, "2\n0\n");

        result.unwrap();
        assert!(codes.is_empty());
        assert!(output.contains("Nenhum curso selecionado."));
        assert!(output.contains("Saindo..."));
    }

    #[test]
    fn unknown_subject_code_is_not_added() {
        let (_dir, path) = seeded_db();
        let (result, codes, output) = run_script(&path, "1\n2\n2\nPOO101\n0\n");

        result.unwrap();
        assert!(codes.is_empty());
        assert!(output.contains("Curso Selecionado: Psicologia"));
        assert!(output.contains("Disciplina não encontrada."));
    }

    #[test]
    fn out_of_range_course_choice_is_recovered() {
        let (_dir, path) = seeded_db();
        let mut shell = Shell::new(Cursor::new(b"1\n7\n1\n0\n0\n".to_vec()), Vec::new(), &path);

        shell.run().unwrap();

        assert!(shell.session().selected_course().is_none());
        let output = String::from_utf8(shell.into_output()).unwrap();
        assert_eq!(output.matches("Curso inválido.").count(), 2);
    }

    #[test]
    fn invalid_menu_number_redisplays_menu() {
        let (_dir, path) = seeded_db();
        let (result, _, output) = run_script(&path, "9\n0\n");

        result.unwrap();
        assert!(output.contains("Opção inválida. Tente novamente."));
        assert_eq!(output.matches("Sistema de Gestão Acadêmica").count(), 2);
    }

    #[test]
    fn end_of_input_exits_normally() {
        let (_dir, path) = seeded_db();
        let (result, _, output) = run_script(&path, "4\n");

        result.unwrap();
        assert!(output.contains("Grade Curricular:"));
        assert!(!output.contains("Saindo..."));
    }

    #[test]
    fn non_numeric_choice_ends_with_error() {
        let (_dir, path) = seeded_db();
        let (result, _, _) = run_script(&path, "abc\n");

        match result {
            Err(ShellError::InvalidNumber(text)) => assert_eq!(text, "abc"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
