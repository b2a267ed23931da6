//! Main menu options and their numbering.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    SelectCourse,
    AddSubject,
    RemoveSubject,
    ShowGrid,
    Exit,
}

impl MenuOption {
    /// Display order of the menu.
    pub const ALL: [MenuOption; 5] = [
        Self::SelectCourse,
        Self::AddSubject,
        Self::RemoveSubject,
        Self::ShowGrid,
        Self::Exit,
    ];

    pub fn number(self) -> i64 {
        match self {
            Self::SelectCourse => 1,
            Self::AddSubject => 2,
            Self::RemoveSubject => 3,
            Self::ShowGrid => 4,
            Self::Exit => 0,
        }
    }

    pub fn from_number(number: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.number() == number)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SelectCourse => "Selecionar Curso",
            Self::AddSubject => "Adicionar Disciplina à Grade",
            Self::RemoveSubject => "Remover Disciplina da Grade",
            Self::ShowGrid => "Exibir Grade Curricular",
            Self::Exit => "Sair",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MenuOption;

    #[test]
    fn numbers_round_trip_and_unknown_numbers_are_rejected() {
        for option in MenuOption::ALL {
            assert_eq!(MenuOption::from_number(option.number()), Some(option));
        }
        assert_eq!(MenuOption::from_number(5), None);
        assert_eq!(MenuOption::from_number(-1), None);
    }
}
