use academico_core::{NewPerson, Person, PersonKind, PersonType, StaffInfo, StudentInfo};

#[test]
fn person_kind_serializes_with_type_tag() {
    let person = Person::from_new(
        3,
        NewPerson::coordinator(
            "Maria",
            "22345678900",
            "maria@exemplo.com",
            StaffInfo {
                hire_date: 1_700_000_000_000,
                job_title: "Coordenador".to_string(),
                salary: 8500.0,
            },
        ),
    );

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["kind"]["type"], "coordinator");
    assert_eq!(json["kind"]["job_title"], "Coordenador");
    assert_eq!(json["kind"]["salary"], 8500.0);

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}

#[test]
fn role_accessors_match_variant() {
    let student = PersonKind::Student(StudentInfo {
        course_id: 1,
        enrollment_date: 0,
        registration_number: "RA1".to_string(),
    });
    assert_eq!(student.person_type(), PersonType::Student);
    assert!(student.staff().is_none());
    assert_eq!(student.student().unwrap().course_id, 1);

    let professor = PersonKind::Professor(StaffInfo {
        hire_date: 0,
        job_title: "Professor".to_string(),
        salary: 6000.0,
    });
    assert_eq!(professor.person_type(), PersonType::Professor);
    assert!(professor.student().is_none());
}

#[test]
fn person_type_db_values_round_trip() {
    for kind in [
        PersonType::Professor,
        PersonType::Coordinator,
        PersonType::Student,
    ] {
        assert_eq!(PersonType::parse_db(kind.as_db()), Some(kind));
    }
    assert_eq!(PersonType::parse_db("staff"), None);
}
