use academico_core::db::open_db_in_memory;
use academico_core::{seed_sample_catalog, CatalogCounts, CatalogService, PersonType, SeedSummary};

#[test]
fn seeding_produces_expected_counts() {
    let mut conn = open_db_in_memory().unwrap();

    let summary = seed_sample_catalog(&mut conn).unwrap();
    assert_eq!(
        summary,
        SeedSummary {
            coordinators: 4,
            professors: 8,
            courses: 4,
            subjects: 16,
        }
    );

    let catalog = CatalogService::from_connection(&conn);
    assert_eq!(
        catalog.catalog_counts().unwrap(),
        CatalogCounts {
            coordinators: 4,
            professors: 8,
            students: 0,
            courses: 4,
            subjects: 16,
        }
    );
}

#[test]
fn courses_are_listed_in_insertion_order_with_coordinators() {
    let mut conn = open_db_in_memory().unwrap();
    seed_sample_catalog(&mut conn).unwrap();
    let catalog = CatalogService::from_connection(&conn);

    let listed: Vec<(String, String, u32)> = catalog
        .list_courses()
        .unwrap()
        .into_iter()
        .map(|summary| {
            (
                summary.course.name,
                summary.coordinator.name,
                summary.course.duration_terms,
            )
        })
        .collect();

    assert_eq!(
        listed,
        vec![
            ("Engenharia de Software".to_string(), "Alan".to_string(), 8),
            ("Psicologia".to_string(), "Maria".to_string(), 10),
            ("Direito".to_string(), "João".to_string(), 10),
            ("Enfermagem".to_string(), "Carla".to_string(), 8),
        ]
    );
}

#[test]
fn engineering_course_lists_its_four_subjects_with_professors() {
    let mut conn = open_db_in_memory().unwrap();
    seed_sample_catalog(&mut conn).unwrap();
    let catalog = CatalogService::from_connection(&conn);
    let engineering = catalog
        .list_courses()
        .unwrap()
        .into_iter()
        .find(|summary| summary.course.name == "Engenharia de Software")
        .unwrap();

    let detail = catalog.course_detail(engineering.course.id).unwrap();
    let subjects: Vec<(&str, &str, u32)> = detail
        .subjects
        .iter()
        .map(|entry| {
            (
                entry.subject.code.as_str(),
                entry.professor.name.as_str(),
                entry.subject.credits,
            )
        })
        .collect();

    assert_eq!(
        subjects,
        vec![
            ("POO101", "Ana", 4),
            ("ED102", "Ana", 4),
            ("FS103", "William", 4),
            ("CC104", "William", 4),
        ]
    );
    assert_eq!(detail.coordinator.person_type(), PersonType::Coordinator);
    assert!(detail
        .subjects
        .iter()
        .all(|entry| entry.professor.person_type() == PersonType::Professor));
}

#[test]
fn every_seeded_course_has_four_subjects() {
    let mut conn = open_db_in_memory().unwrap();
    seed_sample_catalog(&mut conn).unwrap();
    let catalog = CatalogService::from_connection(&conn);

    for summary in catalog.list_courses().unwrap() {
        let detail = catalog.course_detail(summary.course.id).unwrap();
        assert_eq!(detail.subjects.len(), 4, "{}", summary.course.name);
    }
}
