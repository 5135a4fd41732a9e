use folio_core::{
    distinct_categories, distinct_technologies, CatalogError, CatalogStore, ProjectRecord,
    ProjectValidationError,
};
use serde_json::json;

fn record(id: &str, title: &str, category: &str, technologies: &[&str]) -> ProjectRecord {
    ProjectRecord::new(
        id,
        title,
        format!("{title} description"),
        category,
        technologies.iter().map(|value| value.to_string()).collect(),
    )
    .unwrap()
}

#[test]
fn get_all_preserves_insertion_order() {
    let catalog = CatalogStore::from_records(vec![
        record("b-site", "B", "Web Development", &["React"]),
        record("a-site", "A", "Cybersecurity", &["Python"]),
        record("c-site", "C", "Web Development", &["Node"]),
    ])
    .unwrap();

    let ids: Vec<&str> = catalog.get_all().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["b-site", "a-site", "c-site"]);
}

#[test]
fn from_records_rejects_duplicate_ids() {
    let err = CatalogStore::from_records(vec![
        record("shop-app", "Shop App", "Web Development", &["React"]),
        record("shop-app", "Shop App 2", "Web Development", &["Vue"]),
    ])
    .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(id) if id == "shop-app"));
}

#[test]
fn from_records_reports_invalid_record_index() {
    let mut broken = record("broken", "Broken", "Web Development", &["React"]);
    broken.title = " ".to_string();

    let err = CatalogStore::from_records(vec![
        record("fine", "Fine", "Web Development", &["React"]),
        broken,
    ])
    .unwrap_err();
    match err {
        CatalogError::InvalidRecord { index, source } => {
            assert_eq!(index, 1);
            assert_eq!(source, ProjectValidationError::EmptyField("title"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn from_json_reads_camel_case_and_defaults() {
    let data = json!([
        {
            "id": "shop-app",
            "title": "Shop App",
            "description": "Storefront",
            "longDescription": "A longer story",
            "category": "Web Development",
            "technologies": ["React", "Node"],
            "featured": true,
            "link": "https://shop.example.com",
            "external": true
        },
        {
            "id": "pentest-tool",
            "title": "Pentest Tool",
            "description": "Recon scripts",
            "category": "Cybersecurity",
            "technologies": ["Python"]
        }
    ]);

    let catalog = CatalogStore::from_json_str(&data.to_string()).unwrap();
    assert_eq!(catalog.len(), 2);

    let shop = catalog.get("shop-app").unwrap();
    assert_eq!(shop.long_description, "A longer story");
    assert!(shop.external);

    let pentest = catalog.get("pentest-tool").unwrap();
    assert_eq!(pentest.link, "/projects/pentest-tool");
    assert!(!pentest.featured);
    assert!(pentest.long_description.is_empty());

    assert!(catalog.get("missing").is_none());
}

#[test]
fn from_json_reports_invalid_record_index() {
    let data = json!([
        {
            "id": "fine",
            "title": "Fine",
            "description": "Valid record",
            "category": "Web Development",
            "technologies": ["React"]
        },
        {
            "id": "empty-tech",
            "title": "Empty",
            "description": "No technologies",
            "category": "Web Development",
            "technologies": []
        }
    ]);

    let err = CatalogStore::from_json_str(&data.to_string()).unwrap_err();
    match err {
        CatalogError::InvalidRecord { index, source } => {
            assert_eq!(index, 1);
            assert_eq!(source, ProjectValidationError::MissingTechnologies);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn from_json_keeps_typed_error_for_blank_title() {
    let data = json!([
        {
            "id": "blank-title",
            "title": "   ",
            "description": "Title is blank",
            "category": "Web Development",
            "technologies": ["React"]
        }
    ]);

    let err = CatalogStore::from_json_str(&data.to_string()).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::InvalidRecord {
            index: 0,
            source: ProjectValidationError::EmptyField("title"),
        }
    ));
}

#[test]
fn from_json_rejects_relative_external_link() {
    let data = json!([
        {
            "id": "bad-link",
            "title": "Bad Link",
            "description": "External flag with a site path",
            "category": "Web Development",
            "technologies": ["React"],
            "link": "/projects/bad-link",
            "external": true
        }
    ]);

    let err = CatalogStore::from_json_str(&data.to_string()).unwrap_err();
    assert!(
        matches!(
            &err,
            CatalogError::InvalidRecord {
                index: 0,
                source: ProjectValidationError::InvalidLink { external: true, .. },
            }
        ),
        "unexpected error: {err}"
    );
    assert!(err.to_string().contains("http(s) URL"));
}

#[test]
fn serialization_round_trips_through_validation() {
    let original = record("shop-app", "Shop App", "Web Development", &["React"])
        .with_featured(true)
        .with_long_description("details");
    let value = serde_json::to_value(&original).unwrap();
    assert_eq!(value["longDescription"], "details");
    assert_eq!(value["featured"], true);

    let decoded: ProjectRecord = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn from_json_rejects_duplicate_ids() {
    let entry = json!({
        "id": "twice",
        "title": "Twice",
        "description": "Appears twice",
        "category": "Web Development",
        "technologies": ["React"]
    });
    let data = json!([entry.clone(), entry]);

    let err = CatalogStore::from_json_str(&data.to_string()).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(id) if id == "twice"));
}

#[test]
fn direct_record_decoding_still_validates() {
    let value = json!({
        "id": "Bad Id",
        "title": "Bad",
        "description": "Invalid slug",
        "category": "Web Development",
        "technologies": ["React"]
    });
    let err = serde_json::from_value::<ProjectRecord>(value).unwrap_err();
    assert!(err.to_string().contains("project id is invalid"), "unexpected error: {err}");
}

#[test]
fn featured_subset_keeps_catalog_order() {
    let catalog = CatalogStore::from_records(vec![
        record("one", "One", "Web Development", &["React"]).with_featured(true),
        record("two", "Two", "Web Development", &["React"]),
        record("three", "Three", "Cybersecurity", &["Python"]).with_featured(true),
    ])
    .unwrap();

    let featured: Vec<&str> = catalog.featured().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(featured, vec!["one", "three"]);
}

#[test]
fn builtin_catalog_is_valid_and_has_facets() {
    let catalog = CatalogStore::try_builtin().unwrap();
    let categories = distinct_categories(catalog.get_all());
    assert_eq!(
        categories,
        vec![
            "Web Development".to_string(),
            "Cybersecurity".to_string(),
            "Digital Marketing".to_string(),
        ]
    );
    let technologies = distinct_technologies(catalog.get_all());
    assert!(technologies.contains(&"Python".to_string()));
    assert_eq!(technologies[0], "React");
}
