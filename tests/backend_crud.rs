//! Integration tests for the JSON catalog store: CRUD, role checks and
//! persistence across reopen.

use std::path::PathBuf;

use eventcatalog::backend::loader::{load_catalog, LoaderMessage};
use eventcatalog::backend::{AuthContext, CatalogBackend, CatalogDocument, JsonFileBackend, Role};
use eventcatalog::core::category::NavigationCategory;
use eventcatalog::core::event_record::{CategoryRef, CulturalEvent, MediaFile, MediaKind, Schedule};
use eventcatalog::util::error::CatalogError;

/// A unique catalog path under the system temp dir.
fn temp_catalog(tag: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "eventcatalog_test_{tag}_{}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

fn admin() -> AuthContext {
    AuthContext::new(Some("secret".into()), Role::Admin)
}

fn category(name: &str) -> NavigationCategory {
    NavigationCategory {
        name: name.into(),
        show_in_navbar: true,
        ..Default::default()
    }
}

fn valid_event(category_id: u64, name: &str) -> CulturalEvent {
    CulturalEvent {
        name_left: Some(name.into()),
        title_left: Some(format!("{name} title")),
        description_table_left: Some(format!("{name} summary")),
        navigation_category: Some(CategoryRef {
            id: Some(category_id),
            name: None,
        }),
        schedules: vec![Schedule {
            year: Some(2024),
            month: Some(6),
            day_of_month: Some(1),
            start_time: Some(" 19:30 ".into()),
            ..Default::default()
        }],
        publish: true,
        ..Default::default()
    }
}

/// A backend with one "Music" category (id 1).
fn seeded(tag: &str) -> (JsonFileBackend, PathBuf) {
    let path = temp_catalog(tag);
    let mut backend = JsonFileBackend::open(&path).unwrap();
    let music = backend.create_category(&admin(), category("Music")).unwrap();
    assert_eq!(music.id, Some(1));
    (backend, path)
}

#[test]
fn missing_file_opens_empty() {
    let path = temp_catalog("missing");
    let backend = JsonFileBackend::open(&path).unwrap();
    assert!(backend.list_events().unwrap().is_empty());
    assert!(backend.list_categories().unwrap().is_empty());
    assert!(!path.exists(), "opening must not create the file");
}

#[test]
fn create_assigns_ids_and_persists() {
    let (mut backend, path) = seeded("create");
    let first = backend.create_event(&admin(), valid_event(1, "Duduk")).unwrap();
    let second = backend.create_event(&admin(), valid_event(1, "Oud")).unwrap();
    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));
    assert_eq!(first.category_name(), "Music");
    assert_eq!(first.schedules[0].start_time.as_deref(), Some("19:30"));

    let reopened = JsonFileBackend::open(&path).unwrap();
    let events = reopened.list_events().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(reopened.get_event(2).unwrap().display_name(), "Oud");

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    assert!(!PathBuf::from(tmp).exists(), "temporary file must be renamed away");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn invalid_event_reports_every_field() {
    let (mut backend, path) = seeded("invalid");
    let err = backend
        .create_event(&admin(), CulturalEvent::default())
        .unwrap_err();
    match err {
        CatalogError::Validation(issues) => {
            let fields: Vec<&str> = issues.iter().map(|i| i.field).collect();
            assert_eq!(
                fields,
                [
                    "navigationCategory",
                    "nameOrOrganizer_left",
                    "title_left",
                    "description_table_left",
                    "schedules"
                ]
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(backend.list_events().unwrap().is_empty());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn unknown_category_is_not_found() {
    let (mut backend, path) = seeded("unknown_cat");
    let err = backend.create_event(&admin(), valid_event(42, "Lost")).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { entity: "category", id: 42 }));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn media_decides_event_kind() {
    let (mut backend, path) = seeded("media_kind");
    let mut event = valid_event(1, "Exhibition");
    event.media_files = vec![MediaFile {
        url: "https://example.org/catalogue.pdf".into(),
        name: "catalogue.pdf".into(),
        kind: MediaKind::Pdf,
        ..Default::default()
    }];
    let saved = backend.create_event(&admin(), event).unwrap();
    assert_eq!(saved.kind, MediaKind::Pdf);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn update_and_delete_round_trip() {
    let (mut backend, path) = seeded("update");
    let mut event = backend.create_event(&admin(), valid_event(1, "Draft")).unwrap();
    event.name_left = Some("Final".into());
    backend.update_event(&admin(), event.clone()).unwrap();
    assert_eq!(backend.get_event(1).unwrap().display_name(), "Final");

    backend.delete_event(&admin(), 1).unwrap();
    assert!(matches!(
        backend.get_event(1),
        Err(CatalogError::NotFound { entity: "event", id: 1 })
    ));
    assert!(matches!(
        backend.delete_event(&admin(), 1),
        Err(CatalogError::NotFound { .. })
    ));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn roles_gate_mutations() {
    let (mut backend, path) = seeded("roles");
    let art = AuthContext::new(Some("t".into()), Role::Art);
    let viewer = AuthContext::new(Some("t".into()), Role::Viewer);
    let anonymous = AuthContext::new(Some("   ".into()), Role::Admin);

    let created = backend.create_event(&art, valid_event(1, "Mural")).unwrap();
    assert!(matches!(
        backend.update_event(&art, created.clone()),
        Err(CatalogError::Unauthorized(_))
    ));
    assert!(matches!(
        backend.create_event(&viewer, valid_event(1, "Nope")),
        Err(CatalogError::Unauthorized(_))
    ));
    assert!(matches!(
        backend.create_event(&anonymous, valid_event(1, "Nope")),
        Err(CatalogError::Unauthorized(_))
    ));
    assert!(matches!(
        backend.create_category(&art, category("Dance")),
        Err(CatalogError::Unauthorized(_))
    ));
    assert_eq!(backend.list_events().unwrap().len(), 1);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn category_rename_reaches_events_and_delete_is_refused_while_used() {
    let (mut backend, path) = seeded("categories");
    backend.create_event(&admin(), valid_event(1, "Concert")).unwrap();

    let mut music = backend.list_categories().unwrap().remove(0);
    music.name = "  Live music ".into();
    backend.update_category(&admin(), music).unwrap();
    assert_eq!(backend.get_event(1).unwrap().category_name(), "Live music");

    assert!(matches!(
        backend.delete_category(&admin(), 1),
        Err(CatalogError::Backend(_))
    ));
    backend.delete_event(&admin(), 1).unwrap();
    backend.delete_category(&admin(), 1).unwrap();
    assert!(backend.list_categories().unwrap().is_empty());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn home_and_category_listings() {
    let (mut backend, path) = seeded("listings");
    let dance = backend.create_category(&admin(), category("Dance")).unwrap();
    let dance_id = dance.id.unwrap();

    let mut home = valid_event(1, "Home");
    home.show_in_home = true;
    backend.create_event(&admin(), home.clone()).unwrap();
    let mut hidden = home.clone();
    hidden.publish = false;
    hidden.name_left = Some("Hidden".into());
    backend.create_event(&admin(), hidden).unwrap();
    backend.create_event(&admin(), valid_event(dance_id, "Tango")).unwrap();

    let home_names: Vec<String> = backend
        .list_home_events()
        .unwrap()
        .iter()
        .map(|e| e.display_name().to_owned())
        .collect();
    assert_eq!(home_names, ["Home"]);
    assert_eq!(backend.list_events_by_category(dance_id).unwrap().len(), 1);
    assert_eq!(backend.list_events_by_category(1).unwrap().len(), 2);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn loader_reports_malformed_catalog() {
    let path = temp_catalog("malformed");
    std::fs::write(&path, "{ not json").unwrap();
    match load_catalog(path.clone()) {
        LoaderMessage::Error(msg) => assert!(msg.contains("JSON"), "unexpected message: {msg}"),
        LoaderMessage::Loaded { .. } => panic!("malformed catalog must not load"),
    }
    let _ = std::fs::remove_file(&path);
}

#[test]
fn loader_hands_over_backend() {
    let (mut backend, path) = seeded("loader");
    backend.create_event(&admin(), valid_event(1, "Recital")).unwrap();
    match load_catalog(path.clone()) {
        LoaderMessage::Loaded { backend, events, categories, .. } => {
            assert_eq!(events.len(), 1);
            assert_eq!(categories.len(), 1);
            assert_eq!(backend.list_events().unwrap().len(), 1);
        }
        LoaderMessage::Error(e) => panic!("load failed: {e}"),
    }
    let _ = std::fs::remove_file(&path);
}

#[test]
fn duplicate_category_name_is_rejected() {
    let (mut backend, path) = seeded("dup_category");
    let err = backend
        .create_category(&admin(), category(" MUSIC "))
        .unwrap_err();
    match err {
        CatalogError::Validation(issues) => assert_eq!(issues[0].field, "name"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(backend.list_categories().unwrap().len(), 1);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn in_memory_document_is_written_on_first_save() {
    let path = temp_catalog("with_document");
    let doc = CatalogDocument {
        events: Vec::new(),
        categories: vec![NavigationCategory {
            id: Some(5),
            name: "Film".into(),
            ..Default::default()
        }],
    };
    let mut backend = JsonFileBackend::with_document(&path, doc);
    assert_eq!(backend.path(), path.as_path());
    assert!(!path.exists());

    let created = backend.create_event(&admin(), valid_event(5, "Screening")).unwrap();
    assert_eq!(created.id, Some(1));
    assert_eq!(backend.document().events.len(), 1);
    assert_eq!(JsonFileBackend::open(&path).unwrap().document(), backend.document());
    let _ = std::fs::remove_file(&path);
}
