use std::collections::BTreeMap;

use quest_lib::{FileStore, StoreError};
use quest_spec::{InputType, LocalizedText, Questionnaire, Registry};

fn respondent_questionnaire() -> Questionnaire {
    let mut q = Questionnaire::default();
    q.survey.ty = "pension".into();
    q.survey.wave_id = "2026-q3".into();
    q.user_id = "2020".into();
    q.lang_codes = BTreeMap::from([("en".to_string(), "English".to_string())]);
    q.lang_codes_order = vec!["en".into()];
    q.lang_code = "en".into();

    let page = q.add_page();
    page.short = LocalizedText::from([("en", "Basics")]);
    let group = page.add_group();
    let input = group.add_input();
    input.kind = InputType::Text;
    input.name = "first_name".into();
    input.label = LocalizedText::from([("en", "First name")]);
    q
}

#[test]
fn paths_are_keyed_by_identity() {
    let store = FileStore::new("/var/lib/quest");
    assert_eq!(
        store.template_path("pension"),
        std::path::PathBuf::from("/var/lib/quest/pension.json")
    );
    assert_eq!(
        store.response_path("pension", "2026-q3", "2020"),
        std::path::PathBuf::from("/var/lib/quest/pension/2026-q3/2020.json")
    );
}

#[test]
fn response_round_trip_preserves_answers() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let mut q = respondent_questionnaire();
    q.finalize(&Registry::with_builtins()).unwrap();
    q.set_response("first_name", "Ada");

    let path = store.save_response(&q).unwrap();
    assert!(path.ends_with("pension/2026-q3/2020.json"));

    let restored = store.load_response("pension", "2026-q3", "2020").unwrap();
    assert_eq!(restored, q);
    assert_eq!(restored.response_by_name("first_name"), Some("Ada"));
}

#[test]
fn template_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let q = respondent_questionnaire();
    store.save_template(&q).unwrap();
    let restored = store.load_template("pension").unwrap();
    assert_eq!(restored, q);
}

#[test]
fn missing_identity_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let mut q = respondent_questionnaire();
    q.user_id = String::new();
    assert!(matches!(
        store.save_response(&q),
        Err(StoreError::MissingIdentity("user-id"))
    ));
}

#[test]
fn deleting_an_absent_response_is_fine() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.delete_response("pension", "2026-q3", "9999").unwrap();

    let mut q = respondent_questionnaire();
    q.finalize(&Registry::with_builtins()).unwrap();
    store.save_response(&q).unwrap();
    store.delete_response("pension", "2026-q3", "2020").unwrap();
    assert!(store.load_response("pension", "2026-q3", "2020").is_err());
}
