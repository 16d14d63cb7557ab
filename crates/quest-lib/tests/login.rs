use std::collections::BTreeMap;

use quest_lib::{HashAuthenticator, Login, MemorySession, SessionStoreExt};

fn params() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("u".to_string(), "2020".to_string()),
        ("sid".to_string(), "pension".to_string()),
        ("wid".to_string(), "2026-q3".to_string()),
    ])
}

#[test]
fn verify_accepts_its_own_signature() {
    let auth = HashAuthenticator::new("s3cret");
    let params = params();
    let hash = auth.sign(&params);

    let login = auth.verify(&params, &hash).unwrap();
    assert_eq!(login.user, "2020");
    assert_eq!(login.survey_id(), Some("pension"));
    assert_eq!(login.wave_id(), Some("2026-q3"));
}

#[test]
fn tampering_yields_a_generic_error() {
    let auth = HashAuthenticator::new("s3cret");
    let mut params = params();
    let hash = auth.sign(&params);

    params.insert("wid".to_string(), "2027-q1".to_string());
    let err = auth.verify(&params, &hash).unwrap_err();
    // Never leak the expected hash to the respondent.
    assert_eq!(err.to_string(), "login failed");
}

#[test]
fn exempt_parameters_do_not_affect_the_hash() {
    let auth = HashAuthenticator::new("s3cret");
    let mut params = params();
    let hash = auth.sign(&params);

    // Mutable per-request fields may vary freely.
    params.insert("page".to_string(), "3".to_string());
    params.insert("lang_code".to_string(), "de".to_string());
    let login = auth.verify(&params, &hash).unwrap();
    assert_eq!(login.attrs.get("page"), None);
}

#[test]
fn different_salts_disagree() {
    let params = params();
    let hash = HashAuthenticator::new("s3cret").sign(&params);
    assert!(HashAuthenticator::new("other").verify(&params, &hash).is_err());
}

#[test]
fn login_survives_the_session_store() {
    let auth = HashAuthenticator::new("s3cret");
    let params = params();
    let login = auth.verify(&params, &auth.sign(&params)).unwrap();

    let mut session = MemorySession::new();
    session.put_object("login", &login).unwrap();
    let restored: Login = session.get_object("login").unwrap();
    assert_eq!(restored, login);
}
