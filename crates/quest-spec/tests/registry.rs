use quest_spec::{NavPredicate, Questionnaire, Registry, RegistryError, ResponseError};

fn always(_q: &Questionnaire, _page_idx: usize) -> bool {
    true
}

fn nonzero(response: &str) -> Result<(), ResponseError> {
    if response == "0" {
        return Err(ResponseError::new("must not be zero"));
    }
    Ok(())
}

#[test]
fn builtins_are_registered() {
    let registry = Registry::with_builtins();
    for name in ["must", "inrange10", "inrange100", "inrange1000", "inrange1mio"] {
        assert!(registry.has_validator(name), "missing builtin '{name}'");
    }
    assert!(registry.has_dynamic_func("response-statistics"));
}

#[test]
fn builtin_validators_check_ranges() {
    let registry = Registry::with_builtins();
    let inrange10 = registry.validator("inrange10").unwrap();
    assert!(inrange10("7").is_ok());
    assert!(inrange10("-10").is_ok());
    assert!(inrange10("11").is_err());
    assert!(inrange10("seven").is_err());

    let must = registry.validator("must").unwrap();
    assert!(must("x").is_ok());
    assert!(must("  ").is_err());
}

#[test]
fn duplicate_registration_fails_eagerly() {
    let mut registry = Registry::new();
    registry.register_validator("nonzero", nonzero).unwrap();
    assert_eq!(
        registry.register_validator("nonzero", nonzero),
        Err(RegistryError::Duplicate("nonzero".into()))
    );
}

#[test]
fn malformed_names_fail_eagerly() {
    let mut registry = Registry::new();
    assert_eq!(
        registry.register_nav("Follow Up", NavPredicate::new(always)),
        Err(RegistryError::MalformedName("Follow Up".into()))
    );
    assert_eq!(
        registry.register_validator("", nonzero),
        Err(RegistryError::MalformedName(String::new()))
    );
}
