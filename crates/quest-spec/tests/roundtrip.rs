use std::collections::BTreeMap;

use quest_spec::{InputType, LocalizedText, Questionnaire, RadioOption, Registry};

fn filled_questionnaire() -> Questionnaire {
    let mut q = Questionnaire::default();
    q.survey.ty = "pension".into();
    q.survey.wave_id = "2026-q3".into();
    q.survey.org = LocalizedText::from([("de", "Institut"), ("en", "Institute")]);
    q.survey.params.insert("variant".into(), "long".into());
    q.user_id = "2020".into();
    q.lang_codes = BTreeMap::from([
        ("de".to_string(), "Deutsch".to_string()),
        ("en".to_string(), "English".to_string()),
    ]);
    q.lang_codes_order = vec!["de".into(), "en".into()];
    q.lang_code = "de".into();

    let page = q.add_page();
    page.label = LocalizedText::from([("de", "Alter"), ("en", "Age")]);
    page.short = LocalizedText::from([("de", "Alter"), ("en", "Age")]);
    let group = page.add_group();
    {
        let input = group.add_input();
        input.kind = InputType::Number;
        input.name = "age_years".into();
        input.label = LocalizedText::from([("de", "Ihr Alter"), ("en", "Your age")]);
        input.min = Some(0.0);
        input.max = Some(120.0);
        input.validator = Some("inrange1000".into());
    }
    {
        let input = group.add_input();
        input.kind = InputType::Radio;
        input.name = "employed".into();
        input.label = LocalizedText::from([("de", "Erwerbstätig"), ("en", "Employed")]);
        input.radios = vec![RadioOption::default(), RadioOption::default()];
    }

    q
}

#[test]
fn finalized_questionnaire_round_trips_through_json() {
    let mut q = filled_questionnaire();
    q.finalize(&Registry::with_builtins()).unwrap();

    // Respondent state is part of the persisted document.
    assert!(q.set_response("age_years", "47"));
    assert!(q.set_response("employed", "1"));

    let serialized = serde_json::to_string_pretty(&q).unwrap();
    let restored: Questionnaire = serde_json::from_str(&serialized).unwrap();
    assert_eq!(restored, q);
    assert_eq!(restored.response_by_name("age_years"), Some("47"));
    assert_eq!(restored.pages[0].groups[0].inputs[1].radios[0].val, "1");
}

#[test]
fn unknown_input_type_fails_deserialization() {
    let raw = r#"{
        "survey": { "type": "pension" },
        "pages": [
            { "groups": [ { "inputs": [ { "name": "q1", "type": "hologram" } ] } ] }
        ]
    }"#;
    let err = serde_json::from_str::<Questionnaire>(raw).unwrap_err();
    assert!(err.to_string().contains("hologram"));
}

#[test]
fn statistics_counts_answerable_inputs() {
    let mut q = filled_questionnaire();
    q.set_response("age_years", "47");
    let (responses, inputs, ratio) = q.statistics();
    assert_eq!((responses, inputs), (1, 2));
    assert!((ratio - 0.5).abs() < f64::EPSILON);
}
