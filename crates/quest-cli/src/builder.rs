use std::collections::BTreeMap;

use quest_spec::{
    InputType, LocalizedText, NavPredicate, Questionnaire, RadioOption, Registry,
};

/// Registry for the example survey: the built-ins plus its one navigation
/// predicate.
pub fn example_registry() -> Registry {
    let mut registry = Registry::with_builtins();
    registry
        .register_nav(
            "wants-detail",
            NavPredicate::with_deps(wants_detail, ["q1_satisfaction"]),
        )
        .expect("example names are well-formed and unique");
    registry
}

// The detail page only appears for respondents who picked the lowest rating.
fn wants_detail(q: &Questionnaire, _page_idx: usize) -> bool {
    q.response_by_name("q1_satisfaction") == Some("1")
}

/// A complete two-language example survey exercising the whole model: radio
/// auto-numbering, a button jump, a predicate-gated page, and a dynamic
/// input.
pub fn example_questionnaire() -> Questionnaire {
    let mut q = Questionnaire::default();
    q.survey.ty = "example".into();
    q.survey.wave_id = "2026-08".into();
    q.survey.org = LocalizedText::from([("de", "Beispiel-Institut"), ("en", "Example Institute")]);
    q.survey.name = LocalizedText::from([("de", "Zufriedenheit"), ("en", "Satisfaction")]);
    q.lang_codes = BTreeMap::from([
        ("de".to_string(), "Deutsch".to_string()),
        ("en".to_string(), "English".to_string()),
    ]);
    q.lang_codes_order = vec!["de".into(), "en".into()];
    q.lang_code = "en".into();

    // page 0 - welcome
    {
        let page = q.add_page();
        page.no_navigation = true;
        page.label = LocalizedText::from([("de", "Willkommen"), ("en", "Welcome")]);
        page.short = LocalizedText::from([("de", "Start"), ("en", "Start")]);

        let group = page.add_group();
        group.cols = 1;
        {
            let input = group.add_input();
            input.kind = InputType::Textblock;
            input.desc = LocalizedText::from([
                ("de", "Vielen Dank für Ihre Teilnahme. Die Umfrage dauert wenige Minuten."),
                ("en", "Thank you for taking part. The survey takes a few minutes."),
            ]);
        }
        {
            let input = group.add_input();
            input.kind = InputType::Button;
            input.name = "start".into();
            input.response = "1".into();
            input.label = LocalizedText::from([("de", "Weiter"), ("en", "Next")]);
        }
    }

    // page 1 - ratings
    {
        let page = q.add_page();
        page.section = LocalizedText::from([("de", "Bewertung"), ("en", "Rating")]);
        page.label = LocalizedText::from([("de", "Ihre Einschätzung"), ("en", "Your assessment")]);
        page.short = LocalizedText::from([("de", "Bewertung"), ("en", "Rating")]);

        let group = page.add_group();
        group.cols = 4;
        {
            let input = group.add_input();
            input.kind = InputType::Radio;
            input.name = "q1_satisfaction".into();
            input.label = LocalizedText::from([
                ("de", "Wie zufrieden sind Sie insgesamt?"),
                ("en", "How satisfied are you overall?"),
            ]);
            input.radios = vec![
                RadioOption {
                    label: LocalizedText::from([("de", "gar nicht"), ("en", "not at all")]),
                    ..Default::default()
                },
                RadioOption {
                    label: LocalizedText::from([("de", "wenig"), ("en", "slightly")]),
                    ..Default::default()
                },
                RadioOption {
                    label: LocalizedText::from([("de", "weitgehend"), ("en", "mostly")]),
                    ..Default::default()
                },
                RadioOption {
                    label: LocalizedText::from([("de", "voll"), ("en", "fully")]),
                    ..Default::default()
                },
            ];
        }
        {
            let input = group.add_input();
            input.kind = InputType::Number;
            input.name = "q2_score".into();
            input.label = LocalizedText::from([
                ("de", "Punktzahl von 0 bis 10"),
                ("en", "Score from 0 to 10"),
            ]);
            input.min = Some(0.0);
            input.max = Some(10.0);
            input.validator = Some("inrange10".into());
            input.suffix = LocalizedText::from([("de", "Punkte"), ("en", "points")]);
        }
    }

    // page 2 - gated detail questions
    {
        let page = q.add_page();
        page.nav_func = Some("wants-detail".into());
        page.label = LocalizedText::from([("de", "Nachfrage"), ("en", "Follow-up")]);
        page.short = LocalizedText::from([("de", "Nachfrage"), ("en", "Follow-up")]);

        let group = page.add_group();
        let input = group.add_input();
        input.kind = InputType::Textarea;
        input.name = "q3_criticism".into();
        input.label = LocalizedText::from([
            ("de", "Was sollten wir verbessern?"),
            ("en", "What should we improve?"),
        ]);
        input.validator = Some("must".into());
        input.max_chars = Some(2000);
    }

    // page 3 - closing
    {
        let page = q.add_page();
        page.label = LocalizedText::from([("de", "Abschluss"), ("en", "Finish")]);
        page.short = LocalizedText::from([("de", "Ende"), ("en", "End")]);

        let group = page.add_group();
        {
            let input = group.add_input();
            input.kind = InputType::Dynamic;
            input.name = "stats".into();
            input.dynamic_func = Some("response-statistics".into());
        }
        {
            let input = group.add_input();
            input.kind = InputType::Textblock;
            input.desc = LocalizedText::from([
                ("de", "Vielen Dank! Ihre Antworten wurden gespeichert."),
                ("en", "Thank you! Your answers have been saved."),
            ]);
        }
    }

    q
}
