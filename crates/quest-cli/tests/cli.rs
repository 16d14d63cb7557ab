use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;

fn quest() -> Command {
    Command::cargo_bin("quest-cli").expect("binary builds")
}

#[test]
fn example_template_passes_validation() {
    let dir = TempDir::new().unwrap();
    let template = dir.child("example.json");

    quest()
        .args(["example", "--out"])
        .arg(template.path())
        .assert()
        .success();
    template.assert(predicates::path::exists());

    quest()
        .arg("validate")
        .arg(template.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("valid"));
}

#[test]
fn broken_template_fails_validation() {
    let dir = TempDir::new().unwrap();
    let template = dir.child("broken.json");
    // A button jumping to page 7 of a one-page survey.
    template
        .write_str(
            r#"{
                "survey": { "type": "broken" },
                "lang_codes": { "en": "English" },
                "lang_codes_order": ["en"],
                "lang_code": "en",
                "pages": [
                    { "groups": [ { "inputs": [
                        { "name": "go", "type": "button", "response": "7" }
                    ] } ] }
                ]
            }"#,
        )
        .unwrap();

    quest()
        .arg("validate")
        .arg(template.path())
        .assert()
        .failure();
}

#[test]
fn show_prints_pages_and_inputs() {
    let dir = TempDir::new().unwrap();
    let template = dir.child("example.json");
    quest()
        .args(["example", "--out"])
        .arg(template.path())
        .assert()
        .success();

    quest()
        .args(["show", "--lang", "de"])
        .arg(template.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("q1_satisfaction"))
        .stdout(predicates::str::contains("Bewertung"));
}

#[test]
fn hash_matches_the_authenticator() {
    let expected = {
        let auth = quest_lib::HashAuthenticator::new("s3cret");
        let params = std::collections::BTreeMap::from([
            ("u".to_string(), "2020".to_string()),
            ("sid".to_string(), "example".to_string()),
        ]);
        auth.sign(&params)
    };

    quest()
        .args(["hash", "--salt", "s3cret", "-u", "2020", "--sid", "example"])
        .assert()
        .success()
        .stdout(predicates::str::contains(expected));
}
