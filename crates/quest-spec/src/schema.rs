use schemars::{Schema, schema_for};

use crate::spec::questionnaire::Questionnaire;

/// JSON schema of the questionnaire template document, for template authors
/// and editor tooling.
pub fn template_schema() -> Schema {
    schema_for!(Questionnaire)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_describes_the_tree() {
        let schema = serde_json::to_value(template_schema()).unwrap();
        let props = schema
            .get("properties")
            .and_then(|value| value.as_object())
            .expect("object schema");
        assert!(props.contains_key("pages"));
        assert!(props.contains_key("survey"));
        assert!(props.contains_key("lang_codes_order"));
    }
}
