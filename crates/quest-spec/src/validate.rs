use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::i18n::LocalizedText;
use crate::registry::Registry;
use crate::spec::input::InputType;
use crate::spec::questionnaire::Questionnaire;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z0-9_-]+$").expect("pattern is well-formed"));

/// Whether a name consists solely of `[a-z0-9_-]` and is non-empty.
pub fn valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Structural violations that make a questionnaire template unservable.
///
/// Every variant names the offending element; validation is fail-fast, the
/// first violation wins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    #[error("survey type '{0}' must be non-empty and consist of [a-z0-9_-]")]
    InvalidSurveyType(String),
    #[error("lang_codes has {lang_codes} entries but lang_codes_order has {order}")]
    LangCodeCardinality { lang_codes: usize, order: usize },
    #[error("lang_codes_order entry '{0}' is not a key of lang_codes")]
    UnknownOrderedLangCode(String),
    #[error("language code '{0}' is not a key of lang_codes")]
    UnsupportedLangCode(String),
    #[error(
        "page {page}, group {group}, input {input}: button target '{target}' is not a page index"
    )]
    JumpTargetNotNumeric {
        page: usize,
        group: usize,
        input: usize,
        target: String,
    },
    #[error(
        "page {page}, group {group}, input {input}: button target {target} is outside 0..{pages}"
    )]
    JumpTargetOutOfRange {
        page: usize,
        group: usize,
        input: usize,
        target: i64,
        pages: usize,
    },
    #[error("page {page}, group {group}, input {input}: validator '{name}' is not registered")]
    UnknownValidator {
        page: usize,
        group: usize,
        input: usize,
        name: String,
    },
    #[error(
        "page {page}, group {group}, input {input}: dynamic input names no dynamic function"
    )]
    MissingDynamicFunc {
        page: usize,
        group: usize,
        input: usize,
    },
    #[error(
        "page {page}, group {group}, input {input}: dynamic func '{name}' is not registered"
    )]
    UnknownDynamicFunc {
        page: usize,
        group: usize,
        input: usize,
        name: String,
    },
    #[error("page {page}: navigation predicate '{name}' is not registered")]
    UnknownNavFunc { page: usize, name: String },
    #[error(
        "page {page}: navigation predicate '{name}' depends on input '{dep}' which does not exist"
    )]
    UnknownNavDependency {
        page: usize,
        name: String,
        dep: String,
    },
    #[error("page {page}, group {group}, input {input}: name is empty")]
    EmptyName {
        page: usize,
        group: usize,
        input: usize,
    },
    #[error(
        "page {page}, group {group}, input {input}: name '{name}' must consist of [a-z0-9_-]"
    )]
    MalformedName {
        page: usize,
        group: usize,
        input: usize,
        name: String,
    },
    #[error("page {page}, group {group}, input {input}: name '{name}' is reserved")]
    ReservedName {
        page: usize,
        group: usize,
        input: usize,
        name: String,
    },
    #[error("input name '{name}' is not unique ({count} occurrences)")]
    DuplicateName { name: String, count: usize },
    #[error("input name '{name}' is not lower case")]
    NameNotLowerCase { name: String },
    #[error("{path}: translation for '{lang}' is missing")]
    IncompleteTranslation { path: String, lang: String },
}

/// Integrity checks over a normalized questionnaire tree. Pure; run
/// `normalize` first. Called once at template-creation time, not per request.
///
/// Checks, in order: survey identity, language-code configuration, button
/// jump targets, validator / dynamic-function / navigation-predicate
/// references, and finally input-name rules across the whole tree.
pub fn validate(q: &Questionnaire, registry: &Registry) -> Result<(), SpecError> {
    if q.survey.ty.is_empty() || !valid_name(&q.survey.ty) {
        return Err(SpecError::InvalidSurveyType(q.survey.ty.clone()));
    }

    if q.lang_codes.len() != q.lang_codes_order.len() {
        return Err(SpecError::LangCodeCardinality {
            lang_codes: q.lang_codes.len(),
            order: q.lang_codes_order.len(),
        });
    }
    for code in &q.lang_codes_order {
        if !q.lang_codes.contains_key(code) {
            return Err(SpecError::UnknownOrderedLangCode(code.clone()));
        }
    }
    if !q.lang_code.is_empty() && !q.lang_codes.contains_key(&q.lang_code) {
        return Err(SpecError::UnsupportedLangCode(q.lang_code.clone()));
    }

    for (page_idx, page) in q.pages.iter().enumerate() {
        if let Some(name) = page.nav_func.as_deref() {
            let Some(predicate) = registry.nav_predicate(name) else {
                return Err(SpecError::UnknownNavFunc {
                    page: page_idx,
                    name: name.to_string(),
                });
            };
            for dep in &predicate.deps {
                if q.input_by_name(dep).is_none() {
                    return Err(SpecError::UnknownNavDependency {
                        page: page_idx,
                        name: name.to_string(),
                        dep: dep.clone(),
                    });
                }
            }
        }

        for (group_idx, group) in page.groups.iter().enumerate() {
            for (input_idx, input) in group.inputs.iter().enumerate() {
                if input.kind == InputType::Button && !input.response.is_empty() {
                    let target: i64 = input.response.trim().parse().map_err(|_| {
                        SpecError::JumpTargetNotNumeric {
                            page: page_idx,
                            group: group_idx,
                            input: input_idx,
                            target: input.response.clone(),
                        }
                    })?;
                    if target < 0 || target as usize >= q.pages.len() {
                        return Err(SpecError::JumpTargetOutOfRange {
                            page: page_idx,
                            group: group_idx,
                            input: input_idx,
                            target,
                            pages: q.pages.len(),
                        });
                    }
                }

                if let Some(name) = input.validator.as_deref()
                    && !registry.has_validator(name)
                {
                    return Err(SpecError::UnknownValidator {
                        page: page_idx,
                        group: group_idx,
                        input: input_idx,
                        name: name.to_string(),
                    });
                }

                if input.kind == InputType::Dynamic {
                    let Some(name) = input.dynamic_func.as_deref() else {
                        return Err(SpecError::MissingDynamicFunc {
                            page: page_idx,
                            group: group_idx,
                            input: input_idx,
                        });
                    };
                    if !registry.has_dynamic_func(name) {
                        return Err(SpecError::UnknownDynamicFunc {
                            page: page_idx,
                            group: group_idx,
                            input: input_idx,
                            name: name.to_string(),
                        });
                    }
                }
            }
        }
    }

    // Second full pass: input names. Layout inputs are exempt.
    let mut names: BTreeMap<&str, usize> = BTreeMap::new();
    for (page_idx, page) in q.pages.iter().enumerate() {
        for (group_idx, group) in page.groups.iter().enumerate() {
            for (input_idx, input) in group.inputs.iter().enumerate() {
                if input.is_layout() {
                    continue;
                }
                if input.is_reserved_name() {
                    return Err(SpecError::ReservedName {
                        page: page_idx,
                        group: group_idx,
                        input: input_idx,
                        name: input.name.clone(),
                    });
                }
                if input.name.is_empty() {
                    return Err(SpecError::EmptyName {
                        page: page_idx,
                        group: group_idx,
                        input: input_idx,
                    });
                }
                if !valid_name(&input.name) {
                    return Err(SpecError::MalformedName {
                        page: page_idx,
                        group: group_idx,
                        input: input_idx,
                        name: input.name.clone(),
                    });
                }
                *names.entry(input.name.as_str()).or_default() += 1;
            }
        }
    }
    for (name, count) in names {
        if count > 1 {
            return Err(SpecError::DuplicateName {
                name: name.to_string(),
                count,
            });
        }
        if name != name.to_lowercase() {
            return Err(SpecError::NameNotLowerCase {
                name: name.to_string(),
            });
        }
    }

    Ok(())
}

/// Tests every multilingual field for all-or-nothing completeness against the
/// configured language codes.
///
/// Kept apart from `validate`: dynamically instantiated content exists in
/// only one language at render time, so this runs once at template creation
/// and never afterwards.
pub fn translation_completeness(q: &Questionnaire) -> Result<(), SpecError> {
    for (page_idx, page) in q.pages.iter().enumerate() {
        let page_fields = [
            ("section", &page.section),
            ("label", &page.label),
            ("desc", &page.desc),
            ("short", &page.short),
        ];
        for (field, text) in page_fields {
            check_complete(q, text, format!("pages[{page_idx}].{field}"))?;
        }

        for (group_idx, group) in page.groups.iter().enumerate() {
            for (field, text) in [("label", &group.label), ("desc", &group.desc)] {
                check_complete(
                    q,
                    text,
                    format!("pages[{page_idx}].groups[{group_idx}].{field}"),
                )?;
            }

            for (input_idx, input) in group.inputs.iter().enumerate() {
                for (field, text) in [("label", &input.label), ("desc", &input.desc)] {
                    check_complete(
                        q,
                        text,
                        format!(
                            "pages[{page_idx}].groups[{group_idx}].inputs[{input_idx}].{field}"
                        ),
                    )?;
                }
            }
        }
    }
    Ok(())
}

fn check_complete(
    q: &Questionnaire,
    text: &LocalizedText,
    path: String,
) -> Result<(), SpecError> {
    match text.missing_language(q.lang_codes.keys().map(String::as_str)) {
        None => Ok(()),
        Some(lang) => Err(SpecError::IncompleteTranslation {
            path,
            lang: lang.to_string(),
        }),
    }
}
