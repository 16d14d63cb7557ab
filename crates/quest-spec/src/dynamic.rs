use thiserror::Error;

use crate::i18n::LocalizedText;
use crate::registry::Registry;
use crate::spec::input::InputType;
use crate::spec::questionnaire::Questionnaire;

/// Failure raised inside a registered dynamic function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct DynFuncError(pub String);

impl DynFuncError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Computes render-time label text for one dynamic input.
pub type DynamicFn = fn(&Questionnaire) -> Result<String, DynFuncError>;

/// Errors raised while resolving dynamic content for a page.
///
/// All of them identify the offending input and function unambiguously; the
/// render layer decides whether to abort the page or render partially.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DynamicError {
    #[error("input '{input}' has type dynamic but names no dynamic function")]
    MissingFuncName { input: String },
    #[error("input '{input}' points to dynamic func '{func}' which is not registered")]
    UnregisteredFunc { input: String, func: String },
    #[error("input '{input}': dynamic func '{func}' failed: {source}")]
    FuncFailed {
        input: String,
        func: String,
        #[source]
        source: DynFuncError,
    },
}

/// Recomputes every `dynamic` input on the given page, overwriting its label
/// with a single-language text keyed by the questionnaire's current
/// `lang_code`.
///
/// Registration of every referenced function is checked before any label is
/// touched; an unregistered name leaves the tree unmodified. Re-invoking
/// after a language switch recomputes for the new language and discards the
/// previous language's text: this content is render-time only, never
/// persisted.
pub fn compute_dynamic_content(
    q: &mut Questionnaire,
    page_idx: usize,
    registry: &Registry,
) -> Result<(), DynamicError> {
    let Some(page) = q.pages.get(page_idx) else {
        return Ok(());
    };

    let mut pending = Vec::new();
    for (group_idx, group) in page.groups.iter().enumerate() {
        for (input_idx, input) in group.inputs.iter().enumerate() {
            if input.kind != InputType::Dynamic {
                continue;
            }
            let func_name = input.dynamic_func.as_deref().ok_or_else(|| {
                DynamicError::MissingFuncName {
                    input: input.name.clone(),
                }
            })?;
            let Some(func) = registry.dynamic_func(func_name) else {
                return Err(DynamicError::UnregisteredFunc {
                    input: input.name.clone(),
                    func: func_name.to_string(),
                });
            };
            pending.push((group_idx, input_idx, func_name.to_string(), func));
        }
    }

    for (group_idx, input_idx, func_name, func) in pending {
        let input_name = q.pages[page_idx].groups[group_idx].inputs[input_idx]
            .name
            .clone();
        let text = func(q).map_err(|source| DynamicError::FuncFailed {
            input: input_name,
            func: func_name,
            source,
        })?;
        q.pages[page_idx].groups[group_idx].inputs[input_idx].label =
            LocalizedText::single(q.lang_code.clone(), text);
    }

    Ok(())
}

/// Built-in dynamic function: how many answerable inputs the respondent has
/// filled, rendered in the current language.
pub fn response_statistics(q: &Questionnaire) -> Result<String, DynFuncError> {
    let (responses, inputs, ratio) = q.statistics();
    let pct = ratio * 100.0;
    let text = match q.lang_code.as_str() {
        "de" => format!("Sie haben {responses} von {inputs} Fragen beantwortet ({pct:.1}%)."),
        _ => format!("You answered {responses} out of {inputs} questions ({pct:.1}%)."),
    };
    Ok(text)
}
