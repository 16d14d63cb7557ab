#![allow(missing_docs)]

pub mod dynamic;
pub mod i18n;
pub mod navigation;
pub mod normalize;
pub mod registry;
pub mod schema;
pub mod spec;
pub mod validate;

pub use dynamic::{DynFuncError, DynamicError, DynamicFn, compute_dynamic_content};
pub use i18n::{LocalizedText, Locales, NO_TRANSLATION, Resolution, hyphenate};
pub use navigation::{NavFn, NavPredicate, is_navigable, navigable_pages, next_page, prev_page};
pub use normalize::normalize;
pub use registry::{Registry, RegistryError, ResponseError, ValidatorFn};
pub use schema::template_schema;
pub use spec::{
    Group, HAlign, Input, InputType, Page, Questionnaire, RESERVED_NAMES, RadioOption, Survey,
};
pub use validate::{SpecError, translation_completeness, valid_name, validate};
