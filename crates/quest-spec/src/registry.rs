use std::collections::BTreeMap;

use thiserror::Error;

use crate::dynamic::DynamicFn;
use crate::navigation::NavPredicate;
use crate::validate::valid_name;

/// Failure reported by a response validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ResponseError {
    pub message: String,
}

impl ResponseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Checks one response string against a fixed rule.
pub type ValidatorFn = fn(&str) -> Result<(), ResponseError>;

/// Errors raised while populating a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("registry name '{0}' must consist of [a-z0-9_-]")]
    MalformedName(String),
    #[error("'{0}' is already registered")]
    Duplicate(String),
}

/// Named functions the validation engine and render pipeline look up at
/// runtime: response validators, dynamic-content functions, and navigation
/// predicates.
///
/// Constructed once at process start and passed by reference; the names form
/// a versioned contract between generator code and the engine. Renaming a
/// registered function without updating the templates that reference it is a
/// breaking change caught at validation time.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    validators: BTreeMap<String, ValidatorFn>,
    dynamic_funcs: BTreeMap<String, DynamicFn>,
    nav_predicates: BTreeMap<String, NavPredicate>,
}

impl Registry {
    /// An empty registry; useful for tests with fake entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the built-in validators and dynamic
    /// functions.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, func) in BUILTIN_VALIDATORS.iter().copied() {
            registry
                .register_validator(name, func)
                .expect("builtin names are well-formed and unique");
        }
        registry
            .register_dynamic("response-statistics", crate::dynamic::response_statistics)
            .expect("builtin names are well-formed and unique");
        registry
    }

    pub fn register_validator(
        &mut self,
        name: impl Into<String>,
        func: ValidatorFn,
    ) -> Result<(), RegistryError> {
        let name = checked_name(name)?;
        if self.validators.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.validators.insert(name, func);
        Ok(())
    }

    pub fn register_dynamic(
        &mut self,
        name: impl Into<String>,
        func: DynamicFn,
    ) -> Result<(), RegistryError> {
        let name = checked_name(name)?;
        if self.dynamic_funcs.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.dynamic_funcs.insert(name, func);
        Ok(())
    }

    pub fn register_nav(
        &mut self,
        name: impl Into<String>,
        predicate: NavPredicate,
    ) -> Result<(), RegistryError> {
        let name = checked_name(name)?;
        if self.nav_predicates.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.nav_predicates.insert(name, predicate);
        Ok(())
    }

    pub fn validator(&self, name: &str) -> Option<ValidatorFn> {
        self.validators.get(name).copied()
    }

    pub fn dynamic_func(&self, name: &str) -> Option<DynamicFn> {
        self.dynamic_funcs.get(name).copied()
    }

    pub fn nav_predicate(&self, name: &str) -> Option<&NavPredicate> {
        self.nav_predicates.get(name)
    }

    pub fn has_validator(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    pub fn has_dynamic_func(&self, name: &str) -> bool {
        self.dynamic_funcs.contains_key(name)
    }

    pub fn has_nav_predicate(&self, name: &str) -> bool {
        self.nav_predicates.contains_key(name)
    }
}

fn checked_name(name: impl Into<String>) -> Result<String, RegistryError> {
    let name = name.into();
    if name.is_empty() || !valid_name(&name) {
        return Err(RegistryError::MalformedName(name));
    }
    Ok(name)
}

static BUILTIN_VALIDATORS: &[(&str, ValidatorFn)] = &[
    ("must", must),
    ("inrange10", in_range_10),
    ("inrange100", in_range_100),
    ("inrange1000", in_range_1000),
    ("inrange1mio", in_range_1mio),
];

fn must(response: &str) -> Result<(), ResponseError> {
    if response.trim().is_empty() {
        return Err(ResponseError::new("response must not be empty"));
    }
    Ok(())
}

fn in_range(response: &str, bound: f64) -> Result<(), ResponseError> {
    let value: f64 = response
        .trim()
        .parse()
        .map_err(|_| ResponseError::new(format!("'{response}' is not a number")))?;
    if value.abs() > bound {
        return Err(ResponseError::new(format!(
            "{value} is outside of [-{bound}, {bound}]"
        )));
    }
    Ok(())
}

fn in_range_10(response: &str) -> Result<(), ResponseError> {
    in_range(response, 10.0)
}

fn in_range_100(response: &str) -> Result<(), ResponseError> {
    in_range(response, 100.0)
}

fn in_range_1000(response: &str) -> Result<(), ResponseError> {
    in_range(response, 1000.0)
}

fn in_range_1mio(response: &str) -> Result<(), ResponseError> {
    in_range(response, 1_000_000.0)
}
