use std::collections::{BTreeMap, BTreeSet};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::warn;

/// A verified respondent identity plus arbitrary string attributes.
///
/// `survey_id` and `wave_id` attributes locate the questionnaire template and
/// response file for this respondent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Login {
    pub user: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl Login {
    pub fn survey_id(&self) -> Option<&str> {
        self.attrs.get("survey_id").map(String::as_str)
    }

    pub fn wave_id(&self) -> Option<&str> {
        self.attrs.get("wave_id").map(String::as_str)
    }
}

/// Authentication failure.
///
/// Carries no detail: hash mismatches must never reach the end user
/// verbatim. The specifics are logged internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("login failed")]
pub struct AuthError;

/// Passwordless login: the caller presents its request parameters and a hash;
/// the hash must equal the salted digest over the sorted parameter values.
///
/// Links carrying a valid hash can be mailed out, so a respondent logs in by
/// clicking, and tampering with any parameter invalidates the hash.
#[derive(Debug, Clone)]
pub struct HashAuthenticator {
    salt: String,
    /// Parameter keys excluded from the digest; mutable per-request fields
    /// like the current page or language.
    exempt: BTreeSet<String>,
}

impl HashAuthenticator {
    pub fn new(salt: impl Into<String>) -> Self {
        let exempt = ["h", "page", "submit", "lang_code", "mobile", "skip_validation"]
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            salt: salt.into(),
            exempt,
        }
    }

    pub fn exempt(mut self, key: impl Into<String>) -> Self {
        self.exempt.insert(key.into());
        self
    }

    /// Digest over the non-exempt parameter values, sorted by key, joined by
    /// `-` and extended by the salt.
    pub fn sign(&self, params: &BTreeMap<String, String>) -> String {
        let mut check = String::new();
        for (key, value) in params {
            if self.exempt.contains(key) {
                continue;
            }
            check.push_str(value);
            check.push('-');
        }
        check.push_str(&self.salt);
        URL_SAFE_NO_PAD.encode(Sha256::digest(check.as_bytes()))
    }

    /// Verifies the presented hash and mints a `Login` from the `u` parameter
    /// and the remaining parameters as attributes.
    ///
    /// The returned error is generic; the expected-vs-presented detail goes
    /// to the log only.
    pub fn verify(
        &self,
        params: &BTreeMap<String, String>,
        presented: &str,
    ) -> Result<Login, AuthError> {
        let expected = self.sign(params);
        if expected != presented {
            warn!(
                %expected,
                %presented,
                "hash over check string unequal hash argument"
            );
            return Err(AuthError);
        }

        let user = params.get("u").cloned().unwrap_or_default();
        if user.is_empty() {
            warn!("hash login without user parameter");
            return Err(AuthError);
        }

        let mut attrs = BTreeMap::new();
        for (key, value) in params {
            if key == "u" || self.exempt.contains(key) {
                continue;
            }
            attrs.insert(attr_name(key), value.clone());
        }
        Ok(Login { user, attrs })
    }
}

// Short mail-link parameter keys map to their canonical attribute names.
fn attr_name(key: &str) -> String {
    match key {
        "sid" => "survey_id".to_string(),
        "wid" => "wave_id".to_string(),
        _ => key.to_string(),
    }
}
