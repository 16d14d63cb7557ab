use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use quest_spec::Questionnaire;

/// Errors raised by the file-backed questionnaire store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("'{path}' is not a valid questionnaire document: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot encode questionnaire for '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("questionnaire is missing its {0} identity")]
    MissingIdentity(&'static str),
}

/// File-backed storage for questionnaire templates and per-respondent
/// response documents.
///
/// Templates live at `base/<survey-type>.json`; responses at
/// `base/<survey-type>/<wave-id>/<user-id>.json`. Each response file is one
/// flat JSON document holding the full tree including current responses, so
/// re-rendering and re-validating need nothing else.
#[derive(Debug, Clone)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn template_path(&self, survey_type: &str) -> PathBuf {
        self.base.join(format!("{survey_type}.json"))
    }

    pub fn response_path(&self, survey_type: &str, wave_id: &str, user_id: &str) -> PathBuf {
        self.base
            .join(survey_type)
            .join(wave_id)
            .join(format!("{user_id}.json"))
    }

    pub fn load_template(&self, survey_type: &str) -> Result<Questionnaire, StoreError> {
        read_questionnaire(&self.template_path(survey_type))
    }

    pub fn save_template(&self, q: &Questionnaire) -> Result<PathBuf, StoreError> {
        if q.survey.ty.is_empty() {
            return Err(StoreError::MissingIdentity("survey-type"));
        }
        let path = self.template_path(&q.survey.ty);
        write_questionnaire(&path, q)?;
        Ok(path)
    }

    /// Persists the questionnaire under its own survey/wave/user identity.
    pub fn save_response(&self, q: &Questionnaire) -> Result<PathBuf, StoreError> {
        let path = self.identity_path(q)?;
        write_questionnaire(&path, q)?;
        Ok(path)
    }

    pub fn load_response(
        &self,
        survey_type: &str,
        wave_id: &str,
        user_id: &str,
    ) -> Result<Questionnaire, StoreError> {
        read_questionnaire(&self.response_path(survey_type, wave_id, user_id))
    }

    /// Removes a respondent's response file; absence is not an error.
    pub fn delete_response(
        &self,
        survey_type: &str,
        wave_id: &str,
        user_id: &str,
    ) -> Result<(), StoreError> {
        let path = self.response_path(survey_type, wave_id, user_id);
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), "removed response file");
                Ok(())
            }
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Write { path, source }),
        }
    }

    fn identity_path(&self, q: &Questionnaire) -> Result<PathBuf, StoreError> {
        if q.survey.ty.is_empty() {
            return Err(StoreError::MissingIdentity("survey-type"));
        }
        if q.survey.wave_id.is_empty() {
            return Err(StoreError::MissingIdentity("wave-id"));
        }
        if q.user_id.is_empty() {
            return Err(StoreError::MissingIdentity("user-id"));
        }
        Ok(self.response_path(&q.survey.ty, &q.survey.wave_id, &q.user_id))
    }
}

fn read_questionnaire(path: &Path) -> Result<Questionnaire, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn write_questionnaire(path: &Path, q: &Questionnaire) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let raw = serde_json::to_string_pretty(q).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, raw).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote questionnaire");
    Ok(())
}
