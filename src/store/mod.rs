//! Local persistence of the answer set.
//!
//! A single slot, `<data_dir>/<storage_key>.json`, holds the JSON-serialized
//! answer set. Reads never fail: a missing or unreadable slot loads as an
//! empty set. Writes go through a temp file and a rename.

use crate::error::StoreError;
use crate::scoring::AnswerSet;
use crate::session::AnswerObserver;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Version-tagged key of the answer slot.
pub const DEFAULT_STORAGE_KEY: &str = "fsmbti_answers_v3";

#[derive(Debug, Clone)]
pub struct AnswerStore {
    path: PathBuf,
}

impl AnswerStore {
    pub fn new(data_dir: &Path, storage_key: &str) -> Self {
        Self {
            path: data_dir.join(format!("{storage_key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> AnswerSet {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return AnswerSet::new(),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "failed reading saved answers; starting empty"
                );
                return AnswerSet::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(answers) => answers,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "saved answers are not valid; starting empty"
                );
                AnswerSet::new()
            }
        }
    }

    pub fn save(&self, answers: &AnswerSet) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(answers)?;
        write_atomic(&self.path, &serialized)?;
        tracing::debug!(
            path = %self.path.display(),
            answered = answers.len(),
            "saved answers"
        );
        Ok(())
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Remove {
                path: self.path.display().to_string(),
                source,
            }),
        }
    }
}

impl AnswerObserver for AnswerStore {
    fn answers_changed(&self, answers: &AnswerSet) -> Result<(), StoreError> {
        self.save(answers)
    }
}

fn write_atomic(path: &Path, content: &str) -> Result<(), StoreError> {
    let write_error = |source| StoreError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(write_error)?;

    if let Err(rename_error) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_error(rename_error));
    }

    Ok(())
}
