//! Static question bank: rating scale, the four bipolar axes and the items.
//!
//! The built-in bank is compiled into the binary; a bank with the same JSON
//! shape can be loaded from disk instead. Every bank is shape-checked once at
//! load, after which the scoring engine treats it as immutable input.

pub mod catalog;

pub use catalog::{Descriptor, TypeCatalog, TypeDescriptor};

use crate::error::BankError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use strum::{Display, EnumIter};

const BUILTIN_QUESTIONS: &str = include_str!("../../data/questions.json");

/// One of the four bipolar dimensions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum AxisKey {
    EI,
    SN,
    TF,
    JP,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisDef {
    pub key: AxisKey,
    pub left: char,
    pub right: char,
    pub title: String,
}

impl AxisDef {
    pub fn has_letter(&self, letter: char) -> bool {
        letter == self.left || letter == self.right
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub axis: AxisKey,
    /// Pole the statement is written toward; agreeing moves the score that way.
    pub dir: char,
}

/// A labelled point on the 1..=5 agreement scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalePoint {
    pub value: u8,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub scale: Vec<ScalePoint>,
    pub axes: Vec<AxisDef>,
    pub items: Vec<Question>,
}

impl QuestionBank {
    /// The 40-question bank shipped with the binary.
    pub fn builtin() -> Result<Self, BankError> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    pub fn from_json(raw: &str) -> Result<Self, BankError> {
        let bank: Self = serde_json::from_str(raw).map_err(|source| BankError::Parse {
            what: "question bank",
            source,
        })?;
        bank.validate()?;
        Ok(bank)
    }

    pub fn load(path: &Path) -> Result<Self, BankError> {
        let raw = fs::read_to_string(path)?;
        let bank = Self::from_json(&raw)?;
        tracing::debug!(
            path = %path.display(),
            items = bank.items.len(),
            "loaded question bank"
        );
        Ok(bank)
    }

    /// Load from `path` when given, otherwise the built-in bank.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, BankError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    pub fn validate(&self) -> Result<(), BankError> {
        if self.axes.len() != 4 {
            return Err(BankError::AxisCount(self.axes.len()));
        }

        let mut seen_axes = HashSet::new();
        for axis in &self.axes {
            if !seen_axes.insert(axis.key) {
                return Err(BankError::DuplicateAxis(axis.key.to_string()));
            }
            if axis.left == axis.right {
                return Err(BankError::DegenerateAxis {
                    key: axis.key.to_string(),
                    letter: axis.left,
                });
            }
        }

        let mut values: Vec<u8> = self.scale.iter().map(|point| point.value).collect();
        values.sort_unstable();
        if values != [1u8, 2, 3, 4, 5] {
            return Err(BankError::InvalidScale);
        }

        if self.items.is_empty() {
            return Err(BankError::NoQuestions);
        }

        let mut seen_ids = HashSet::new();
        for item in &self.items {
            if !seen_ids.insert(item.id) {
                return Err(BankError::DuplicateQuestion(item.id));
            }
            let Some(axis) = self.axis(item.axis) else {
                return Err(BankError::UnknownAxis {
                    id: item.id,
                    axis: item.axis.to_string(),
                });
            };
            if !axis.has_letter(item.dir) {
                return Err(BankError::InvalidDirection {
                    id: item.id,
                    axis: item.axis.to_string(),
                    dir: item.dir,
                });
            }
        }

        Ok(())
    }

    pub fn axis(&self, key: AxisKey) -> Option<&AxisDef> {
        self.axes.iter().find(|axis| axis.key == key)
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.question(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Label for a scale value, falling back to the bare number.
    pub fn scale_label(&self, value: u8) -> String {
        self.scale
            .iter()
            .find(|point| point.value == value)
            .map_or_else(|| value.to_string(), |point| point.label.clone())
    }
}
