//! Quiz state.
//!
//! The session owns the current answer set and replaces it wholesale on every
//! change. Observers (the persistent store, in practice) are told about each
//! replacement; scoring is recomputed from scratch on demand.

use crate::bank::QuestionBank;
use crate::error::{SessionError, StoreError};
use crate::scoring::{self, AnswerSet, Rating, ScoringResult};

/// Receives every new answer set after it replaces the previous one.
pub trait AnswerObserver {
    fn answers_changed(&self, answers: &AnswerSet) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    pub percent: u8,
}

impl Progress {
    pub fn new(answered: usize, total: usize) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let percent = if total == 0 {
            0
        } else {
            ((answered as f64 / total as f64) * 100.0).round().min(100.0) as u8
        };
        Self {
            answered,
            total,
            percent,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered >= self.total
    }
}

pub struct QuizSession<'a> {
    bank: &'a QuestionBank,
    answers: AnswerSet,
    observers: Vec<Box<dyn AnswerObserver + 'a>>,
}

impl<'a> QuizSession<'a> {
    pub fn new(bank: &'a QuestionBank, answers: AnswerSet) -> Self {
        Self {
            bank,
            answers,
            observers: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: impl AnswerObserver + 'a) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn bank(&self) -> &'a QuestionBank {
        self.bank
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn answer(&mut self, id: u32, rating: Rating) -> Result<(), SessionError> {
        if !self.bank.contains(id) {
            return Err(SessionError::UnknownQuestion(id));
        }
        let next = self.answers.with_answer(id, rating);
        self.replace(next)
    }

    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.replace(AnswerSet::new())
    }

    fn replace(&mut self, next: AnswerSet) -> Result<(), SessionError> {
        self.answers = next;
        for observer in &self.observers {
            observer.answers_changed(&self.answers)?;
        }
        Ok(())
    }

    /// Only answers to questions in the bank count toward progress.
    pub fn progress(&self) -> Progress {
        let answered = self
            .bank
            .items
            .iter()
            .filter(|question| self.answers.get(question.id).is_some())
            .count();
        Progress::new(answered, self.bank.len())
    }

    pub fn is_complete(&self) -> bool {
        self.progress().is_complete()
    }

    pub fn result(&self) -> ScoringResult {
        scoring::score(self.bank, &self.answers)
    }

    /// Result for display, refused until every question has an answer.
    pub fn final_result(&self) -> Result<ScoringResult, SessionError> {
        let progress = self.progress();
        if !progress.is_complete() {
            return Err(SessionError::Incomplete {
                answered: progress.answered,
                total: progress.total,
            });
        }
        Ok(self.result())
    }
}
