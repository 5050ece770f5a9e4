#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod app;
pub mod bank;
pub mod cli;
pub mod config;
pub mod error;
pub mod quiz;
pub mod scoring;
pub mod session;
pub mod share;
pub mod store;
pub mod ui;

pub use bank::{AxisKey, QuestionBank, TypeCatalog};
pub use config::Config;
pub use error::{QuizError, Result};
pub use scoring::{AnswerSet, NormalizedResult, Rating, ScoringResult, normalize, score};
pub use session::QuizSession;
