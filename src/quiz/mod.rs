//! Interactive terminal quiz and the views shared with the one-shot commands.

pub mod report;
pub mod view;

pub use report::{AxisReport, ResultReport};

use crate::bank::{Question, TypeCatalog};
use crate::scoring::Rating;
use crate::session::QuizSession;
use anyhow::{Context, Result};
use dialoguer::Select;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Paused,
}

/// Walk the unanswered questions (all of them with `review`), recording each
/// choice as it is made. Esc or `q` pauses; everything answered so far is kept.
pub fn run_interactive(
    session: &mut QuizSession<'_>,
    catalog: &TypeCatalog,
    nickname: Option<&str>,
    review: bool,
) -> Result<Outcome> {
    let bank = session.bank();
    view::print_banner(bank);

    let pending: Vec<&Question> = bank
        .items
        .iter()
        .filter(|question| review || session.answers().get(question.id).is_none())
        .collect();

    let choices: Vec<String> = Rating::all()
        .map(|rating| format!("{rating}. {}", bank.scale_label(rating.value())))
        .collect();

    for question in pending {
        view::print_progress(&session.progress());

        let current = session.answers().get(question.id).unwrap_or(Rating::NEUTRAL);
        let picked = Select::new()
            .with_prompt(format!("  {}. {}", question.id, question.text))
            .items(&choices)
            .default(usize::from(current.value() - 1))
            .interact_opt()
            .context("Failed to read answer")?;

        let Some(index) = picked else {
            return Ok(Outcome::Paused);
        };

        let rating = Rating::new(u8::try_from(index + 1)?)?;
        session.answer(question.id, rating)?;
        tracing::debug!(question = question.id, rating = rating.value(), "answer recorded");
    }

    view::print_progress(&session.progress());

    let result = session.final_result()?;
    let report = ResultReport::build(bank, catalog, &result, nickname);
    view::print_result(&report);
    Ok(Outcome::Completed)
}
