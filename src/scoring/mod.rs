//! Scoring engine.
//!
//! `score` folds an answer set over the question bank into signed per-axis
//! tallies and a four-letter code; `normalize` rescales each tally onto
//! `[0, 1]` for the position bars. Both are pure and total.

pub mod answers;

pub use answers::{AnswerSet, Rating};

use crate::bank::{AxisKey, QuestionBank};
use serde::Serialize;
use std::collections::BTreeMap;

/// Normalized value reported for an axis with no answered questions.
pub const NEUTRAL_POSITION: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringResult {
    pub code: String,
    pub axis_score: BTreeMap<AxisKey, i32>,
    pub axis_count: BTreeMap<AxisKey, u32>,
}

impl ScoringResult {
    pub fn normalized(&self) -> NormalizedResult {
        normalize(&self.axis_score, &self.axis_count)
    }
}

/// Axis → position in `[0, 1]`; 0 is the right pole, 1 the left pole.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedResult(BTreeMap<AxisKey, f64>);

impl NormalizedResult {
    /// Position for `axis`; axes absent from the result sit at the midpoint.
    pub fn get(&self, axis: AxisKey) -> f64 {
        self.0.get(&axis).copied().unwrap_or(NEUTRAL_POSITION)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AxisKey, f64)> + '_ {
        self.0.iter().map(|(axis, value)| (*axis, *value))
    }
}

pub fn score(bank: &QuestionBank, answers: &AnswerSet) -> ScoringResult {
    let mut axis_score: BTreeMap<AxisKey, i32> =
        bank.axes.iter().map(|axis| (axis.key, 0)).collect();
    let mut axis_count: BTreeMap<AxisKey, u32> =
        bank.axes.iter().map(|axis| (axis.key, 0)).collect();

    for question in &bank.items {
        let Some(rating) = answers.get(question.id) else {
            continue;
        };
        let Some(axis) = bank.axis(question.axis) else {
            continue;
        };

        let centered = rating.centered();
        let delta = if question.dir == axis.left {
            centered
        } else {
            -centered
        };

        *axis_score.entry(axis.key).or_default() += delta;
        *axis_count.entry(axis.key).or_default() += 1;
    }

    // Ties resolve to the left letter.
    let code = bank
        .axes
        .iter()
        .map(|axis| {
            if axis_score.get(&axis.key).copied().unwrap_or(0) >= 0 {
                axis.left
            } else {
                axis.right
            }
        })
        .collect();

    ScoringResult {
        code,
        axis_score,
        axis_count,
    }
}

pub fn normalize(
    axis_score: &BTreeMap<AxisKey, i32>,
    axis_count: &BTreeMap<AxisKey, u32>,
) -> NormalizedResult {
    let positions = axis_score
        .iter()
        .map(|(axis, score)| {
            let count = axis_count.get(axis).copied().unwrap_or(0);
            let max_abs = if count == 0 {
                1.0
            } else {
                f64::from(count) * 2.0
            };
            (*axis, (f64::from(*score) + max_abs) / (2.0 * max_abs))
        })
        .collect();
    NormalizedResult(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{AxisDef, Question, ScalePoint};

    fn axis(key: AxisKey, left: char, right: char) -> AxisDef {
        AxisDef {
            key,
            left,
            right,
            title: key.to_string(),
        }
    }

    fn question(id: u32, axis: AxisKey, dir: char) -> Question {
        Question {
            id,
            text: format!("q{id}"),
            axis,
            dir,
        }
    }

    fn bank_with(items: Vec<Question>) -> QuestionBank {
        QuestionBank {
            scale: (1..=5)
                .map(|value| ScalePoint {
                    value,
                    label: value.to_string(),
                })
                .collect(),
            axes: vec![
                axis(AxisKey::EI, 'E', 'I'),
                axis(AxisKey::SN, 'S', 'N'),
                axis(AxisKey::TF, 'T', 'F'),
                axis(AxisKey::JP, 'J', 'P'),
            ],
            items,
        }
    }

    fn rated(pairs: &[(u32, u8)]) -> AnswerSet {
        pairs
            .iter()
            .map(|(id, value)| (*id, Rating::new(*value).unwrap()))
            .collect()
    }

    #[test]
    fn worked_example_two_questions_on_one_axis() {
        let bank = bank_with(vec![
            question(1, AxisKey::EI, 'E'),
            question(2, AxisKey::EI, 'I'),
        ]);
        let result = score(&bank, &rated(&[(1, 5), (2, 1)]));

        assert_eq!(result.axis_score[&AxisKey::EI], 4);
        assert_eq!(result.axis_count[&AxisKey::EI], 2);
        assert_eq!(result.normalized().get(AxisKey::EI), 1.0);
        assert!(result.code.starts_with('E'));
    }

    #[test]
    fn empty_answers_yield_left_letters_and_midpoints() {
        let bank = bank_with(vec![question(1, AxisKey::TF, 'F')]);
        let result = score(&bank, &AnswerSet::new());

        assert_eq!(result.code, "ESTJ");
        for (_, value) in result.normalized().iter() {
            assert_eq!(value, NEUTRAL_POSITION);
        }
    }

    #[test]
    fn negative_score_selects_right_letter() {
        let bank = bank_with(vec![question(1, AxisKey::JP, 'P')]);
        let result = score(&bank, &rated(&[(1, 4)]));

        assert_eq!(result.axis_score[&AxisKey::JP], -1);
        assert_eq!(result.code, "ESTP");
        assert_eq!(result.normalized().get(AxisKey::JP), 0.25);
    }

    #[test]
    fn tie_resolves_to_left_letter() {
        let bank = bank_with(vec![
            question(1, AxisKey::SN, 'S'),
            question(2, AxisKey::SN, 'N'),
        ]);
        let result = score(&bank, &rated(&[(1, 5), (2, 5)]));

        assert_eq!(result.axis_score[&AxisKey::SN], 0);
        assert_eq!(result.code.chars().nth(1), Some('S'));
        assert_eq!(result.normalized().get(AxisKey::SN), 0.5);
    }

    #[test]
    fn answers_for_unknown_ids_are_ignored() {
        let bank = bank_with(vec![question(1, AxisKey::EI, 'E')]);
        let result = score(&bank, &rated(&[(99, 1)]));

        assert_eq!(result.axis_count[&AxisKey::EI], 0);
        assert_eq!(result.code, "ESTJ");
    }

    #[test]
    fn normalize_treats_missing_count_as_zero() {
        let scores = BTreeMap::from([(AxisKey::EI, 0)]);
        let normalized = normalize(&scores, &BTreeMap::new());
        assert_eq!(normalized.get(AxisKey::EI), 0.5);
    }

    #[test]
    fn normalized_lookup_defaults_to_midpoint() {
        assert_eq!(NormalizedResult::default().get(AxisKey::TF), NEUTRAL_POSITION);
    }
}
