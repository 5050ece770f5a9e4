use crate::bank::{AxisKey, QuestionBank, TypeCatalog};
use crate::scoring::ScoringResult;
use serde::Serialize;

/// Everything the result view shows, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub code: String,
    pub title: String,
    pub summary: String,
    pub tip: String,
    pub placeholder: bool,
    pub axes: Vec<AxisReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisReport {
    pub key: AxisKey,
    pub title: String,
    pub left: char,
    pub right: char,
    pub letter: char,
    pub score: i32,
    pub count: u32,
    /// 1.0 is fully toward `left`, 0.0 fully toward `right`.
    pub position: f64,
}

impl ResultReport {
    pub fn build(
        bank: &QuestionBank,
        catalog: &TypeCatalog,
        result: &ScoringResult,
        nickname: Option<&str>,
    ) -> Self {
        let normalized = result.normalized();
        let descriptor = catalog.lookup(&result.code);

        let axes = bank
            .axes
            .iter()
            .map(|axis| {
                let score = result.axis_score.get(&axis.key).copied().unwrap_or(0);
                AxisReport {
                    key: axis.key,
                    title: axis.title.clone(),
                    left: axis.left,
                    right: axis.right,
                    letter: if score >= 0 { axis.left } else { axis.right },
                    score,
                    count: result.axis_count.get(&axis.key).copied().unwrap_or(0),
                    position: normalized.get(axis.key),
                }
            })
            .collect();

        Self {
            nickname: nickname.map(str::to_string),
            code: result.code.clone(),
            title: descriptor.title().to_string(),
            summary: descriptor.summary().to_string(),
            tip: descriptor.tip().to_string(),
            placeholder: descriptor.is_placeholder(),
            axes,
        }
    }

    pub fn heading(&self) -> String {
        match &self.nickname {
            Some(name) => format!("{name}'s result: {} - {}", self.code, self.title),
            None => format!("Result: {} - {}", self.code, self.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{self, AnswerSet, Rating};

    fn all_toward_right(bank: &QuestionBank) -> AnswerSet {
        bank.items
            .iter()
            .map(|q| {
                let axis = bank.axis(q.axis).unwrap();
                let rating = if q.dir == axis.right {
                    Rating::MAX
                } else {
                    Rating::MIN
                };
                (q.id, rating)
            })
            .collect()
    }

    #[test]
    fn report_mirrors_scoring_result() {
        let bank = QuestionBank::builtin().unwrap();
        let catalog = TypeCatalog::builtin().unwrap();
        let result = scoring::score(&bank, &all_toward_right(&bank));

        let report = ResultReport::build(&bank, &catalog, &result, None);

        assert_eq!(report.code, "INFP");
        assert!(!report.placeholder);
        assert_eq!(report.title, catalog.lookup("INFP").title());
        let letters: String = report.axes.iter().map(|a| a.letter).collect();
        assert_eq!(letters, report.code);
        assert!(report.axes.iter().all(|a| a.position == 0.0 && a.count == 10));
    }

    #[test]
    fn heading_includes_nickname_when_given() {
        let bank = QuestionBank::builtin().unwrap();
        let catalog = TypeCatalog::builtin().unwrap();
        let result = scoring::score(&bank, &AnswerSet::new());

        let anonymous = ResultReport::build(&bank, &catalog, &result, None);
        let named = ResultReport::build(&bank, &catalog, &result, Some("Jordan"));

        assert!(anonymous.heading().starts_with("Result: ESTJ"));
        assert!(named.heading().starts_with("Jordan's result: ESTJ"));
    }

    #[test]
    fn json_omits_missing_nickname() {
        let bank = QuestionBank::builtin().unwrap();
        let result = scoring::score(&bank, &AnswerSet::new());
        let report = ResultReport::build(&bank, &TypeCatalog::default(), &result, None);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("nickname").is_none());
        assert_eq!(json["placeholder"], true);
        assert_eq!(json["axes"][0]["key"], "EI");
        assert_eq!(json["axes"][0]["position"], 0.5);
    }
}
