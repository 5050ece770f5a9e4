use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single Likert response, guaranteed to lie on the 1..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Self = Self(1);
    pub const NEUTRAL: Self = Self(3);
    pub const MAX: Self = Self(5);

    pub fn new(value: u8) -> Result<Self, SessionError> {
        Self::try_from(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Shift so the neutral midpoint is zero: -2..=2.
    pub fn centered(self) -> i32 {
        i32::from(self.0) - i32::from(Self::NEUTRAL.0)
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }
}

impl TryFrom<u8> for Rating {
    type Error = SessionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SessionError::InvalidRating(value))
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Question id → rating. Serializes as a flat JSON object (`{"1":5,"2":3}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<u32, Rating>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: u32) -> Option<Rating> {
        self.0.get(&id).copied()
    }

    /// Copy of this set with `id` answered as `rating`.
    pub fn with_answer(&self, id: u32, rating: Rating) -> Self {
        let mut next = self.0.clone();
        next.insert(id, rating);
        Self(next)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u32, Rating)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (u32, Rating)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_rejects_values_off_scale() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert_eq!(Rating::new(4).unwrap().value(), 4);
    }

    #[test]
    fn centered_maps_neutral_to_zero() {
        let centered: Vec<i32> = Rating::all().map(Rating::centered).collect();
        assert_eq!(centered, [-2, -1, 0, 1, 2]);
    }

    #[test]
    fn answer_set_serializes_with_string_keys() {
        let answers: AnswerSet = [(1, Rating::MAX), (12, Rating::NEUTRAL)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"1":5,"12":3}"#);
    }

    #[test]
    fn answer_set_parse_rejects_out_of_range_rating() {
        let parsed: Result<AnswerSet, _> = serde_json::from_str(r#"{"1":9}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn with_answer_leaves_original_untouched() {
        let original = AnswerSet::new().with_answer(1, Rating::MIN);
        let next = original.with_answer(1, Rating::MAX);
        assert_eq!(original.get(1), Some(Rating::MIN));
        assert_eq!(next.get(1), Some(Rating::MAX));
        assert_eq!(next.len(), 1);
    }
}
