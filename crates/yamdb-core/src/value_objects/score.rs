//! Review score - an integer in 1..=10

use serde::Serialize;

use crate::error::DomainError;

/// Score given by a review, always within [`Score::MIN`]..=[`Score::MAX`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Score(i32);

impl Score {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 10;

    /// Create a score, rejecting values outside the allowed range
    pub fn new(value: i32) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::ScoreOutOfRange(value))
        }
    }

    /// Get the raw value
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Score {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for i32 {
    fn from(score: Score) -> Self {
        score.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_accepted() {
        assert_eq!(Score::new(1).unwrap().get(), 1);
        assert_eq!(Score::new(10).unwrap().get(), 10);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(Score::new(0), Err(DomainError::ScoreOutOfRange(0))));
        assert!(matches!(Score::new(11), Err(DomainError::ScoreOutOfRange(11))));
        assert!(Score::new(-3).is_err());
    }
}
