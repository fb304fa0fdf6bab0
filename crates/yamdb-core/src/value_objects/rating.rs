//! Title rating - derived from review scores, never stored

use serde::Serialize;

use super::Score;

/// Arithmetic mean of a title's review scores
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    /// Compute the mean of the given scores, or `None` when there are none
    pub fn from_scores<I>(scores: I) -> Option<Self>
    where
        I: IntoIterator<Item = Score>,
    {
        let (sum, count) = scores
            .into_iter()
            .fold((0i64, 0i64), |(sum, count), s| (sum + i64::from(s.get()), count + 1));

        if count == 0 {
            None
        } else {
            Some(Self(sum as f64 / count as f64))
        }
    }

    /// Wrap an average computed by the storage layer
    pub fn from_average(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: &[i32]) -> Vec<Score> {
        values.iter().map(|&v| Score::new(v).unwrap()).collect()
    }

    #[test]
    fn test_no_scores_has_no_rating() {
        assert_eq!(Rating::from_scores(Vec::new()), None);
    }

    #[test]
    fn test_single_score() {
        let rating = Rating::from_scores(scores(&[7])).unwrap();
        assert!((rating.value() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean_is_not_truncated() {
        let rating = Rating::from_scores(scores(&[10, 9, 4])).unwrap();
        assert!((rating.value() - 23.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_serializes_as_number() {
        let rating = Rating::from_scores(scores(&[1, 2])).unwrap();
        assert_eq!(serde_json::to_string(&rating).unwrap(), "1.5");
    }
}
