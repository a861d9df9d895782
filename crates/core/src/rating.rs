//! Peer rating arithmetic and top-project ranking.
//!
//! A project carries a denormalized aggregate `{count, total, average}`
//! which must be updated in lockstep with the rating rows it summarizes.
//! [`RatingAggregate::apply`] is the only write path for that aggregate.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::CoreError;

/// Lowest accepted star rating.
pub const MIN_SCORE: i32 = 1;

/// Highest accepted star rating.
pub const MAX_SCORE: i32 = 5;

/// Number of projects returned by the top-rated listing when no limit is given.
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// A validated 1-5 star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "i16")]
pub struct Score(i16);

impl Score {
    /// Validate a raw score. Anything outside `[1, 5]` is rejected.
    pub fn new(raw: i32) -> Result<Self, CoreError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&raw) {
            return Err(CoreError::Validation(format!(
                "Rating must be between {MIN_SCORE} and {MAX_SCORE}"
            )));
        }
        Ok(Score(raw as i16))
    }

    pub fn value(self) -> i16 {
        self.0
    }
}

impl From<Score> for i16 {
    fn from(value: Score) -> Self {
        value.0
    }
}

impl TryFrom<i16> for Score {
    type Error = CoreError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Score::new(i32::from(value))
    }
}

/// Round to one decimal place, halves away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Per-project running statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingAggregate {
    pub count: i32,
    pub total: i32,
    pub average: f64,
}

impl RatingAggregate {
    /// The aggregate of a project nobody has rated.
    pub const EMPTY: RatingAggregate = RatingAggregate {
        count: 0,
        total: 0,
        average: 0.0,
    };

    /// Build an aggregate from count and total, deriving the average.
    pub fn from_parts(count: i32, total: i32) -> Self {
        Self {
            count,
            total,
            average: average_of(total, count),
        }
    }

    /// Fold one rater's submission into the aggregate.
    ///
    /// `previous` is the rater's currently stored score for this project,
    /// if any. A revision swaps the old score for the new one and leaves the
    /// count alone; a first rating increments the count.
    pub fn apply(self, previous: Option<Score>, score: Score) -> Self {
        let score = i32::from(score.value());
        match previous {
            Some(old) => {
                let total = self.total - i32::from(old.value()) + score;
                Self::from_parts(self.count, total)
            }
            None => Self::from_parts(self.count + 1, self.total + score),
        }
    }

    /// `average == round(total / count, 1)` when rated; all zero otherwise.
    pub fn is_consistent(&self) -> bool {
        if self.count < 0 {
            return false;
        }
        if self.count == 0 {
            return self.total == 0 && self.average == 0.0;
        }
        self.average == average_of(self.total, self.count)
    }
}

fn average_of(total: i32, count: i32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round_to_tenth(f64::from(total) / f64::from(count))
}

/// Anything that can be placed on the top-rated board.
pub trait Rated {
    fn rating_count(&self) -> i32;
    fn average_rating(&self) -> f64;
}

/// Order for the top-rated board: higher average first, then more ratings.
pub fn compare_ranked<T: Rated>(a: &T, b: &T) -> Ordering {
    b.average_rating()
        .total_cmp(&a.average_rating())
        .then_with(|| b.rating_count().cmp(&a.rating_count()))
}

/// Select the best-rated items.
///
/// Unrated items are dropped. The sort is stable, so exact ties keep the
/// order in which `items` were supplied.
pub fn rank_top<T: Rated>(items: Vec<T>, limit: usize) -> Vec<T> {
    let mut rated: Vec<T> = items
        .into_iter()
        .filter(|item| item.rating_count() > 0)
        .collect();
    rated.sort_by(compare_ranked);
    rated.truncate(limit);
    rated
}
