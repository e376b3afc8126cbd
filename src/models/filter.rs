// src/models/filter.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::review::Review;

/// A user-chosen (value, label) pair constraining one end of a score range.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RangeBound {
    pub value: u8,
    pub label: String,
}

impl RangeBound {
    pub fn new(value: u8) -> Self {
        Self {
            value,
            label: value.to_string(),
        }
    }
}

/// The three score dimensions a review is rated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Usefulness,
    Difficulty,
    Rating,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Usefulness, Metric::Difficulty, Metric::Rating];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Usefulness => "usefulness",
            Metric::Difficulty => "difficulty",
            Metric::Rating => "rating",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejected bound assignment; the message is surfaced to the user verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoundError {
    #[error("Cannot set minimum {0} greater than maximum {0}")]
    MinAboveMax(Metric),
    #[error("Cannot set maximum {0} less than minimum {0}")]
    MaxBelowMin(Metric),
}

/// The six live range bounds. Defaults to the full 1-5 range for every
/// metric; setters reject candidates that would cross the paired bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBounds {
    pub min_usefulness: RangeBound,
    pub max_usefulness: RangeBound,
    pub min_difficulty: RangeBound,
    pub max_difficulty: RangeBound,
    pub min_rating: RangeBound,
    pub max_rating: RangeBound,
}

impl Default for FilterBounds {
    fn default() -> Self {
        Self {
            min_usefulness: RangeBound::new(1),
            max_usefulness: RangeBound::new(5),
            min_difficulty: RangeBound::new(1),
            max_difficulty: RangeBound::new(5),
            min_rating: RangeBound::new(1),
            max_rating: RangeBound::new(5),
        }
    }
}

impl FilterBounds {
    pub fn min(&self, metric: Metric) -> &RangeBound {
        match metric {
            Metric::Usefulness => &self.min_usefulness,
            Metric::Difficulty => &self.min_difficulty,
            Metric::Rating => &self.min_rating,
        }
    }

    pub fn max(&self, metric: Metric) -> &RangeBound {
        match metric {
            Metric::Usefulness => &self.max_usefulness,
            Metric::Difficulty => &self.max_difficulty,
            Metric::Rating => &self.max_rating,
        }
    }

    /// Commit `candidate` as the new minimum for `metric`, unless it would
    /// exceed the current maximum. On rejection the bounds are unchanged.
    pub fn set_min(&mut self, metric: Metric, candidate: RangeBound) -> Result<(), BoundError> {
        if candidate.value > self.max(metric).value {
            return Err(BoundError::MinAboveMax(metric));
        }
        match metric {
            Metric::Usefulness => self.min_usefulness = candidate,
            Metric::Difficulty => self.min_difficulty = candidate,
            Metric::Rating => self.min_rating = candidate,
        }
        Ok(())
    }

    /// Commit `candidate` as the new maximum for `metric`, unless it would
    /// fall below the current minimum.
    pub fn set_max(&mut self, metric: Metric, candidate: RangeBound) -> Result<(), BoundError> {
        if candidate.value < self.min(metric).value {
            return Err(BoundError::MaxBelowMin(metric));
        }
        match metric {
            Metric::Usefulness => self.max_usefulness = candidate,
            Metric::Difficulty => self.max_difficulty = candidate,
            Metric::Rating => self.max_rating = candidate,
        }
        Ok(())
    }

    pub fn contains(&self, review: &Review) -> bool {
        review.usefulness >= self.min_usefulness.value
            && review.usefulness <= self.max_usefulness.value
            && review.difficulty >= self.min_difficulty.value
            && review.difficulty <= self.max_difficulty.value
            && review.rating >= self.min_rating.value
            && review.rating <= self.max_rating.value
    }

    /// Only reachable through stale bound updates; the setters reject
    /// direct edits that would cross. The recompute effect skips this state
    /// and keeps the previously filtered list.
    pub fn rating_inverted(&self) -> bool {
        self.min_rating.value > self.max_rating.value
    }
}

/// Stable range filter: every review within all three ranges, input order
/// preserved.
pub fn range_filtered(reviews: &[Review], bounds: &FilterBounds) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| bounds.contains(review))
        .cloned()
        .collect()
}

/// Search filter over every displayable field. `term` must already be
/// trimmed and lowercased.
pub fn search_filtered(reviews: &[Review], term: &str) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| review.matches_search(term))
        .cloned()
        .collect()
}
