// src/models/review.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single user-submitted evaluation of a professor/course pair.
/// Owned by the review API; this crate only displays, filters, and
/// requests deletion/editing by id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,          // opaque unique identifier
    pub user: String,        // author name, hidden when anon is set
    pub anon: bool,
    pub course_id: String,
    pub professor: String,
    pub usefulness: u8,      // conventionally 1-5, not enforced here
    pub difficulty: u8,
    pub rating: u8,
    pub review: Option<String>, // free-text comment
    pub date: NaiveDate,
}

impl Review {
    /// Name shown on the card: the author, or "Anonymous".
    pub fn display_name(&self) -> &str {
        if self.anon {
            "Anonymous"
        } else {
            &self.user
        }
    }

    /// Case-insensitive substring match against every searchable field.
    /// `term` must already be trimmed and lowercased; the empty term is
    /// handled by the caller before matching (it means "show everything").
    pub fn matches_search(&self, term: &str) -> bool {
        (self.anon && "anonymous".contains(term))
            || (!self.anon && self.user.to_lowercase().contains(term))
            || self.professor.to_lowercase().contains(term)
            || self.course_id.to_lowercase().contains(term)
            || self.usefulness.to_string().contains(term)
            || self.difficulty.to_string().contains(term)
            || self.rating.to_string().contains(term)
            || self
                .review
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .contains(term)
    }
}

/// Everything the delete-confirmation flow needs to identify a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub id: String,
    pub professor: String,
    pub course_id: String,
}

impl DeleteRequest {
    pub fn for_review(review: &Review) -> Self {
        Self {
            id: review.id.clone(),
            professor: review.professor.clone(),
            course_id: review.course_id.clone(),
        }
    }
}
