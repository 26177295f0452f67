//! Customer reviews curated for display

use serde::Deserialize;

use crate::validation::{non_blank, required, ValidationError};

const MIN_RATING: i64 = 1;
const MAX_RATING: i64 = 5;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestimonialDraft {
    pub name: Option<String>,
    pub rating: Option<i64>,
    pub review_text: Option<String>,
    pub google_account_url: Option<String>,
    pub google_place_id: Option<String>,
    pub is_selected: Option<bool>,
    pub display_order: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestimonial {
    pub name: String,
    pub rating: i64,
    pub review_text: String,
    pub google_account_url: Option<String>,
    pub google_place_id: Option<String>,
    pub is_selected: bool,
    pub display_order: i64,
}

impl TestimonialDraft {
    /// Rating defaults to 5 and must stay within 1..=5.
    pub fn normalize(self) -> Result<NewTestimonial, ValidationError> {
        let rating = self.rating.unwrap_or(MAX_RATING);
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ValidationError::OutOfRange {
                field: "rating",
                min: MIN_RATING,
                max: MAX_RATING,
            });
        }

        Ok(NewTestimonial {
            name: required(self.name, "name")?,
            rating,
            review_text: required(self.review_text, "review_text")?,
            google_account_url: non_blank(self.google_account_url),
            google_place_id: non_blank(self.google_place_id),
            is_selected: self.is_selected.unwrap_or(false),
            display_order: self.display_order.unwrap_or(0),
        })
    }
}
