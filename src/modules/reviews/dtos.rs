use sea_orm::Set;
use serde::Deserialize;

use super::entities::review;
use crate::shared::error::{AppError, AppResult};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

fn check_rating(rating: i32) -> AppResult<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::Validation(format!(
            "Rating must be between {} and {}",
            MIN_RATING, MAX_RATING
        )));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub product_id: i32,
    pub customer_id: Option<i32>,
    pub rating: i32,
    pub comment: Option<String>,
    #[serde(default)]
    pub is_approved: bool,
}

impl CreateReviewRequest {
    pub fn validate(&self) -> AppResult<()> {
        check_rating(self.rating)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateReviewRequest {
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub is_approved: Option<bool>,
}

impl UpdateReviewRequest {
    pub fn validate(&self) -> AppResult<()> {
        match self.rating {
            Some(rating) => check_rating(rating),
            None => Ok(()),
        }
    }

    pub fn apply(self, review: &mut review::ActiveModel) {
        if let Some(v) = self.rating {
            review.rating = Set(v);
        }
        if let Some(v) = self.comment {
            review.comment = Set(Some(v));
        }
        if let Some(v) = self.is_approved {
            review.is_approved = Set(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        for rating in [1, 3, 5] {
            assert!(check_rating(rating).is_ok());
        }
        for rating in [0, 6, -2] {
            assert!(check_rating(rating).is_err());
        }
        assert!(UpdateReviewRequest::default().validate().is_ok());
    }
}
