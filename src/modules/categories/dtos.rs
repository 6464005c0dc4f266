use sea_orm::Set;
use serde::{Deserialize, Serialize};

use super::entities::category;
use crate::shared::error::AppResult;
use crate::shared::validation::{non_empty, non_empty_opt};

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_id: Option<i32>,
    pub image_url: Option<String>,
}

impl CreateCategoryRequest {
    pub fn validate(&self) -> AppResult<()> {
        non_empty("name", &self.name)?;
        non_empty("slug", &self.slug)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub parent_id: Option<i32>,
    pub image_url: Option<String>,
}

impl UpdateCategoryRequest {
    pub fn validate(&self) -> AppResult<()> {
        non_empty_opt("name", self.name.as_ref())?;
        non_empty_opt("slug", self.slug.as_ref())
    }

    pub fn apply(self, category: &mut category::ActiveModel) {
        if let Some(v) = self.name {
            category.name = Set(v);
        }
        if let Some(v) = self.slug {
            category.slug = Set(v);
        }
        if let Some(v) = self.description {
            category.description = Set(Some(v));
        }
        if let Some(v) = self.parent_id {
            category.parent_id = Set(Some(v));
        }
        if let Some(v) = self.image_url {
            category.image_url = Set(Some(v));
        }
    }
}

/// A category with its direct children.
#[derive(Debug, Serialize)]
pub struct CategoryTree {
    #[serde(flatten)]
    pub category: category::Model,
    pub subcategories: Vec<category::Model>,
}
