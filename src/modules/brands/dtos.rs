use sea_orm::Set;
use serde::Deserialize;

use super::entities::brand;
use crate::shared::error::AppResult;
use crate::shared::validation::{non_empty, non_empty_opt};

#[derive(Debug, Deserialize)]
pub struct CreateBrandRequest {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub country_of_origin: Option<String>,
    pub year_established: Option<i32>,
}

impl CreateBrandRequest {
    pub fn validate(&self) -> AppResult<()> {
        non_empty("name", &self.name)?;
        non_empty("slug", &self.slug)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateBrandRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub country_of_origin: Option<String>,
    pub year_established: Option<i32>,
}

impl UpdateBrandRequest {
    pub fn validate(&self) -> AppResult<()> {
        non_empty_opt("name", self.name.as_ref())?;
        non_empty_opt("slug", self.slug.as_ref())
    }

    pub fn apply(self, brand: &mut brand::ActiveModel) {
        if let Some(v) = self.name {
            brand.name = Set(v);
        }
        if let Some(v) = self.slug {
            brand.slug = Set(v);
        }
        if let Some(v) = self.description {
            brand.description = Set(Some(v));
        }
        if let Some(v) = self.logo_url {
            brand.logo_url = Set(Some(v));
        }
        if let Some(v) = self.website {
            brand.website = Set(Some(v));
        }
        if let Some(v) = self.country_of_origin {
            brand.country_of_origin = Set(Some(v));
        }
        if let Some(v) = self.year_established {
            brand.year_established = Set(Some(v));
        }
    }
}
