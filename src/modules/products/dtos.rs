use sea_orm::Set;
use serde::{Deserialize, Serialize};

use super::entities::product;
use crate::shared::error::{AppError, AppResult};
use crate::shared::validation::{non_empty, non_empty_opt};

pub const DEFAULT_STATUS: &str = "Active";

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub sku: String,
    pub description: String,
    pub price: f64,
    pub category_id: i32,
    pub brand_id: Option<i32>,
    pub cost: Option<f64>,
    pub discount: Option<f64>,
    #[serde(default)]
    pub stock: i32,
    pub weight: Option<f64>,
    pub dimensions: Option<String>,
    pub features: Option<String>,
    pub specifications: Option<String>,
    pub status: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub compatible_makes: Option<String>,
    pub compatible_models: Option<String>,
}

impl CreateProductRequest {
    pub fn validate(&self) -> AppResult<()> {
        non_empty("name", &self.name)?;
        non_empty("sku", &self.sku)?;
        non_empty("description", &self.description)?;
        validate_amounts(Some(self.price), Some(self.stock))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<i32>,
    pub brand_id: Option<i32>,
    pub cost: Option<f64>,
    pub discount: Option<f64>,
    pub stock: Option<i32>,
    pub weight: Option<f64>,
    pub dimensions: Option<String>,
    pub features: Option<String>,
    pub specifications: Option<String>,
    pub status: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub is_featured: Option<bool>,
    pub compatible_makes: Option<String>,
    pub compatible_models: Option<String>,
}

impl UpdateProductRequest {
    pub fn validate(&self) -> AppResult<()> {
        non_empty_opt("name", self.name.as_ref())?;
        non_empty_opt("sku", self.sku.as_ref())?;
        validate_amounts(self.price, self.stock)
    }

    pub fn apply(self, product: &mut product::ActiveModel) {
        if let Some(v) = self.name {
            product.name = Set(v);
        }
        if let Some(v) = self.sku {
            product.sku = Set(v);
        }
        if let Some(v) = self.description {
            product.description = Set(v);
        }
        if let Some(v) = self.price {
            product.price = Set(v);
        }
        if let Some(v) = self.category_id {
            product.category_id = Set(v);
        }
        if let Some(v) = self.brand_id {
            product.brand_id = Set(Some(v));
        }
        if let Some(v) = self.cost {
            product.cost = Set(Some(v));
        }
        if let Some(v) = self.discount {
            product.discount = Set(Some(v));
        }
        if let Some(v) = self.stock {
            product.stock = Set(v);
        }
        if let Some(v) = self.weight {
            product.weight = Set(Some(v));
        }
        if let Some(v) = self.dimensions {
            product.dimensions = Set(Some(v));
        }
        if let Some(v) = self.features {
            product.features = Set(Some(v));
        }
        if let Some(v) = self.specifications {
            product.specifications = Set(Some(v));
        }
        if let Some(v) = self.status {
            product.status = Set(v);
        }
        if let Some(v) = self.meta_title {
            product.meta_title = Set(Some(v));
        }
        if let Some(v) = self.meta_description {
            product.meta_description = Set(Some(v));
        }
        if let Some(v) = self.is_featured {
            product.is_featured = Set(v);
        }
        if let Some(v) = self.compatible_makes {
            product.compatible_makes = Set(Some(v));
        }
        if let Some(v) = self.compatible_models {
            product.compatible_models = Set(Some(v));
        }
    }
}

fn validate_amounts(price: Option<f64>, stock: Option<i32>) -> AppResult<()> {
    if matches!(price, Some(p) if !p.is_finite() || p < 0.0) {
        return Err(AppError::Validation("Price must be a non-negative number".to_string()));
    }
    if matches!(stock, Some(s) if s < 0) {
        return Err(AppError::Validation("Stock cannot be negative".to_string()));
    }
    Ok(())
}

/// Single-product view: the row plus its image URLs, primary first.
#[derive(Debug, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: product::Model,
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_stock_and_price_rejected() {
        let update = UpdateProductRequest {
            stock: Some(-1),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let update = UpdateProductRequest {
            price: Some(-0.5),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        assert!(UpdateProductRequest::default().validate().is_ok());
    }
}
