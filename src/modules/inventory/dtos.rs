use serde::Deserialize;

use super::entities::inventory_log::ChangeType;
use crate::shared::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct CreateInventoryLogRequest {
    pub product_id: i32,
    /// Signed delta applied to the product's stock.
    pub quantity_change: i32,
    pub change_type: ChangeType,
    pub reference_id: Option<String>,
    pub notes: Option<String>,
    /// Defaults to the authenticated caller.
    pub created_by: Option<i32>,
}

impl CreateInventoryLogRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.quantity_change == 0 {
            return Err(AppError::Validation(
                "quantity_change must not be zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct InventoryLogFilter {
    pub product_id: Option<i32>,
}

/// Stock after applying `delta`, or `None` when it would go below zero.
pub fn next_stock(current: i32, delta: i32) -> Option<i32> {
    current.checked_add(delta).filter(|stock| *stock >= 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_stock() {
        assert_eq!(next_stock(5, 3), Some(8));
        assert_eq!(next_stock(5, -5), Some(0));
        assert_eq!(next_stock(5, -6), None);
        assert_eq!(next_stock(i32::MAX, 1), None);
    }

    #[test]
    fn test_change_type_wire_format() {
        let parsed: ChangeType = serde_json::from_str("\"return\"").unwrap();
        assert_eq!(parsed, ChangeType::Return);
        assert!(serde_json::from_str::<ChangeType>("\"theft\"").is_err());
    }
}
