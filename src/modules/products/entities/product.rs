use crate::modules::brands::entities::brand;
use crate::modules::categories::entities::category;
use crate::modules::products::entities::product_image;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub sku: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// URL of the primary image.
    #[serde(rename = "imgUrl")]
    pub img_url: Option<String>,
    pub price: f64,
    pub cost: Option<f64>,
    pub discount: Option<f64>,
    pub category_id: i32,
    pub brand_id: Option<i32>,
    pub stock: i32,
    pub weight: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub dimensions: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub features: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub specifications: Option<String>,
    pub status: String,
    pub meta_title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub meta_description: Option<String>,
    pub is_featured: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub compatible_makes: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub compatible_models: Option<String>,
    #[serde(skip_deserializing)]
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "category::Entity",
        from = "Column::CategoryId",
        to = "category::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Category,
    #[sea_orm(
        belongs_to = "brand::Entity",
        from = "Column::BrandId",
        to = "brand::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Brand,
    #[sea_orm(has_many = "product_image::Entity")]
    Images,
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brand.def()
    }
}

impl Related<product_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
