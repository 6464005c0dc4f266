use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Categories Table (self-referencing tree)
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categories::Name).string().not_null())
                    .col(ColumnDef::new(Categories::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(Categories::Description).text())
                    .col(ColumnDef::new(Categories::ParentId).integer())
                    .col(ColumnDef::new(Categories::ImageUrl).string())
                    .col(
                        ColumnDef::new(Categories::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_categories_parent_id_categories")
                            .from(Categories::Table, Categories::ParentId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Brands Table
        manager
            .create_table(
                Table::create()
                    .table(Brands::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Brands::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Brands::Name).string().not_null())
                    .col(ColumnDef::new(Brands::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(Brands::Description).text())
                    .col(ColumnDef::new(Brands::LogoUrl).string())
                    .col(ColumnDef::new(Brands::Website).string())
                    .col(ColumnDef::new(Brands::CountryOfOrigin).string())
                    .col(ColumnDef::new(Brands::YearEstablished).integer())
                    .col(
                        ColumnDef::new(Brands::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Products Table
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Products::Name).string().not_null())
                    .col(ColumnDef::new(Products::Sku).string().not_null().unique_key())
                    .col(ColumnDef::new(Products::Description).text().not_null())
                    .col(ColumnDef::new(Products::ImgUrl).string())
                    .col(ColumnDef::new(Products::Price).double().not_null())
                    .col(ColumnDef::new(Products::Cost).double())
                    .col(ColumnDef::new(Products::Discount).double())
                    .col(ColumnDef::new(Products::CategoryId).integer().not_null())
                    .col(ColumnDef::new(Products::BrandId).integer())
                    .col(
                        ColumnDef::new(Products::Stock)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Products::Weight).double())
                    .col(ColumnDef::new(Products::Dimensions).text())
                    .col(ColumnDef::new(Products::Features).text())
                    .col(ColumnDef::new(Products::Specifications).text())
                    .col(
                        ColumnDef::new(Products::Status)
                            .string()
                            .not_null()
                            .default("Active"),
                    )
                    .col(ColumnDef::new(Products::MetaTitle).string())
                    .col(ColumnDef::new(Products::MetaDescription).text())
                    .col(
                        ColumnDef::new(Products::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Products::CompatibleMakes).text())
                    .col(ColumnDef::new(Products::CompatibleModels).text())
                    .col(
                        ColumnDef::new(Products::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_category_id_categories")
                            .from(Products::Table, Products::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_brand_id_brands")
                            .from(Products::Table, Products::BrandId)
                            .to(Brands::Table, Brands::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Product Images Table
        manager
            .create_table(
                Table::create()
                    .table(ProductImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductImages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProductImages::ProductId).integer().not_null())
                    .col(ColumnDef::new(ProductImages::Url).string().not_null())
                    .col(
                        ColumnDef::new(ProductImages::IsPrimary)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ProductImages::AltText).string())
                    .col(
                        ColumnDef::new(ProductImages::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_images_product_id_products")
                            .from(ProductImages::Table, ProductImages::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductImages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Brands::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
    Slug,
    Description,
    ParentId,
    ImageUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Brands {
    Table,
    Id,
    Name,
    Slug,
    Description,
    LogoUrl,
    Website,
    CountryOfOrigin,
    YearEstablished,
    CreatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Products {
    Table,
    Id,
    Name,
    Sku,
    Description,
    ImgUrl,
    Price,
    Cost,
    Discount,
    CategoryId,
    BrandId,
    Stock,
    Weight,
    Dimensions,
    Features,
    Specifications,
    Status,
    MetaTitle,
    MetaDescription,
    IsFeatured,
    CompatibleMakes,
    CompatibleModels,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ProductImages {
    Table,
    Id,
    ProductId,
    Url,
    IsPrimary,
    AltText,
    CreatedAt,
}
