use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_access_tables::Users;
use super::m20250301_000002_create_catalog_tables::Products;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Customers Table
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::FirstName).string().not_null())
                    .col(ColumnDef::new(Customers::LastName).string().not_null())
                    .col(ColumnDef::new(Customers::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Customers::Phone).string())
                    .col(ColumnDef::new(Customers::UserId).integer())
                    .col(
                        ColumnDef::new(Customers::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customers_user_id_users")
                            .from(Customers::Table, Customers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Addresses Table
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Addresses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Addresses::CustomerId).integer().not_null())
                    .col(ColumnDef::new(Addresses::SpecificAddress).text().not_null())
                    .col(ColumnDef::new(Addresses::County).string().not_null())
                    .col(ColumnDef::new(Addresses::AreaTown).string().not_null())
                    .col(ColumnDef::new(Addresses::CityTown).string().not_null())
                    .col(
                        ColumnDef::new(Addresses::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_addresses_customer_id_customers")
                            .from(Addresses::Table, Addresses::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup index for address de-duplication
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_addresses_identity")
                    .table(Addresses::Table)
                    .col(Addresses::CustomerId)
                    .col(Addresses::County)
                    .col(Addresses::AreaTown)
                    .col(Addresses::CityTown)
                    .to_owned(),
            )
            .await?;

        // Orders Table
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Orders::CustomerId).integer().not_null())
                    .col(ColumnDef::new(Orders::OrderNumber).string().not_null().unique_key())
                    .col(ColumnDef::new(Orders::Status).string().not_null())
                    .col(ColumnDef::new(Orders::TotalAmount).double().not_null())
                    .col(ColumnDef::new(Orders::ShippingAddressId).integer().not_null())
                    .col(ColumnDef::new(Orders::BillingAddressId).integer())
                    .col(
                        ColumnDef::new(Orders::PaymentMethod)
                            .string()
                            .not_null()
                            .default("mpesa"),
                    )
                    .col(ColumnDef::new(Orders::PaymentStatus).string().not_null())
                    .col(ColumnDef::new(Orders::ShippingMethod).string())
                    .col(ColumnDef::new(Orders::ShippingCost).double())
                    .col(ColumnDef::new(Orders::TaxAmount).double())
                    .col(ColumnDef::new(Orders::DiscountAmount).double())
                    .col(ColumnDef::new(Orders::Notes).text())
                    .col(ColumnDef::new(Orders::DeliveryCompany).string())
                    .col(
                        ColumnDef::new(Orders::TrackingNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Orders::DeliveryPerson).string())
                    .col(ColumnDef::new(Orders::EstimatedDeliveryDate).timestamp())
                    .col(
                        ColumnDef::new(Orders::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Orders::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_customer_id_customers")
                            .from(Orders::Table, Orders::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_shipping_address_id_addresses")
                            .from(Orders::Table, Orders::ShippingAddressId)
                            .to(Addresses::Table, Addresses::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_billing_address_id_addresses")
                            .from(Orders::Table, Orders::BillingAddressId)
                            .to(Addresses::Table, Addresses::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Order Items Table
        manager
            .create_table(
                Table::create()
                    .table(OrderItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrderItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OrderItems::OrderId).integer().not_null())
                    .col(ColumnDef::new(OrderItems::ProductId).integer().not_null())
                    .col(ColumnDef::new(OrderItems::Quantity).integer().not_null())
                    .col(ColumnDef::new(OrderItems::UnitPrice).double().not_null())
                    .col(ColumnDef::new(OrderItems::TotalPrice).double().not_null())
                    .col(
                        ColumnDef::new(OrderItems::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_items_order_id_orders")
                            .from(OrderItems::Table, OrderItems::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_items_product_id_products")
                            .from(OrderItems::Table, OrderItems::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Reviews Table
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::ProductId).integer().not_null())
                    .col(ColumnDef::new(Reviews::CustomerId).integer())
                    .col(ColumnDef::new(Reviews::Rating).integer().not_null())
                    .col(ColumnDef::new(Reviews::Comment).text())
                    .col(
                        ColumnDef::new(Reviews::IsApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Reviews::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_product_id_products")
                            .from(Reviews::Table, Reviews::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_customer_id_customers")
                            .from(Reviews::Table, Reviews::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Inventory Logs Table (append-only ledger)
        manager
            .create_table(
                Table::create()
                    .table(InventoryLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InventoryLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InventoryLogs::ProductId).integer().not_null())
                    .col(ColumnDef::new(InventoryLogs::QuantityChange).integer().not_null())
                    .col(ColumnDef::new(InventoryLogs::PreviousStock).integer().not_null())
                    .col(ColumnDef::new(InventoryLogs::NewStock).integer().not_null())
                    .col(ColumnDef::new(InventoryLogs::ChangeType).string().not_null())
                    .col(ColumnDef::new(InventoryLogs::ReferenceId).string())
                    .col(ColumnDef::new(InventoryLogs::Notes).text())
                    .col(ColumnDef::new(InventoryLogs::CreatedBy).integer())
                    .col(
                        ColumnDef::new(InventoryLogs::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_logs_product_id_products")
                            .from(InventoryLogs::Table, InventoryLogs::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventory_logs_created_by_users")
                            .from(InventoryLogs::Table, InventoryLogs::CreatedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(OrderItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Addresses {
    Table,
    Id,
    CustomerId,
    SpecificAddress,
    County,
    AreaTown,
    CityTown,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    CustomerId,
    OrderNumber,
    Status,
    TotalAmount,
    ShippingAddressId,
    BillingAddressId,
    PaymentMethod,
    PaymentStatus,
    ShippingMethod,
    ShippingCost,
    TaxAmount,
    DiscountAmount,
    Notes,
    DeliveryCompany,
    TrackingNumber,
    DeliveryPerson,
    EstimatedDeliveryDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum OrderItems {
    Table,
    Id,
    OrderId,
    ProductId,
    Quantity,
    UnitPrice,
    TotalPrice,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    ProductId,
    CustomerId,
    Rating,
    Comment,
    IsApproved,
    CreatedAt,
}

#[derive(DeriveIden)]
enum InventoryLogs {
    Table,
    Id,
    ProductId,
    QuantityChange,
    PreviousStock,
    NewStock,
    ChangeType,
    ReferenceId,
    Notes,
    CreatedBy,
    CreatedAt,
}
