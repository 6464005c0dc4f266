pub mod addresses;
pub mod auth;
pub mod brands;
pub mod categories;
pub mod customers;
pub mod inventory;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod roles;
pub mod users;
