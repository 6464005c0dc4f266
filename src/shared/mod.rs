pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod pagination;
pub mod state;
pub mod transaction;
pub mod validation;
