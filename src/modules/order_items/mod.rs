pub mod dtos;
pub mod handlers;
pub mod router;
pub mod service;
