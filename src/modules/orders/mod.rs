pub mod dtos;
pub mod entities;
pub mod handlers;
pub mod numbers;
pub mod router;
pub mod service;
