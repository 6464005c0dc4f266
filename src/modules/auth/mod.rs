pub mod dtos;
pub mod extractors;
pub mod handlers;
pub mod password;
pub mod revocation;
pub mod router;
pub mod service;
