pub mod dtos;
pub mod entities;
pub mod handlers;
pub mod router;
pub mod service;

pub const USER: &str = "user";
pub const MANAGER: &str = "manager";
pub const ADMIN: &str = "admin";
pub const SUPER_ADMIN: &str = "super_admin";

/// Roles seeded at startup, lowest privilege first.
pub const DEFAULT_ROLES: [(&str, i32); 4] = [(USER, 1), (MANAGER, 2), (ADMIN, 3), (SUPER_ADMIN, 4)];
