pub mod admin_middleware;

pub use admin_middleware::require_admin;
