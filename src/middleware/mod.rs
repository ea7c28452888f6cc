pub mod auth;

pub use auth::{auth_middleware, page_auth_middleware, Caller};
