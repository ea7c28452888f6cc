pub mod caller;
pub mod jwt;

pub use caller::{CallerContext, HasRole};
pub use jwt::verify_jwt;
