pub mod operations;
pub mod token;

pub use operations::{set_access_token, with_access_token};
pub use token::{validate_token, NEW_TOKEN_URL, TOKEN_PREFIX, TOKEN_SECRET_KEY};
