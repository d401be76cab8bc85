pub mod error;
pub mod operations;
pub mod types;
pub mod validation;

pub use error::GistError;
pub use operations::create_gist;
pub use types::{CreatedGist, GistFile, NewGist, Visibility};
pub use validation::{base_name, validate_description, validate_file_name};
