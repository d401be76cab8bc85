pub mod commands;
pub mod gist;
pub mod logging;
pub mod profile;
