pub mod converters;
pub mod extension;
pub mod logger;
