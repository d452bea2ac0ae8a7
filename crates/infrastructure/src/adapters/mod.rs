//! Adapters implementing application ports

mod document_format;
mod file_config_source;

pub use document_format::DocumentFormat;
pub use file_config_source::FileConfigSource;
