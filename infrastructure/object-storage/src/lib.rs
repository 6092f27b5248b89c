pub mod client;
pub mod file_source;
pub mod image_storage;
