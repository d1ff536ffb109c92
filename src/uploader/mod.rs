pub mod image_service;
pub mod object_store;
