pub mod adapter;
pub mod factory;
pub mod pixel_format;
pub mod presenter;
