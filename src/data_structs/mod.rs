pub mod annotation;
pub mod manifest;
pub mod matrix;
