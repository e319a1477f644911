pub mod build;
pub mod preview;
pub mod validate;
