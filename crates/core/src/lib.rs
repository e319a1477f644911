pub mod config;
pub mod content;
pub mod error;
pub mod state;
pub mod types;

pub use config::parse_site_toml;
pub use error::{Error, Result};
pub use types::*;
