pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
