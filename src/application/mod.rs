pub mod config;
pub mod errors;
pub mod routes;
pub mod server;
pub mod services;
pub mod state;

pub use config::{ApiKey, ServerConfig};
pub use server::serve;
