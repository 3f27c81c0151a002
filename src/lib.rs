pub mod config;
pub mod error;
pub mod greeting;
pub mod routes;
pub mod server;
pub mod state;
