pub mod config;
pub mod domain;
pub mod logic;
pub mod router;
pub mod server;
pub mod telemetry;
