// Library exports for integration tests and external use

pub mod config;
pub mod services;
pub mod types;
pub mod errors;
pub mod stores;
pub mod bootstrap;
pub mod api;
