pub mod config;
pub mod error;
pub mod logging;
pub mod message;
pub mod prompt;
pub mod routes;
pub mod rules;
pub mod serverless;
pub mod services;
pub mod state;
