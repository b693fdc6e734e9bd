pub mod config;
pub mod error;
pub mod pricing;
pub mod risk;
pub mod telemetry;
