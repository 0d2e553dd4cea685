pub mod routes;
pub mod utils;
pub mod configuration;
pub mod startup;
pub mod telemetry;
