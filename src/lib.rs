pub mod configuration;
pub mod domain;
pub mod error;
pub mod lookup;
pub mod page;
pub mod routes;
pub mod startup;
pub mod telemetry;
