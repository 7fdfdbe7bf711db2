pub mod airport;
pub mod health;

pub use airport::{AirportService, airport_routes};
pub use health::{AppStartTime, HealthService, health_routes};
