pub mod api_client;
pub mod auth_service;
#[cfg(test)]
pub mod fake_api;

pub use api_client::{ApiClient, ShipmentApi};
pub use auth_service::AuthService;
