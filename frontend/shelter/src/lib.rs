//! # Shelter API
//!
//! Data access for the Villa Pirritx adoption site.
//!
//! ## Endpoints
//!
//! All paths hang off the configured base URL (`PIRRITX_API_URL`, default
//! `http://localhost:8000/api`).
//! - `GET animales/` with optional `tipo_animal`, `tamaño`, `edad_min`, `edad_max`
//! - `GET animales/{id}/`
//! - `GET animales/urgentes/`
//! - `GET eventos/`, `GET eventos/proximos/`
//! - `GET protectora/`
//! - `POST solicitudes-adopcion/`
//!
//! ## Normalization
//!
//! Collections go through [`envelope::Envelope`] first, then every element
//! becomes a canonical [`Animal`]:
//! - `tamano` comes from `tamaño` when present, otherwise `tamano`
//! - `estado_adopcion` comes from `estado` when present, otherwise `estado_adopcion`
//! - missing or null fields get their default value
use std::future::Future;

pub mod config;
pub mod envelope;
pub mod error;
pub mod models;
pub mod remote;

pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    AdoptionReceipt, AdoptionRequest, AdoptionState, Animal, Evento, SearchCriteria, Shelter,
};
pub use remote::ApiClient;

/// The part of the API a listing page depends on.
pub trait AnimalSource {
    fn fetch_available(&self) -> impl Future<Output = Result<Vec<Animal>, ApiError>> + Send;

    fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> impl Future<Output = Result<Vec<Animal>, ApiError>> + Send;
}

impl AnimalSource for ApiClient {
    async fn fetch_available(&self) -> Result<Vec<Animal>, ApiError> {
        ApiClient::fetch_available(self).await
    }

    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Animal>, ApiError> {
        ApiClient::search(self, criteria).await
    }
}
