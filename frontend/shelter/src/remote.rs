use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    config::ApiConfig,
    envelope::{animals_from, records_from},
    error::ApiError,
    models::{
        AdoptionReceipt, AdoptionRequest, Animal, Evento, SearchCriteria, Shelter, normalize_animal,
    },
};

pub const ANIMALS_PATH: &str = "animales/";
pub const URGENT_ANIMALS_PATH: &str = "animales/urgentes/";
pub const EVENTS_PATH: &str = "eventos/";
pub const UPCOMING_EVENTS_PATH: &str = "eventos/proximos/";
pub const SHELTER_PATH: &str = "protectora/";
pub const ADOPTION_REQUESTS_PATH: &str = "solicitudes-adopcion/";

/// Stateless client for the shelter REST API. Errors are returned as is; what
/// to show instead is up to the caller.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        info!("API client targeting {}", config.base_url);

        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn fetch_available(&self) -> Result<Vec<Animal>, ApiError> {
        let payload = self.get_json(ANIMALS_PATH, &[]).await?;

        Ok(animals_from(payload))
    }

    pub async fn fetch_by_id(&self, id: u64) -> Result<Animal, ApiError> {
        let payload = self.get_json(&format!("{ANIMALS_PATH}{id}/"), &[]).await?;

        Ok(normalize_animal(payload)?)
    }

    pub async fn fetch_urgent(&self) -> Result<Vec<Animal>, ApiError> {
        let payload = self.get_json(URGENT_ANIMALS_PATH, &[]).await?;

        Ok(animals_from(payload))
    }

    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Animal>, ApiError> {
        let payload = self.get_json(ANIMALS_PATH, &criteria.query_pairs()).await?;

        Ok(animals_from(payload))
    }

    pub async fn fetch_events(&self) -> Result<Vec<Evento>, ApiError> {
        let payload = self.get_json(EVENTS_PATH, &[]).await?;

        Ok(records_from(payload))
    }

    pub async fn fetch_upcoming_events(&self) -> Result<Vec<Evento>, ApiError> {
        let payload = self.get_json(UPCOMING_EVENTS_PATH, &[]).await?;

        Ok(records_from(payload))
    }

    pub async fn fetch_shelter(&self) -> Result<Vec<Shelter>, ApiError> {
        let payload = self.get_json(SHELTER_PATH, &[]).await?;

        Ok(records_from(payload))
    }

    pub async fn submit_adoption_request<T>(&self, payload: &T) -> Result<Value, ApiError>
    where
        T: Serialize + ?Sized,
    {
        let url = self.config.endpoint(ADOPTION_REQUESTS_PATH);
        debug!("POST {url}");

        let res = self.client.post(&url).json(payload).send().await?;
        let body = read_body(res, &url).await?;

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body)?)
    }

    pub async fn request_adoption(
        &self,
        request: &AdoptionRequest,
    ) -> Result<AdoptionReceipt, ApiError> {
        let reply = self.submit_adoption_request(request).await?;
        let receipt: AdoptionReceipt = serde_json::from_value(reply)?;

        info!("Adoption request accepted for {}", receipt.animal);
        Ok(receipt)
    }

    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let url = self.config.endpoint(path);
        debug!("GET {url} {query:?}");

        let res = self.client.get(&url).query(query).send().await?;
        let body = read_body(res, &url).await?;

        Ok(serde_json::from_str(&body)?)
    }
}

async fn read_body(res: Response, url: &str) -> Result<String, ApiError> {
    let status = res.status();

    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(res.text().await?)
}
