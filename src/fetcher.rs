use log::debug;
use reqwest::header::USER_AGENT;
use reqwest::Client;

use crate::error::FetchError;
use crate::location::{Location, VaccineLocations};
use crate::methods::random_user_agent;

#[derive(Debug, Clone)]
pub struct SlotsClient {
    client: Client,
    endpoint: String,
}

impl SlotsClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub async fn fetch_locations(&self) -> Result<Vec<Location>, FetchError> {
        let user_agent = random_user_agent();
        debug!("requesting {} as {:?}", self.endpoint, user_agent);

        let response = self
            .client
            .get(self.endpoint.as_str())
            .header(USER_AGENT, user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::StatusError(status));
        }

        let payload: VaccineLocations = response.json().await?;
        Ok(payload.locations)
    }
}
