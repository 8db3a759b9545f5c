use listings_backend::models::Listing;
use log::debug;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("property {0} not found")]
    NotFound(i64),
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Unavailable(err.to_string())
    }
}

/// Calls the catalog read endpoints of a running backend.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub async fn list_all(&self) -> Result<Vec<Listing>, ClientError> {
        let url = format!("{}/properties", self.base_url);
        debug!("GET {}", url);
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(ClientError::Unavailable(format!(
                "GET {} returned {}",
                url,
                resp.status()
            )));
        }
        Ok(resp.json().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Listing, ClientError> {
        let url = format!("{}/properties/{}", self.base_url, id);
        debug!("GET {}", url);
        let resp = self.http.get(&url).send().await?;
        match resp.status() {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(id)),
            status if !status.is_success() => Err(ClientError::Unavailable(format!(
                "GET {} returned {}",
                url, status
            ))),
            _ => Ok(resp.json().await?),
        }
    }
}
