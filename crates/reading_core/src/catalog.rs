//! Remote card catalog access.

use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::CatalogCard, error::CatalogError, protocol::parse_catalog_payload};
use tracing::debug;
use url::Url;

use crate::config::cards_endpoint;

/// Source of the raw card list backing a reading session.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_cards(&self) -> Result<Vec<CatalogCard>, CatalogError>;
}

pub struct HttpCatalog {
    http: Client,
    cards_url: Url,
}

impl HttpCatalog {
    pub fn new(catalog_base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            http: Client::new(),
            cards_url: cards_endpoint(catalog_base_url)?,
        })
    }

    pub fn cards_url(&self) -> &Url {
        &self.cards_url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_cards(&self) -> Result<Vec<CatalogCard>, CatalogError> {
        debug!(url = %self.cards_url, "fetching card catalog");
        let response = self
            .http
            .get(self.cards_url.clone())
            .send()
            .await
            .map_err(|err| CatalogError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::FetchFailure {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| CatalogError::Network(err.to_string()))?;
        parse_catalog_payload(&body)
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
