// Remote catalog over HTTP
use async_trait::async_trait;
use std::time::Duration;
use travelscout_api::CatalogClient;

use crate::{models::Catalog, source::CatalogSource, Error, Result};

/// Wrapper around CatalogClient that implements CatalogSource
pub struct HttpCatalogSource {
    client: CatalogClient,
}

impl HttpCatalogSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = CatalogClient::new(url, timeout).map_err(|e| Error::LoadError(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<Catalog> {
        let doc = self
            .client
            .fetch_document()
            .await
            .map_err(|e| Error::LoadError(e.to_string()))?;

        Ok(super::document_to_catalog(doc))
    }

    fn describe(&self) -> String {
        self.client.url().to_string()
    }
}
