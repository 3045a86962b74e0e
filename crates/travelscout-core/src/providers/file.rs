// Catalog document read from local disk
use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::{models::Catalog, source::CatalogSource, Error, Result};

pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<Catalog> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| Error::LoadError(format!("{}: {}", self.path.display(), e)))?;

        let doc = travelscout_api::parse_document(&bytes)
            .map_err(|e| Error::LoadError(format!("{}: {}", self.path.display(), e)))?;

        Ok(super::document_to_catalog(doc))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
