use crate::domain::model::PortfolioDocument;
use crate::domain::ports::{DocumentSource, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Reads the portfolio document from a site directory through [`Storage`].
pub struct FileSource<S: Storage> {
    storage: S,
    data_path: String,
    label: String,
}

impl<S: Storage> FileSource<S> {
    pub fn new(storage: S, data_path: &str) -> Self {
        Self {
            storage,
            data_path: data_path.to_string(),
            label: data_path.to_string(),
        }
    }

    pub fn with_label(mut self, label: String) -> Self {
        self.label = label;
        self
    }
}

#[async_trait]
impl<S: Storage> DocumentSource for FileSource<S> {
    async fn fetch_document(&self) -> Result<PortfolioDocument> {
        let bytes = self.storage.read_file(&self.data_path).await?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), self.label);
        Ok(PortfolioDocument::from_slice(&bytes)?)
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
