use crate::domain::model::PortfolioDocument;
use crate::domain::site::{SiteSettings, SourceSpec};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source(&self) -> SourceSpec;
    fn data_path(&self) -> &str;
    fn request_timeout_seconds(&self) -> u64;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn site(&self) -> SiteSettings;
    fn year_override(&self) -> Option<i32>;
}

/// Produces the portfolio document for one load. Every failure (transport,
/// status, body) surfaces as an error here and is handled by the caller.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch_document(&self) -> Result<PortfolioDocument>;

    /// Human readable location, used in log lines.
    fn describe(&self) -> String;
}

#[async_trait]
impl<T: DocumentSource + ?Sized> DocumentSource for Box<T> {
    async fn fetch_document(&self) -> Result<PortfolioDocument> {
        (**self).fetch_document().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
