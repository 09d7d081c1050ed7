// Adapters layer: concrete document sources.

pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::HttpSource;

use crate::config::cli::LocalStorage;
use crate::domain::ports::{ConfigProvider, DocumentSource};
use crate::domain::site::SourceSpec;
use crate::utils::error::Result;
use std::path::Path;

/// Builds the document source named by the configuration.
pub fn source_from_config<C: ConfigProvider>(config: &C) -> Result<Box<dyn DocumentSource>> {
    match config.source() {
        SourceSpec::Remote { origin } => {
            let source = HttpSource::new(
                &origin,
                config.data_path(),
                config.request_timeout_seconds(),
            )?;
            tracing::info!("Fetching portfolio data from {}", source.url());
            Ok(Box::new(source))
        }
        SourceSpec::Local { site_dir } => {
            let label = Path::new(&site_dir)
                .join(config.data_path())
                .display()
                .to_string();
            tracing::info!("Reading portfolio data from {}", label);
            let source = FileSource::new(LocalStorage::new(site_dir), config.data_path())
                .with_label(label);
            Ok(Box::new(source))
        }
    }
}
