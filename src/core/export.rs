use crate::core::loader::LoadOutcome;
use crate::core::session::PortfolioSession;
use crate::core::{ConfigProvider, DocumentSource, Storage};
use crate::domain::site::SiteSettings;
use crate::page::{ContainerId, Document};
use crate::utils::error::{LoadCause, Result};
use chrono::Datelike;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Rendered {
        skills: usize,
        projects: usize,
        certificates: usize,
    },
    /// The failure page was written instead.
    Failed { cause: LoadCause, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub output_path: String,
    pub status: ExportStatus,
    pub revealed: usize,
}

impl ExportReport {
    pub fn is_success(&self) -> bool {
        matches!(self.status, ExportStatus::Rendered { .. })
    }
}

/// Runs one load/render cycle and writes the resulting page to storage.
pub struct ExportEngine<S: Storage, D: DocumentSource> {
    storage: S,
    source: D,
    settings: SiteSettings,
    output_path: String,
    output_file: String,
    year: Option<i32>,
}

impl<S: Storage, D: DocumentSource> ExportEngine<S, D> {
    pub fn new(storage: S, source: D, settings: SiteSettings) -> Self {
        Self {
            storage,
            source,
            settings,
            output_path: ".".to_string(),
            output_file: "index.html".to_string(),
            year: None,
        }
    }

    pub fn from_config<C: ConfigProvider>(storage: S, source: D, config: &C) -> Self {
        Self::new(storage, source, config.site())
            .with_output(config.output_path(), config.output_file())
            .with_year(config.year_override())
    }

    pub fn with_output(mut self, output_path: &str, output_file: &str) -> Self {
        self.output_path = output_path.to_string();
        self.output_file = output_file.to_string();
        self
    }

    pub fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    pub async fn run(self) -> Result<ExportReport> {
        let year = self.year.unwrap_or_else(|| chrono::Local::now().year());
        let static_reveal = self.settings.static_reveal;
        tracing::info!("Rendering portfolio page (footer year {})", year);

        let mut session =
            PortfolioSession::initialize(Document::new(self.settings), self.source, year);
        let outcome = session.load().await;

        let mut document = session.into_document();
        let revealed = if static_reveal && outcome.is_rendered() {
            document.reveal_all()
        } else {
            0
        };

        let status = match outcome {
            LoadOutcome::Rendered(_) => ExportStatus::Rendered {
                skills: unit_count(&document, ContainerId::Skills),
                projects: unit_count(&document, ContainerId::Projects),
                certificates: unit_count(&document, ContainerId::Certificates),
            },
            LoadOutcome::Failed(err) => {
                tracing::warn!("💡 {}", err.recovery_suggestion());
                ExportStatus::Failed {
                    // only load failures reach the outcome
                    cause: err.cause().unwrap_or(LoadCause::Io),
                    message: err.to_string(),
                }
            }
        };

        let html = document.to_html();
        tracing::debug!("Writing page ({} bytes) to storage", html.len());
        self.storage.write_file(&self.output_file, html.as_bytes()).await?;

        let output_path = format!("{}/{}", self.output_path, self.output_file);
        tracing::info!("📁 Page saved to: {}", output_path);

        Ok(ExportReport {
            output_path,
            status,
            revealed,
        })
    }
}

fn unit_count(document: &Document, id: ContainerId) -> usize {
    document.container(id).map(|c| c.unit_count()).unwrap_or(0)
}
