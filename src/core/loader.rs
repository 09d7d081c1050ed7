use crate::domain::ports::DocumentSource;
use crate::page::Document;
use crate::render::{render_document, render_load_failure, RenderedSections};
use crate::utils::error::PortfolioError;

/// Result of one load/render cycle. Failures are terminal for the cycle and
/// never propagate further.
#[derive(Debug)]
pub enum LoadOutcome {
    Rendered(RenderedSections),
    Failed(PortfolioError),
}

impl LoadOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, LoadOutcome::Rendered(_))
    }

    pub fn sections(&self) -> Option<&RenderedSections> {
        match self {
            LoadOutcome::Rendered(sections) => Some(sections),
            LoadOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&PortfolioError> {
        match self {
            LoadOutcome::Rendered(_) => None,
            LoadOutcome::Failed(err) => Some(err),
        }
    }
}

/// Fetches the portfolio document and dispatches it to the section renderers,
/// or to the failure notice when anything goes wrong.
pub struct DataLoader<S: DocumentSource> {
    source: S,
}

impl<S: DocumentSource> DataLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn load_into(&self, document: &mut Document) -> LoadOutcome {
        tracing::debug!("Loading portfolio document from {}", self.source.describe());

        match self.source.fetch_document().await {
            Ok(data) => {
                tracing::info!(
                    "Loaded {} skills, {} projects, {} certificates",
                    data.skills.len(),
                    data.projects.len(),
                    data.certificates.len()
                );
                LoadOutcome::Rendered(render_document(document, &data))
            }
            Err(err) => {
                let cause = err.cause().map(|c| c.label()).unwrap_or("other");
                tracing::error!(cause, "Error loading data: {}", err);
                render_load_failure(document);
                LoadOutcome::Failed(err)
            }
        }
    }
}
