use crate::core::animator::VisibilityAnimator;
use crate::core::loader::{DataLoader, LoadOutcome};
use crate::core::nav::{NavState, NavToggle};
use crate::domain::ports::DocumentSource;
use crate::page::{Document, Rect, UnitId};

/// One page view: the document plus the components wired to it.
///
/// Built by [`PortfolioSession::initialize`], which plays the part of the
/// page-ready handler. All user events go through `&mut self`, so a retry
/// cannot interleave with an earlier load.
pub struct PortfolioSession<S: DocumentSource> {
    document: Document,
    loader: DataLoader<S>,
    nav: Option<NavToggle>,
    animator: VisibilityAnimator,
}

impl<S: DocumentSource> PortfolioSession<S> {
    pub fn initialize(mut document: Document, source: S, year: i32) -> Self {
        if !document.set_year(year) {
            tracing::debug!("Page has no year placeholder");
        }

        let nav = document.nav_menu_mut().map(NavToggle::attach);

        let mut animator = VisibilityAnimator::new(document.settings().visibility_threshold);
        animator.observe_document(&document);

        Self {
            document,
            loader: DataLoader::new(source),
            nav,
            animator,
        }
    }

    /// Runs one load/render cycle and hands the new cards to the animator.
    pub async fn load(&mut self) -> LoadOutcome {
        let outcome = self.loader.load_into(&mut self.document).await;
        if let Some(sections) = outcome.sections() {
            let added = self.animator.observe(sections.all_units());
            tracing::debug!("Observing {} new cards", added);
        }
        outcome
    }

    /// Activates the retry control. Returns `None` when no failure notice is
    /// on the page.
    pub async fn click_retry(&mut self) -> Option<LoadOutcome> {
        let has_retry = self
            .document
            .containers()
            .iter()
            .any(|c| c.has_retry_control());
        if !has_retry {
            return None;
        }
        tracing::info!("Retrying portfolio load");
        Some(self.load().await)
    }

    pub fn click_menu_toggle(&mut self) -> Option<NavState> {
        let toggle = self.nav.as_mut()?;
        let menu = self.document.nav_menu_mut()?;
        Some(toggle.click_toggle(menu))
    }

    /// Follows the nav link at `index`, which always closes the menu.
    pub fn click_nav_link(&mut self, index: usize) -> Option<NavState> {
        let toggle = self.nav.as_mut()?;
        let menu = self.document.nav_menu_mut()?;
        if index >= menu.links().len() {
            return None;
        }
        Some(toggle.click_link(menu))
    }

    pub fn nav_state(&self) -> Option<NavState> {
        self.nav.as_ref().map(NavToggle::state)
    }

    /// Reports a new viewport position; returns the cards it revealed.
    pub fn scroll(&mut self, viewport: &Rect) -> Vec<UnitId> {
        self.animator.on_viewport(&mut self.document, viewport)
    }

    pub fn animator(&self) -> &VisibilityAnimator {
        &self.animator
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}
