use crate::domain::model::{Certificate, PortfolioDocument, Project, Skill};
use crate::page::{ContainerId, Document, ErrorNotice, UnitId};
use crate::render::cards::CardSource;

/// Replaces the container's content with one card per record, in order.
///
/// Returns the new units so the caller can hand them to the animator, or
/// `None` when the page has no such container.
pub fn render_section<T: CardSource>(
    document: &mut Document,
    container: ContainerId,
    records: &[T],
) -> Option<Vec<UnitId>> {
    document.container_mut(container)?.clear();

    let mut created = Vec::with_capacity(records.len());
    for record in records {
        created.extend(document.append_card(container, record.to_card()));
    }

    tracing::debug!(
        "Rendered {} cards into #{}",
        created.len(),
        container.element_id()
    );
    Some(created)
}

pub fn render_skills(document: &mut Document, skills: &[Skill]) -> Option<Vec<UnitId>> {
    render_section(document, ContainerId::Skills, skills)
}

pub fn render_projects(document: &mut Document, projects: &[Project]) -> Option<Vec<UnitId>> {
    render_section(document, ContainerId::Projects, projects)
}

pub fn render_certificates(
    document: &mut Document,
    certificates: &[Certificate],
) -> Option<Vec<UnitId>> {
    render_section(document, ContainerId::Certificates, certificates)
}

/// Cards created by one full render, per section. A section missing from the
/// page reports `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedSections {
    pub skills: Option<Vec<UnitId>>,
    pub projects: Option<Vec<UnitId>>,
    pub certificates: Option<Vec<UnitId>>,
}

impl RenderedSections {
    pub fn all_units(&self) -> Vec<UnitId> {
        [&self.skills, &self.projects, &self.certificates]
            .into_iter()
            .flatten()
            .flatten()
            .copied()
            .collect()
    }

    pub fn count(&self, container: ContainerId) -> Option<usize> {
        let units = match container {
            ContainerId::Skills => &self.skills,
            ContainerId::Projects => &self.projects,
            ContainerId::Certificates => &self.certificates,
        };
        units.as_ref().map(Vec::len)
    }
}

/// Runs the three section renderers in order.
pub fn render_document(document: &mut Document, data: &PortfolioDocument) -> RenderedSections {
    RenderedSections {
        skills: render_skills(document, &data.skills),
        projects: render_projects(document, &data.projects),
        certificates: render_certificates(document, &data.certificates),
    }
}

/// Replaces every container present on the page with the failure notice.
pub fn render_load_failure(document: &mut Document) {
    for id in ContainerId::ALL {
        if let Some(container) = document.container_mut(id) {
            container.show_notice(ErrorNotice::default());
        }
    }
}
