pub mod cards;
pub mod sections;

pub use cards::{certificate_card, project_card, skill_card, CardSource};
pub use sections::{render_document, render_load_failure, render_section, RenderedSections};
