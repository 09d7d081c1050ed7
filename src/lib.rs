pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod page;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{
    animator::VisibilityAnimator,
    export::{ExportEngine, ExportReport, ExportStatus},
    loader::{DataLoader, LoadOutcome},
    nav::{NavState, NavToggle},
    session::PortfolioSession,
};
pub use adapters::{source_from_config, FileSource, HttpSource};
pub use config::{cli::LocalStorage, toml_config::SiteConfig};
pub use domain::model::{Certificate, PortfolioDocument, Project, Skill, SkillLevel};
pub use page::Document;
pub use utils::error::{PortfolioError, Result};
