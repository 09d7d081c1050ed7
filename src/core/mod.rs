pub mod animator;
pub mod export;
pub mod loader;
pub mod nav;
pub mod session;

pub use crate::domain::model::{Certificate, PortfolioDocument, Project, Skill};
pub use crate::domain::ports::{ConfigProvider, DocumentSource, Storage};
pub use crate::utils::error::Result;
