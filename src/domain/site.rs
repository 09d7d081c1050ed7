use serde::{Deserialize, Serialize};

pub const DEFAULT_DATA_PATH: &str = "data/data.json";
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.1;

/// Presentation settings for the page shell that surrounds the cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub title: String,
    pub owner: String,
    pub stylesheet: String,
    pub nav_links: Vec<NavLink>,
    pub visibility_threshold: f64,
    /// Static exports have no runtime observer, so cards are emitted
    /// already revealed unless this is turned off.
    pub static_reveal: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            owner: "Portfolio".to_string(),
            stylesheet: "css/style.css".to_string(),
            nav_links: NavLink::defaults(),
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            static_reveal: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }

    pub fn defaults() -> Vec<NavLink> {
        vec![
            NavLink::new("Home", "#home"),
            NavLink::new("Skills", "#skills"),
            NavLink::new("Projects", "#projects"),
            NavLink::new("Certificates", "#certificates"),
            NavLink::new("Contact", "#contact"),
        ]
    }
}

/// Where the portfolio document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// Page origin; the data path is resolved against it.
    Remote { origin: String },
    /// Local site root; the data path is read relative to it.
    Local { site_dir: String },
}
