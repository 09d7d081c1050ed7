pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::site::{NavLink, SiteSettings, SourceSpec, DEFAULT_VISIBILITY_THRESHOLD};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "portfolio-render")]
#[command(about = "Render a portfolio page from its data/data.json document")]
pub struct CliConfig {
    #[arg(long, help = "Page origin to fetch data from; takes precedence over --site-dir")]
    pub origin: Option<String>,

    #[arg(long, default_value = ".", help = "Local site root holding the data document")]
    pub site_dir: String,

    #[arg(long, default_value = "data/data.json")]
    pub data_path: String,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    #[arg(long, default_value = "./dist")]
    pub output_path: String,

    #[arg(long, default_value = "index.html")]
    pub output_file: String,

    #[arg(long, help = "Read settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, default_value = "Portfolio")]
    pub title: String,

    #[arg(long, default_value = "Portfolio")]
    pub owner: String,

    #[arg(long, default_value = "css/style.css")]
    pub stylesheet: String,

    #[arg(long, help = "Footer year; defaults to the current year")]
    pub year: Option<i32>,

    #[arg(long, help = "Leave cards hidden until a runtime observer reveals them")]
    pub no_static_reveal: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source(&self) -> SourceSpec {
        match &self.origin {
            Some(origin) => SourceSpec::Remote {
                origin: origin.clone(),
            },
            None => SourceSpec::Local {
                site_dir: self.site_dir.clone(),
            },
        }
    }

    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn site(&self) -> SiteSettings {
        SiteSettings {
            title: self.title.clone(),
            owner: self.owner.clone(),
            stylesheet: self.stylesheet.clone(),
            nav_links: NavLink::defaults(),
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            static_reveal: !self.no_static_reveal,
        }
    }

    fn year_override(&self) -> Option<i32> {
        self.year
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.origin {
            Some(origin) => validate_url("origin", origin)?,
            None => validate_path("site_dir", &self.site_dir)?,
        }
        validate_path("data_path", &self.data_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_path("output_file", &self.output_file)?;
        validate_non_empty_string("title", &self.title)?;
        Ok(())
    }
}
