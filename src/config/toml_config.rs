use crate::core::ConfigProvider;
use crate::domain::site::{
    NavLink, SiteSettings, SourceSpec, DEFAULT_DATA_PATH, DEFAULT_VISIBILITY_THRESHOLD,
};
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{
    validate_fraction, validate_non_empty_string, validate_path, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub source: SourceSection,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub animation: AnimationSection,
    pub nav: Option<NavSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub title: String,
    pub owner: String,
    pub stylesheet: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub origin: Option<String>,
    pub site_dir: Option<String>,
    #[serde(default = "default_data_path")]
    pub data_path: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub path: String,
    pub file: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: "./dist".to_string(),
            file: "index.html".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSection {
    pub threshold: f64,
    pub static_reveal: bool,
}

impl Default for AnimationSection {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
            static_reveal: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavSection {
    pub links: Vec<NavLink>,
}

fn default_data_path() -> String {
    DEFAULT_DATA_PATH.to_string()
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortfolioError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        match (&self.source.origin, &self.source.site_dir) {
            (Some(_), Some(_)) => {
                return Err(PortfolioError::ConfigError {
                    message: "source.origin and source.site_dir are mutually exclusive"
                        .to_string(),
                })
            }
            (None, None) => {
                return Err(PortfolioError::MissingConfigError {
                    field: "source.origin or source.site_dir".to_string(),
                })
            }
            (Some(origin), None) => validate_url("source.origin", origin)?,
            (None, Some(site_dir)) => validate_path("source.site_dir", site_dir)?,
        }

        validate_path("source.data_path", &self.source.data_path)?;
        validate_path("output.path", &self.output.path)?;
        validate_path("output.file", &self.output.file)?;
        validate_non_empty_string("site.title", &self.site.title)?;
        validate_fraction("animation.threshold", self.animation.threshold)?;

        if let Some(nav) = &self.nav {
            for link in &nav.links {
                validate_non_empty_string("nav.links.label", &link.label)?;
                validate_non_empty_string("nav.links.href", &link.href)?;
            }
        }

        Ok(())
    }
}

impl ConfigProvider for SiteConfig {
    fn source(&self) -> SourceSpec {
        match &self.source.origin {
            Some(origin) => SourceSpec::Remote {
                origin: origin.clone(),
            },
            None => SourceSpec::Local {
                site_dir: self
                    .source
                    .site_dir
                    .clone()
                    .unwrap_or_else(|| ".".to_string()),
            },
        }
    }

    fn data_path(&self) -> &str {
        &self.source.data_path
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(10)
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_file(&self) -> &str {
        &self.output.file
    }

    fn site(&self) -> SiteSettings {
        let defaults = SiteSettings::default();
        SiteSettings {
            title: self.site.title.clone(),
            owner: self.site.owner.clone(),
            stylesheet: self.site.stylesheet.clone().unwrap_or(defaults.stylesheet),
            nav_links: self
                .nav
                .as_ref()
                .map(|nav| nav.links.clone())
                .unwrap_or(defaults.nav_links),
            visibility_threshold: self.animation.threshold,
            static_reveal: self.animation.static_reveal,
        }
    }

    fn year_override(&self) -> Option<i32> {
        self.site.year
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal_config() {
        let toml_content = r#"
[site]
title = "Ada's Portfolio"
owner = "Ada"

[source]
site_dir = "./site"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.source(),
            SourceSpec::Local {
                site_dir: "./site".to_string()
            }
        );
        assert_eq!(config.data_path(), "data/data.json");
        assert_eq!(config.output_path(), "./dist");
        assert_eq!(config.request_timeout_seconds(), 10);

        let site = config.site();
        assert_eq!(site.visibility_threshold, 0.1);
        assert!(site.static_reveal);
        assert_eq!(site.nav_links, NavLink::defaults());
        assert_eq!(site.stylesheet, "css/style.css");
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r##"
[site]
title = "Portfolio"
owner = "Ada"
stylesheet = "assets/site.css"
year = 2030

[source]
origin = "https://ada.dev/portfolio/"
timeout_seconds = 3

[output]
path = "./public"
file = "home.html"

[animation]
threshold = 0.25
static_reveal = false

[[nav.links]]
label = "Work"
href = "#projects"
"##;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.year_override(), Some(2030));
        assert_eq!(config.output_file(), "home.html");
        assert_eq!(config.request_timeout_seconds(), 3);

        let site = config.site();
        assert_eq!(site.nav_links, vec![NavLink::new("Work", "#projects")]);
        assert_eq!(site.visibility_threshold, 0.25);
        assert!(!site.static_reveal);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTFOLIO_TEST_ORIGIN", "https://env.example.com");

        let toml_content = r#"
[site]
title = "t"
owner = "o"

[source]
origin = "${PORTFOLIO_TEST_ORIGIN}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.source.origin.as_deref(),
            Some("https://env.example.com")
        );

        std::env::remove_var("PORTFOLIO_TEST_ORIGIN");
    }

    #[test]
    fn test_source_must_be_exactly_one() {
        let both = r#"
[site]
title = "t"
owner = "o"

[source]
origin = "https://a.dev"
site_dir = "./site"
"#;
        assert!(SiteConfig::from_toml_str(both).unwrap().validate().is_err());

        let neither = r#"
[site]
title = "t"
owner = "o"

[source]
"#;
        let err = SiteConfig::from_toml_str(neither)
            .unwrap()
            .validate()
            .unwrap_err();
        assert!(matches!(err, PortfolioError::MissingConfigError { .. }));
    }

    #[test]
    fn test_threshold_out_of_range() {
        let toml_content = r#"
[site]
title = "t"
owner = "o"

[source]
site_dir = "."

[animation]
threshold = 0.0
"#;
        assert!(SiteConfig::from_toml_str(toml_content)
            .unwrap()
            .validate()
            .is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[site]\ntitle = \"File\"\nowner = \"o\"\n\n[source]\nsite_dir = \".\"\n")
            .unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.site.title, "File");
    }

    #[test]
    fn test_demo_config_points_at_bundled_site() {
        let config = SiteConfig::from_toml_str(include_str!("../../demos/portfolio.toml")).unwrap();
        assert!(config.validate().is_ok());

        let site_dir = match config.source() {
            SourceSpec::Local { site_dir } => site_dir,
            other => panic!("unexpected source {:?}", other),
        };
        let data_file = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join(site_dir)
            .join(config.data_path());
        assert!(data_file.is_file(), "{} is missing", data_file.display());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = SiteConfig::from_toml_str("[site\ntitle=").unwrap_err();
        assert!(matches!(err, PortfolioError::ConfigError { .. }));
    }
}
