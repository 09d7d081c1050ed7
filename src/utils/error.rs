use thiserror::Error;

/// Message shown in every content container when the portfolio document
/// cannot be loaded, whatever the underlying cause.
pub const LOAD_FAILURE_MESSAGE: &str =
    "Unable to load content. Please check your connection and try again.";

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error! Status: {status}")]
    FetchStatus { status: u16 },

    #[error("Portfolio document could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

/// Which stage of a load produced the failure. Users always see the same
/// message; this is only surfaced to logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadCause {
    Network,
    Status(u16),
    Parse,
    Io,
}

impl LoadCause {
    pub fn label(&self) -> &'static str {
        match self {
            LoadCause::Network => "network",
            LoadCause::Status(_) => "status",
            LoadCause::Parse => "parse",
            LoadCause::Io => "io",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Load,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PortfolioError {
    pub fn cause(&self) -> Option<LoadCause> {
        match self {
            PortfolioError::Network(_) => Some(LoadCause::Network),
            PortfolioError::FetchStatus { status } => Some(LoadCause::Status(*status)),
            PortfolioError::Parse(_) => Some(LoadCause::Parse),
            PortfolioError::Io(_) => Some(LoadCause::Io),
            _ => None,
        }
    }

    pub fn is_load_failure(&self) -> bool {
        self.cause().is_some()
    }

    pub fn category(&self) -> ErrorCategory {
        if self.is_load_failure() {
            ErrorCategory::Load
        } else {
            ErrorCategory::Configuration
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PortfolioError::Network(_) | PortfolioError::FetchStatus { .. } => {
                ErrorSeverity::Medium
            }
            PortfolioError::Parse(_) => ErrorSeverity::High,
            PortfolioError::Io(_) => ErrorSeverity::Critical,
            PortfolioError::ConfigError { .. }
            | PortfolioError::InvalidConfigValueError { .. }
            | PortfolioError::MissingConfigError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Load => LOAD_FAILURE_MESSAGE.to_string(),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PortfolioError::Network(_) => "Check that the site origin is reachable, then retry",
            PortfolioError::FetchStatus { .. } => {
                "Make sure data/data.json is published next to the page"
            }
            PortfolioError::Parse(_) => {
                "Validate data/data.json; skills, projects and certificates must be arrays"
            }
            PortfolioError::Io(_) => "Check the site directory and output path permissions",
            PortfolioError::ConfigError { .. }
            | PortfolioError::InvalidConfigValueError { .. }
            | PortfolioError::MissingConfigError { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
        }
    }
}
