use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Issue fetch error: {0}")]
    #[diagnostic(code(issue_calendar::fetch))]
    Fetch(String),

    #[error("Issue decode error: {0}")]
    #[diagnostic(code(issue_calendar::decode))]
    Decode(String),

    #[error("Calendar render error: {0}")]
    #[diagnostic(code(issue_calendar::render))]
    Render(String),

    #[error("Failed to open link {url}: {source}")]
    #[diagnostic(code(issue_calendar::browser))]
    Browser {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Calendar has already been rendered")]
    #[diagnostic(
        code(issue_calendar::already_rendered),
        help("A loader renders exactly once; create a new loader to load again")
    )]
    AlreadyRendered,

    #[error("Event click error: {0}")]
    #[diagnostic(code(issue_calendar::click))]
    Click(String),

    #[error("Environment error: {0}")]
    #[diagnostic(code(issue_calendar::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(issue_calendar::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(issue_calendar::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(issue_calendar::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(issue_calendar::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Transport failures from reqwest surface as fetch errors
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Fetch(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type CalendarResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create fetch errors
pub fn fetch_error(message: &str) -> Error {
    Error::Fetch(message.to_string())
}

/// Helper to create render errors
pub fn render_error(message: &str) -> Error {
    Error::Render(message.to_string())
}

/// Helper to create click errors
pub fn click_error(message: &str) -> Error {
    Error::Click(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
