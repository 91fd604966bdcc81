use crate::error::{config_error, env_error, CalendarResult};
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use url::Url;

/// Default location of the optional calendar settings file
pub const DEFAULT_CONFIG_PATH: &str = "config/calendar.toml";

/// Default timezone for choosing the focus month
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Main configuration structure for the calendar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the server that serves `/api/issues`
    pub issues_base_url: String,
    /// Timezone used to decide which month is "today"
    pub timezone: String,
    /// Whether clicked event links are opened in the browser
    pub open_links: bool,
}

/// Optional overrides read from the TOML settings file
#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    timezone: Option<String>,
    open_links: Option<bool>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> CalendarResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let issues_base_url =
            env::var("ISSUES_BASE_URL").map_err(|_| env_error("ISSUES_BASE_URL"))?;

        let timezone =
            env::var("CALENDAR_TIMEZONE").unwrap_or_else(|_| String::from(DEFAULT_TIMEZONE));

        let config_path =
            env::var("CALENDAR_CONFIG").unwrap_or_else(|_| String::from(DEFAULT_CONFIG_PATH));

        let mut config = Config {
            issues_base_url,
            timezone,
            open_links: true,
        };

        config.merge_file(Path::new(&config_path))?;
        config.validate()?;

        Ok(config)
    }

    /// Apply overrides from a TOML settings file if it exists
    fn merge_file(&mut self, path: &Path) -> CalendarResult<()> {
        if !path.exists() {
            return Ok(());
        }

        let content = fs::read_to_string(path)?;
        self.merge_toml(&content)
    }

    fn merge_toml(&mut self, content: &str) -> CalendarResult<()> {
        let settings: FileSettings = toml::from_str(content)?;

        if let Some(timezone) = settings.timezone {
            self.timezone = timezone;
        }
        if let Some(open_links) = settings.open_links {
            self.open_links = open_links;
        }

        Ok(())
    }

    /// Check that the base URL and timezone parse
    pub fn validate(&self) -> CalendarResult<()> {
        self.base_url()?;
        self.tz()?;
        Ok(())
    }

    /// Parsed base URL of the issue server
    pub fn base_url(&self) -> CalendarResult<Url> {
        Url::parse(&self.issues_base_url).map_err(|e| {
            config_error(&format!(
                "Invalid ISSUES_BASE_URL '{}': {}",
                self.issues_base_url, e
            ))
        })
    }

    /// Parsed timezone
    pub fn tz(&self) -> CalendarResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| config_error(&format!("Invalid timezone: {}", self.timezone)))
    }
}
