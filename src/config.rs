use crate::error::{Error, Result};
use crate::filter::Whitelist;
use std::path::PathBuf;

/// Raw `clients.json` from the registry project on the main branch
pub const CLIENTS_URL: &str =
    "https://gitlab.com/api/v4/projects/31330206/repository/files/clients.json/raw?ref=main";

/// Environment variable holding the GitLab access token
pub const TOKEN_ENV: &str = "GITLAB_TOKEN";

/// Directory the templates are loaded from, relative to the working directory
pub const TEMPLATES_DIR: &str = "templates";

/// Directory the per-client values files are written into
pub const OUTPUT_DIR: &str = "./.gitlab";

/// Configuration for the generator
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub token: Option<String>,
    pub templates_dir: PathBuf,
    pub output_dir: PathBuf,
    pub whitelist: Whitelist,
}

impl Config {
    /// Create a configuration pointing at the registry with no token
    pub fn new() -> Self {
        Self {
            url: CLIENTS_URL.to_string(),
            token: None,
            templates_dir: PathBuf::from(TEMPLATES_DIR),
            output_dir: PathBuf::from(OUTPUT_DIR),
            whitelist: Whitelist::default(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.url)
            .map_err(|e| Error::Config(format!("Invalid clients URL '{}': {}", self.url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "Clients URL must be http or https: {}",
                self.url
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating configurations
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: Config::new(),
        }
    }

    /// Set the URL the client list is fetched from
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// Set the access token sent as `PRIVATE-TOKEN`
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    /// Read the access token from `GITLAB_TOKEN`, if set
    pub fn token_from_env(mut self) -> Self {
        self.config.token = std::env::var(TOKEN_ENV).ok();
        self
    }

    /// Set the template directory
    pub fn templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.templates_dir = dir.into();
        self
    }

    /// Set the directory values files are written into
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Replace the client whitelist
    pub fn whitelist(mut self, whitelist: Whitelist) -> Self {
        self.config.whitelist = whitelist;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
