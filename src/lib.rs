//! Generate GitLab CI pipelines and helm chart values from the client registry.
//!
//! The registry is a JSON array of client records served by the GitLab API.
//! Records are filtered against a fixed whitelist of client names and then
//! rendered through Jinja-style templates, either into a single pipeline
//! definition on stdout or into one values file per client.

pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod generator;
pub mod render;
pub mod types;

pub use config::{Config, ConfigBuilder, CLIENTS_URL, OUTPUT_DIR, TEMPLATES_DIR, TOKEN_ENV};
pub use error::{Error, Result};
pub use fetch::{fetch_clients, parse_clients, TOKEN_HEADER};
pub use filter::{filter_clients, ClientFilter, FilterResult, Whitelist, CLIENT_WHITELIST};
pub use generator::Generator;
pub use render::{TemplateRenderer, CI_TEMPLATE, VALUES_TEMPLATE};
pub use types::{Client, Generated, Mode};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::config::{Config, ConfigBuilder};
    pub use crate::error::{Error, Result};
    pub use crate::filter::Whitelist;
    pub use crate::generator::Generator;
    pub use crate::types::{Client, Generated, Mode};
}
