use crate::error::{Error, Result};
use crate::types::Client;
use minijinja::{context, Environment};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Pipeline template, rendered once with `clients`
pub const CI_TEMPLATE: &str = "generate-ci.jinja";

/// Helm values template, rendered per client with `client`
pub const VALUES_TEMPLATE: &str = "generate-values.jinja";

/// Loads named templates from a directory and renders them
///
/// Uses the engine defaults: a missing field renders as an empty string and
/// one trailing newline is dropped from each template source.
pub struct TemplateRenderer {
    dir: PathBuf,
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            env: Environment::new(),
        }
    }

    /// Load `name` from the template directory
    pub fn load(&mut self, name: &str) -> Result<()> {
        let path = self.dir.join(name);
        let source = fs::read_to_string(&path).map_err(|source| Error::TemplateRead {
            path: path.clone(),
            source,
        })?;

        debug!(template = %path.display(), "Loaded template");
        self.env.add_template_owned(name.to_string(), source)?;
        Ok(())
    }

    /// Render the pipeline template with the whole client list
    pub fn render_ci(&self, clients: &[Client]) -> Result<String> {
        let template = self.env.get_template(CI_TEMPLATE)?;
        Ok(template.render(context! { clients => clients })?)
    }

    /// Render the values template for one client
    pub fn render_values(&self, client: &Client) -> Result<String> {
        let template = self.env.get_template(VALUES_TEMPLATE)?;
        Ok(template.render(context! { client => client })?)
    }
}
