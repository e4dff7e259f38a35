use crate::config::Config;
use crate::error::{Error, Result};
use crate::fetch::fetch_clients;
use crate::filter::filter_clients;
use crate::render::{TemplateRenderer, CI_TEMPLATE, VALUES_TEMPLATE};
use crate::types::{Client, Generated, Mode};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Fetches, filters and renders the client list
pub struct Generator {
    config: Config,
    http: reqwest::Client,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the registry and keep only whitelisted clients
    pub async fn clients(&self) -> Result<Vec<Client>> {
        let clients = fetch_clients(&self.http, &self.config).await?;
        let total = clients.len();
        let clients = filter_clients(clients, &self.config.whitelist);
        info!(total, kept = clients.len(), "Filtered client list");
        Ok(clients)
    }

    /// Run end to end; in CI mode the pipeline goes to `out`
    #[instrument(skip(self, out))]
    pub async fn run<W: Write>(&self, mode: Mode, out: &mut W) -> Result<Generated> {
        let clients = self.clients().await?;

        match mode {
            Mode::Ci => self.generate_ci(&clients, out),
            Mode::ChartValues => self.generate_values(&clients),
        }
    }

    /// Render the pipeline for all clients and print it to `out`
    pub fn generate_ci<W: Write>(&self, clients: &[Client], out: &mut W) -> Result<Generated> {
        let mut renderer = TemplateRenderer::new(&self.config.templates_dir);
        renderer.load(CI_TEMPLATE)?;

        let output = renderer.render_ci(clients)?;
        writeln!(out, "{}", output)?;
        out.flush()?;

        Ok(Generated::Ci {
            clients: clients.len(),
        })
    }

    /// Render and write one values file per client
    ///
    /// Files are written in order; anything written before a failure stays
    /// on disk. The output directory must already exist.
    pub fn generate_values(&self, clients: &[Client]) -> Result<Generated> {
        let mut renderer = TemplateRenderer::new(&self.config.templates_dir);
        renderer.load(VALUES_TEMPLATE)?;

        let mut written = Vec::with_capacity(clients.len());
        for client in clients {
            let name = client.name().ok_or(Error::UnnamedClient)?;
            let output = renderer.render_values(client)?;
            let path = self.values_path(name);

            fs::write(&path, output).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "Wrote values file");
            written.push(path);
        }

        Ok(Generated::ChartValues { written })
    }

    /// `values-<name>.yaml` under the output directory
    pub fn values_path(&self, name: &str) -> PathBuf {
        self.config.output_dir.join(format!("values-{}.yaml", name))
    }
}
