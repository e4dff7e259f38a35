use crate::types::Client;
use std::collections::BTreeSet;

/// Clients that get pipelines and values files generated
pub const CLIENT_WHITELIST: [&str; 5] = ["dev", "prod", "flywheel_aws_dev", "prod-eu", "staging"];

/// Filter result indicating whether a client should be kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterResult {
    Keep,
    FilterOut,
}

/// Filter trait for client records
pub trait ClientFilter {
    fn should_keep(&self, client: &Client) -> FilterResult;
}

/// Set of client names allowed through the filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Whitelist {
    names: BTreeSet<String>,
}

impl Whitelist {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl Default for Whitelist {
    fn default() -> Self {
        Self::new(CLIENT_WHITELIST)
    }
}

impl ClientFilter for Whitelist {
    /// Exact match on `name`; records without a string name never match.
    fn should_keep(&self, client: &Client) -> FilterResult {
        match client.name() {
            Some(name) if self.contains(name) => FilterResult::Keep,
            _ => FilterResult::FilterOut,
        }
    }
}

/// Keep the clients the filter accepts, preserving source order
pub fn filter_clients<F: ClientFilter>(clients: Vec<Client>, filter: &F) -> Vec<Client> {
    clients
        .into_iter()
        .filter(|client| filter.should_keep(client) == FilterResult::Keep)
        .collect()
}
