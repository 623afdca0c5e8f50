//! Ordered STUN server list with the never-empty invariant

use crate::error::{CoreError, CoreResult};

/// Address inserted when the list would otherwise become empty
pub const DEFAULT_STUN_SERVER: &str = "stun.example.com:443";

/// Ordered list of `host:port` strings, one per editor row.
///
/// The list is never empty: constructing it from nothing or removing the
/// last row leaves a single placeholder entry behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerList {
    servers: Vec<String>,
    placeholder: String,
}

impl ServerList {
    /// Create a list from `servers`; an empty input yields one `placeholder` row.
    #[must_use]
    pub fn new(servers: Vec<String>, placeholder: impl Into<String>) -> Self {
        let mut list = Self {
            servers,
            placeholder: placeholder.into(),
        };
        list.ensure_not_empty();
        list
    }

    /// List holding only the placeholder row
    #[must_use]
    pub fn placeholder_only(placeholder: impl Into<String>) -> Self {
        Self::new(Vec::new(), placeholder)
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn as_slice(&self) -> &[String] {
        &self.servers
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.servers.clone()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    /// Always `false` outside of an in-progress mutation.
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.servers.get(index).map(String::as_str)
    }

    /// Append an empty row, returning its index.
    pub fn push_empty(&mut self) -> usize {
        self.servers.push(String::new());
        self.servers.len() - 1
    }

    /// Remove the row at `index`, re-inserting the placeholder if the list empties.
    pub fn remove(&mut self, index: usize) -> CoreResult<String> {
        self.check_index(index)?;
        let removed = self.servers.remove(index);
        self.ensure_not_empty();
        Ok(removed)
    }

    /// Replace the row at `index`. No format validation is applied.
    pub fn set(&mut self, index: usize, value: String) -> CoreResult<()> {
        self.check_index(index)?;
        self.servers[index] = value;
        Ok(())
    }

    /// Replace the whole list, keeping the invariant.
    pub fn replace(&mut self, servers: Vec<String>) {
        self.servers = servers;
        self.ensure_not_empty();
    }

    fn check_index(&self, index: usize) -> CoreResult<()> {
        if index < self.servers.len() {
            Ok(())
        } else {
            Err(CoreError::IndexOutOfRange {
                index,
                len: self.servers.len(),
            })
        }
    }

    fn ensure_not_empty(&mut self) {
        if self.servers.is_empty() {
            self.servers.push(self.placeholder.clone());
        }
    }
}

impl Default for ServerList {
    fn default() -> Self {
        Self::placeholder_only(DEFAULT_STUN_SERVER)
    }
}
