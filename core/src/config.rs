//! Process-wide client configuration.

/// Root address of the JSONPlaceholder service.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Immutable configuration shared by every request of a run.
///
/// Built once at startup and never mutated. Endpoints are appended to
/// `base_url` verbatim, so the value is stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
