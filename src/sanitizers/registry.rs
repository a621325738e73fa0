use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

use crate::sanitizers::{InosmiSanitizer, SanitizeError, Sanitizer};

/// Registry key for a URL: its host, plus the port when one is explicit.
pub fn host_key(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// Sanitizers by host
#[derive(Default, Clone)]
pub struct SanitizerRegistry {
    sanitizers: HashMap<String, Arc<dyn Sanitizer>>,
}

impl SanitizerRegistry {
    pub fn new() -> Self {
        Self {
            sanitizers: HashMap::new(),
        }
    }

    /// Registry with every built-in site rule.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(InosmiSanitizer::new());
        registry
    }

    /// Register a sanitizer under its own host
    pub fn register<S: Sanitizer + 'static>(&mut self, sanitizer: S) {
        let host = sanitizer.host().to_lowercase();
        self.sanitizers.insert(host, Arc::new(sanitizer));
    }

    /// Register a sanitizer under an arbitrary host (mirrors, staging hosts).
    pub fn register_for(&mut self, host: impl Into<String>, sanitizer: Arc<dyn Sanitizer>) {
        self.sanitizers.insert(host.into().to_lowercase(), sanitizer);
    }

    /// Find the sanitizer responsible for `url`.
    pub fn resolve(&self, url: &str) -> Result<Arc<dyn Sanitizer>, SanitizeError> {
        let parsed = Url::parse(url).map_err(|_| SanitizeError::InvalidUrl(url.to_string()))?;
        let host = host_key(&parsed).ok_or_else(|| SanitizeError::InvalidUrl(url.to_string()))?;

        self.sanitizers
            .get(&host)
            .cloned()
            .ok_or(SanitizeError::UnsupportedHost(host))
    }

    /// All registered hosts, sorted
    pub fn registered_hosts(&self) -> Vec<&str> {
        let mut hosts: Vec<&str> = self.sanitizers.keys().map(String::as_str).collect();
        hosts.sort_unstable();
        hosts
    }
}

impl std::fmt::Debug for SanitizerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SanitizerRegistry")
            .field("hosts", &self.registered_hosts())
            .finish()
    }
}
