use std::time::Duration;

use crate::error::LoadError;

/// Retrieval of a locale resource body. The seam tests use to stand in
/// a canned server.
pub trait Transport: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, LoadError>;
}

/// Blocking HTTP transport: a plain GET with no body, no custom
/// headers, and no authentication.
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_read(Duration::from_secs(30))
            .timeout_write(Duration::from_secs(30))
            .build();
        Self { agent }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str) -> Result<String, LoadError> {
        match self.agent.get(url).call() {
            Ok(response) => response.into_string().map_err(|e| LoadError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            }),
            Err(ureq::Error::Status(status, _)) => Err(LoadError::Http {
                url: url.to_string(),
                status,
            }),
            Err(e) => Err(LoadError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
