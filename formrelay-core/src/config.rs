//! Centralized configuration for Formrelay.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

/// Central configuration for the submission relay.
///
/// Groups related configuration settings into logical sections.
#[derive(Debug, Clone, Default)]
pub struct RelayConfig {
    /// Endpoint and HTTP settings
    pub network: NetworkConfig,
    /// Form identification settings
    pub form: FormConfig,
}

/// Endpoint and HTTP communication configuration.
///
/// There is deliberately no request timeout: a submission attempt resolves
/// only when the transport succeeds or fails on its own.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Base URL of the server receiving submissions
    pub endpoint: String,
    /// Path the form posts to, relative to the endpoint
    pub submit_path: &'static str,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000".to_string(),
            submit_path: "/submit",
            user_agent: "formrelay/0.1.0",
        }
    }
}

/// Form identification configuration.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Identifier of the form the handler binds to
    pub form_id: &'static str,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: "dataForm",
        }
    }
}
