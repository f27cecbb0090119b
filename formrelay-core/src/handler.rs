//! Submission handler binding a form source to an endpoint.

use std::sync::Arc;

use url::Url;

use crate::config::RelayConfig;
use crate::errors::SubmitError;
use crate::form::FormSource;
use crate::notify::Notifier;
use crate::snapshot::FormSnapshot;

/// Notification text delivered when a submission succeeds.
pub const SUCCESS_MESSAGE: &str = "Data submitted successfully!";

/// Prefix of the notification delivered when a submission fails.
pub const FAILURE_PREFIX: &str = "Error submitting data: ";

/// Relays form submissions to a fixed endpoint.
///
/// Bound to one form source and one notifier at initialization. Each call to
/// [`submit`](Self::submit) captures the form's current fields, POSTs them as
/// multipart form data, and delivers exactly one notification: the fixed
/// success message when the response body parses as JSON, or the failure
/// prefix plus the error's description otherwise.
#[derive(Debug, Clone)]
pub struct SubmissionHandler {
    form: Arc<dyn FormSource>,
    notifier: Arc<dyn Notifier>,
    client: reqwest::Client,
    submit_url: Url,
}

impl SubmissionHandler {
    /// Binds a handler to a form source, endpoint, and notification sink.
    ///
    /// The form must exist when the handler is bound; there is no deferred
    /// lookup at submission time.
    ///
    /// # Errors
    ///
    /// - `SubmitError::InvalidEndpoint` - If the configured endpoint is not a valid URL
    /// - `SubmitError::RequestFailed` - If the HTTP client cannot be constructed
    pub fn bind(
        form: Arc<dyn FormSource>,
        config: RelayConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, SubmitError> {
        let endpoint =
            Url::parse(&config.network.endpoint).map_err(|e| SubmitError::InvalidEndpoint {
                url: config.network.endpoint.clone(),
                reason: e.to_string(),
            })?;

        // An absolute submit path replaces any path on the endpoint, matching
        // how a page-relative "/submit" resolves against the origin.
        let submit_url =
            endpoint
                .join(config.network.submit_path)
                .map_err(|e| SubmitError::InvalidEndpoint {
                    url: config.network.endpoint.clone(),
                    reason: e.to_string(),
                })?;

        let client = reqwest::Client::builder()
            .user_agent(config.network.user_agent)
            .build()
            .map_err(|e| SubmitError::RequestFailed {
                reason: format!("client construction failed: {e}"),
            })?;

        tracing::debug!(
            form_id = form.form_id(),
            url = %submit_url,
            "submission handler bound"
        );

        Ok(Self {
            form,
            notifier,
            client,
            submit_url,
        })
    }

    /// URL submissions are posted to.
    pub fn submit_url(&self) -> &Url {
        &self.submit_url
    }

    /// Submits the form's current fields.
    ///
    /// Captures a snapshot, relays it, and notifies the outcome. Overlapping
    /// calls are independent: each owns its snapshot and produces its own
    /// notification. The form source itself is never mutated.
    pub async fn submit(&self) {
        let snapshot = FormSnapshot::capture(self.form.as_ref());
        tracing::debug!(
            form_id = snapshot.form_id(),
            fields = snapshot.len(),
            "captured form snapshot"
        );

        match self.relay(snapshot).await {
            Ok(_) => self.notifier.notify(SUCCESS_MESSAGE),
            Err(error) => {
                tracing::warn!(%error, "form submission failed");
                self.notifier.notify(&format!("{FAILURE_PREFIX}{error}"));
            }
        }
    }

    /// POSTs the snapshot and parses the response body as JSON.
    ///
    /// The response status is deliberately not examined: a non-2xx response
    /// whose body is valid JSON still resolves the success path. The parsed
    /// value is returned but callers only use it to pick a notification.
    async fn relay(&self, snapshot: FormSnapshot) -> Result<serde_json::Value, SubmitError> {
        let response = self
            .client
            .post(self.submit_url.clone())
            .multipart(snapshot.into_multipart())
            .send()
            .await
            .map_err(|e| SubmitError::RequestFailed {
                reason: e.to_string(),
            })?;

        response
            .json()
            .await
            .map_err(|e| SubmitError::InvalidResponse {
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetworkConfig;
    use crate::form::MemoryForm;
    use crate::notify::MemoryNotifier;

    fn bind_with_endpoint(endpoint: &str) -> Result<SubmissionHandler, SubmitError> {
        let config = RelayConfig {
            network: NetworkConfig {
                endpoint: endpoint.to_string(),
                ..NetworkConfig::default()
            },
            ..RelayConfig::default()
        };
        SubmissionHandler::bind(
            Arc::new(MemoryForm::default()),
            config,
            Arc::new(MemoryNotifier::new()),
        )
    }

    #[test]
    fn test_bind_resolves_submit_url() {
        let handler = bind_with_endpoint("http://127.0.0.1:5000").unwrap();
        assert_eq!(handler.submit_url().as_str(), "http://127.0.0.1:5000/submit");
    }

    #[test]
    fn test_bind_rejects_invalid_endpoint() {
        let result = bind_with_endpoint("not a url");
        assert!(matches!(
            result,
            Err(SubmitError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_submit_path_replaces_endpoint_path() {
        // "/submit" is origin-relative, as it is for a page-hosted form
        let handler = bind_with_endpoint("http://127.0.0.1:5000/dashboard").unwrap();
        assert_eq!(handler.submit_url().path(), "/submit");
    }
}
