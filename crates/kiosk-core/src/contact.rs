//! Contact form submission.
//!
//! One outbound POST to the form's action URL: body is the form-encoded
//! fields, with an `Accept: application/json` header. Any HTTP-ok status is
//! a success; a non-ok status and a transport failure both land in the same
//! user-visible error state (the distinction is logged, not surfaced).
//!
//! No retry, no timeout, no cancellation.

use serde::Serialize;

/// The fields of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    /// Clears all fields (the post-success form reset).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// HTTP-ok response.
    Accepted,
    /// Response arrived but with a non-ok status.
    Rejected { status: u16 },
    /// The request never produced a response.
    Failed { error: String },
}

impl SubmitOutcome {
    /// Collapses the outcome into the success/error banner branch.
    pub fn is_ok(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

/// Submits the contact form to `action`.
///
/// Never returns an error: every failure mode maps onto a [`SubmitOutcome`]
/// variant so the caller has a single branch to drive the banners from.
pub async fn submit(
    client: &reqwest::Client,
    action: &str,
    fields: &ContactFields,
) -> SubmitOutcome {
    let result = client
        .post(action)
        .header(reqwest::header::ACCEPT, "application/json")
        .form(fields)
        .send()
        .await;

    match result {
        Ok(response) if response.status().is_success() => {
            tracing::info!(action, "contact form accepted");
            SubmitOutcome::Accepted
        }
        Ok(response) => {
            let status = response.status().as_u16();
            tracing::warn!(action, status, "contact form rejected");
            SubmitOutcome::Rejected { status }
        }
        Err(e) => {
            tracing::warn!(action, error = %e, "contact form submission failed");
            SubmitOutcome::Failed {
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_fields() -> ContactFields {
        ContactFields {
            name: "Mari".to_string(),
            email: "mari@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_ok_status_is_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/f/abc123"))
            .and(header("Accept", "application/json"))
            .and(body_string_contains("name=Mari"))
            .and(body_string_contains("email=mari%40example.com"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let outcome = submit(
            &client,
            &format!("{}/f/abc123", server.uri()),
            &sample_fields(),
        )
        .await;

        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn test_submit_non_ok_status_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let outcome = submit(&client, &server.uri(), &sample_fields()).await;

        assert_eq!(outcome, SubmitOutcome::Rejected { status: 422 });
        assert!(!outcome.is_ok());
    }

    #[tokio::test]
    async fn test_submit_transport_failure_is_failed() {
        // .invalid is a reserved TLD, so resolution always fails; no_proxy
        // keeps an ambient HTTP proxy from answering in DNS's stead.
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        let outcome = submit(&client, "http://kiosk.invalid/", &sample_fields()).await;

        assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
        assert!(!outcome.is_ok());
    }

    #[test]
    fn test_fields_reset_clears_everything() {
        let mut fields = sample_fields();
        fields.reset();
        assert!(fields.is_empty());
    }
}
