use async_trait::async_trait;
use gloo_net::http::Request;
use log::{info, warn};
use serde_json::Value;

use crate::admission::inquiry::AdmissionInquiry;

pub const GENERIC_FAILURE: &str = "Submission failed";
pub const TEMPORARY_ISSUE: &str = "We encountered a temporary issue. Please try again.";
pub const LOCALHOST_CORS_WARNING: &str =
    "Submission Warning (Localhost): CORs restriction prevented submission. Use server for testing.";

#[derive(Clone, Debug, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced an HTTP response (offline, refused, CORS).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

pub type TransportResult = Result<TransportResponse, TransportError>;

#[async_trait(?Send)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: &str) -> TransportResult;
}

/// `fetch` through gloo-net.
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: &str) -> TransportResult {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(TransportResponse { status, body })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Endpoints {
    /// Same-origin relay, tried first.
    pub relay: String,
    /// The admissions API itself, only reachable where CORS allows it.
    pub upstream: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected { status: u16, message: String },
    Unreachable { reason: String },
}

/// Whether the relay attempt earns a second try against the upstream.
///
/// Only a missing relay counts: no response at all, 404 (not deployed on
/// this host) or 405 (static host refusing POST). Anything else came from
/// a working relay and is final.
pub fn should_fall_back(primary: &TransportResult) -> bool {
    match primary {
        Err(_) => true,
        Ok(response) => matches!(response.status, 404 | 405),
    }
}

/// Relay first, then at most one direct attempt, strictly in sequence.
pub async fn submit_inquiry<T>(transport: &T, endpoints: &Endpoints, inquiry: &AdmissionInquiry) -> SubmissionOutcome
where
    T: Transport + ?Sized,
{
    let body = match serde_json::to_string(inquiry) {
        Ok(body) => body,
        Err(e) => return SubmissionOutcome::Unreachable { reason: e.to_string() },
    };

    let primary = transport.post_json(&endpoints.relay, &body).await;
    if let Err(e) = &primary {
        warn!("Relay connection failed, trying direct: {}", e);
    }

    let last = if should_fall_back(&primary) {
        info!("Falling back to direct API connection...");
        transport.post_json(&endpoints.upstream, &body).await
    } else {
        primary
    };

    match last {
        Ok(response) if response.ok() => SubmissionOutcome::Accepted,
        Ok(response) => {
            warn!("Submission failed with status {}: {}", response.status, response.body);
            SubmissionOutcome::Rejected {
                status: response.status,
                message: rejection_message(&response.body),
            }
        }
        Err(e) => SubmissionOutcome::Unreachable { reason: e.to_string() },
    }
}

/// Best-effort message from an error body: the API's `message`, then the
/// relay's `error`, then a generic string.
pub fn rejection_message(body: &str) -> String {
    let parsed: Value = serde_json::from_str(body).unwrap_or(Value::Null);
    ["message", "error"]
        .iter()
        .filter_map(|key| parsed.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

pub fn is_local_host(hostname: &str) -> bool {
    hostname == "localhost" || hostname == "127.0.0.1"
}

/// The inline text for an outcome that did not go through.
pub fn failure_notice(outcome: &SubmissionOutcome, hostname: &str) -> Option<String> {
    match outcome {
        SubmissionOutcome::Accepted => None,
        SubmissionOutcome::Rejected { message, .. } => Some(message.clone()),
        SubmissionOutcome::Unreachable { .. } if is_local_host(hostname) => {
            Some(LOCALHOST_CORS_WARNING.to_string())
        }
        SubmissionOutcome::Unreachable { .. } => Some(TEMPORARY_ISSUE.to_string()),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::test_support::*;
    use futures::executor::block_on;

    #[test]
    fn fallback_predicate_only_covers_missing_relay() {
        assert!(should_fall_back(&offline()));
        assert!(should_fall_back(&respond(404, "")));
        assert!(should_fall_back(&respond(405, "")));

        for status in [200, 201, 400, 403, 422, 500, 502, 504] {
            assert!(!should_fall_back(&respond(status, "")), "status {}", status);
        }
    }

    #[test]
    fn relay_success_needs_one_call() {
        let transport = ScriptedTransport::new(vec![respond(200, "{}")]);
        let outcome = block_on(submit_inquiry(&transport, &endpoints(), &inquiry()));

        assert_eq!(outcome, SubmissionOutcome::Accepted);
        assert_eq!(transport.urls(), vec![RELAY.to_string()]);
    }

    #[test]
    fn relay_404_and_405_fall_back_exactly_once() {
        for status in [404, 405] {
            let transport = ScriptedTransport::new(vec![respond(status, ""), respond(201, "{}")]);
            let outcome = block_on(submit_inquiry(&transport, &endpoints(), &inquiry()));

            assert_eq!(outcome, SubmissionOutcome::Accepted);
            assert_eq!(transport.urls(), vec![RELAY.to_string(), UPSTREAM.to_string()]);
            let calls = transport.calls.borrow();
            assert_eq!(calls[0].1, calls[1].1, "fallback must resend the same payload");
        }
    }

    #[test]
    fn unreachable_relay_falls_back() {
        let transport = ScriptedTransport::new(vec![offline(), respond(200, "{}")]);
        let outcome = block_on(submit_inquiry(&transport, &endpoints(), &inquiry()));

        assert_eq!(outcome, SubmissionOutcome::Accepted);
        assert_eq!(transport.calls.borrow().len(), 2);
    }

    #[test]
    fn other_relay_failures_are_final() {
        let transport = ScriptedTransport::new(vec![respond(500, r#"{"error":"Proxy Error: timed out"}"#)]);
        let outcome = block_on(submit_inquiry(&transport, &endpoints(), &inquiry()));

        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected { status: 500, message: "Proxy Error: timed out".to_string() }
        );
        assert_eq!(transport.urls(), vec![RELAY.to_string()]);
    }

    #[test]
    fn fallback_rejection_carries_api_message() {
        let transport = ScriptedTransport::new(vec![
            respond(404, "<html>not found</html>"),
            respond(422, r#"{"message":"Email already booked"}"#),
        ]);
        let outcome = block_on(submit_inquiry(&transport, &endpoints(), &inquiry()));

        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected { status: 422, message: "Email already booked".to_string() }
        );
    }

    #[test]
    fn both_paths_down_is_unreachable() {
        let transport = ScriptedTransport::new(vec![offline(), offline()]);
        let outcome = block_on(submit_inquiry(&transport, &endpoints(), &inquiry()));

        assert!(matches!(outcome, SubmissionOutcome::Unreachable { .. }));
        assert_eq!(transport.calls.borrow().len(), 2);
    }

    #[test]
    fn payload_goes_out_with_age_key() {
        let transport = ScriptedTransport::new(vec![respond(200, "{}")]);
        block_on(submit_inquiry(&transport, &endpoints(), &inquiry()));

        let body: Value = serde_json::from_str(&transport.calls.borrow()[0].1).unwrap();
        assert_eq!(body["age"], "10");
        assert!(body.get("childAge").is_none());
    }

    #[test]
    fn rejection_message_prefers_message_then_error() {
        assert_eq!(rejection_message(r#"{"message":"Bad phone","error":"x"}"#), "Bad phone");
        assert_eq!(rejection_message(r#"{"error":"Invalid JSON"}"#), "Invalid JSON");
        assert_eq!(rejection_message(r#"{"message":"  "}"#), GENERIC_FAILURE);
        assert_eq!(rejection_message("<html>502</html>"), GENERIC_FAILURE);
        assert_eq!(rejection_message(""), GENERIC_FAILURE);
    }

    #[test]
    fn unreachable_notice_depends_on_host() {
        let outcome = SubmissionOutcome::Unreachable { reason: "Failed to fetch".to_string() };
        assert_eq!(failure_notice(&outcome, "localhost").as_deref(), Some(LOCALHOST_CORS_WARNING));
        assert_eq!(failure_notice(&outcome, "127.0.0.1").as_deref(), Some(LOCALHOST_CORS_WARNING));
        assert_eq!(failure_notice(&outcome, "hashfuture.school").as_deref(), Some(TEMPORARY_ISSUE));
        assert_eq!(failure_notice(&SubmissionOutcome::Accepted, "localhost"), None);
    }
}
