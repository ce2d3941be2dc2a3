//! `x-request-id` handling.

use std::fmt;

use salvo::{http::header::HeaderValue, prelude::Response};
use tracing::warn;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied request id echoed back.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Correlates a request's log lines, spans and response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RequestId(String);

impl RequestId {
    /// Reuse the caller's id when it is short printable ASCII, otherwise mint a v7 UUID.
    pub(super) fn from_header(value: Option<&str>) -> Self {
        value
            .map(str::trim)
            .filter(|value| is_acceptable(value))
            .map_or_else(Self::generate, |value| Self(value.to_owned()))
    }

    fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub(super) fn write_header(&self, res: &mut Response) {
        match HeaderValue::from_str(&self.0) {
            Ok(value) => {
                res.headers_mut().insert(REQUEST_ID_HEADER, value);
            }
            Err(source) => warn!(request_id = %self, "could not encode request id: {source}"),
        }
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_acceptable(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_REQUEST_ID_LEN
        && value.bytes().all(|b| b.is_ascii_graphic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_ids_are_trimmed_and_reused() {
        assert_eq!(
            RequestId::from_header(Some("  abc-123 ")).to_string(),
            "abc-123"
        );
    }

    #[test]
    fn missing_or_blank_ids_are_generated() {
        for header in [None, Some(""), Some("   ")] {
            let id = RequestId::from_header(header).to_string();

            assert!(
                Uuid::parse_str(&id).is_ok(),
                "{header:?} should produce a uuid, got {id}"
            );
        }
    }

    #[test]
    fn oversized_or_unprintable_ids_are_replaced() {
        let long = "a".repeat(MAX_REQUEST_ID_LEN + 1);

        for header in [long.as_str(), "has space", "caf\u{e9}"] {
            assert_ne!(
                RequestId::from_header(Some(header)).to_string(),
                header,
                "{header} should not be echoed"
            );
        }
    }
}
