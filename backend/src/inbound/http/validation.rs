//! Shared validation helpers for inbound HTTP adapters.
//!
//! Extractor failures and malformed path segments are turned into
//! `invalid_request` domain errors so every 400 response carries the same
//! JSON envelope as the rest of the API.

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use serde_json::json;
use tracing::debug;

use crate::domain::{AccountId, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidAccountId,
    InvalidBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidAccountId => "invalid_account_id",
            Self::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn invalid_account_id_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a positive integer")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidAccountId.as_str(),
    }))
}

/// Parse a raw path segment into an [`AccountId`].
pub(crate) fn parse_account_id(value: &str, field: FieldName) -> Result<AccountId, Error> {
    value
        .parse::<i64>()
        .ok()
        .and_then(|raw| AccountId::new(raw).ok())
        .ok_or_else(|| invalid_account_id_error(field, value))
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejected request body");
    Error::invalid_request(format!("invalid request body: {err}"))
        .with_details(json!({ "code": ErrorCode::InvalidBody.as_str() }))
        .into()
}

/// JSON extractor configuration mapping body errors onto the API envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1)]
    #[case("9000", 9000)]
    fn parses_positive_ids(#[case] raw: &str, #[case] expected: i64) {
        let id = parse_account_id(raw, FieldName::new("id")).expect("valid id");
        assert_eq!(id.get(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-4")]
    #[case("abc")]
    #[case("1.5")]
    fn rejects_invalid_ids(#[case] raw: &str) {
        let error = parse_account_id(raw, FieldName::new("id")).expect_err("invalid id");
        assert_eq!(error.code(), DomainErrorCode::InvalidRequest);
        let details = error.details().expect("details");
        assert_eq!(details["code"], "invalid_account_id");
        assert_eq!(details["value"], raw);
    }
}
