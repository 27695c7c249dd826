//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::Error;

/// Error for a required field that was absent or `null`.
pub(crate) fn missing_field_error(field: &'static str) -> Error {
    Error::validation_failed(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

/// Unwrap an optional request field or report it missing.
pub(crate) fn require<T>(value: Option<T>, field: &'static str) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[test]
    fn require_passes_present_values_through() {
        assert_eq!(require(Some(3), "year").expect("present"), 3);
    }

    #[test]
    fn require_reports_missing_field() {
        let error = require::<String>(None, "email").expect_err("missing");

        assert_eq!(error.code(), ErrorCode::ValidationFailed);
        assert_eq!(error.message(), "missing required field: email");
        assert_eq!(
            error.details(),
            Some(&json!({"field": "email", "code": "missing_field"}))
        );
    }
}
