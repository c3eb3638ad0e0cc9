//! Request validation rules.
//!
//! Checks run in a fixed order and the first failure wins: method, body
//! presence, table match, event-specific shape, then the API key. The
//! error messages are part of the endpoint contract.

use rowhook_core::EventKind;
use thiserror::Error;

use crate::payload::ChangePayload;

/// First failing validation check for an inbound request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Method not allowed")]
    MethodNotPost,
    #[error("Body is malformed (missing)")]
    MissingBody,
    #[error("Body is malformed (table)")]
    TableMismatch,
    #[error("Body is malformed (type)")]
    TypeMismatch,
    #[error("Body is malformed (record)")]
    MissingRecord,
    #[error("Body is malformed (new record)")]
    MissingNewRecord,
    #[error("Body is malformed (old record)")]
    MissingOldRecord,
    #[error("API key is not valid or not provided")]
    BadApiKey,
}

/// Validate one inbound request against a hook's configuration.
///
/// Returns the payload on success so callers past this point never see
/// an absent body.
pub fn validate_request<'a>(
    method: &str,
    table: &str,
    event: EventKind,
    api_key: &str,
    provided_key: Option<&str>,
    payload: Option<&'a ChangePayload>,
) -> Result<&'a ChangePayload, ValidationError> {
    if method != "POST" {
        return Err(ValidationError::MethodNotPost);
    }

    let payload = payload.ok_or(ValidationError::MissingBody)?;

    if payload.table.as_deref() != Some(table) {
        return Err(ValidationError::TableMismatch);
    }

    match event {
        EventKind::RowCreated => {
            if payload.kind.as_deref() != Some("INSERT") {
                return Err(ValidationError::TypeMismatch);
            }
            if payload.record.is_none() {
                return Err(ValidationError::MissingRecord);
            }
        }
        EventKind::RowUpdated => {
            if payload.record.is_none() {
                return Err(ValidationError::MissingNewRecord);
            }
            if payload.old_record.is_none() {
                return Err(ValidationError::MissingOldRecord);
            }
        }
    }

    match provided_key {
        Some(provided) if !api_key.is_empty() && provided == api_key => Ok(payload),
        _ => Err(ValidationError::BadApiKey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn insert_payload() -> ChangePayload {
        ChangePayload {
            table: Some("users".to_string()),
            kind: Some("INSERT".to_string()),
            record: Some(json!({"id": 1})),
            old_record: None,
        }
    }

    fn update_payload() -> ChangePayload {
        ChangePayload {
            table: Some("users".to_string()),
            kind: Some("UPDATE".to_string()),
            record: Some(json!({"id": 1})),
            old_record: Some(json!({"id": 1, "name": "old"})),
        }
    }

    fn check(
        method: &str,
        event: EventKind,
        provided_key: Option<&str>,
        payload: Option<&ChangePayload>,
    ) -> Result<(), ValidationError> {
        validate_request(method, "users", event, "s3cr3t", provided_key, payload).map(|_| ())
    }

    #[test]
    fn accepts_a_well_formed_insert() {
        let payload = insert_payload();
        assert!(check("POST", EventKind::RowCreated, Some("s3cr3t"), Some(&payload)).is_ok());
    }

    #[test]
    fn accepts_a_well_formed_update() {
        let payload = update_payload();
        assert!(check("POST", EventKind::RowUpdated, Some("s3cr3t"), Some(&payload)).is_ok());
    }

    #[test]
    fn rejects_non_post_methods_first() {
        // Method is checked before anything else, body included.
        let err = check("GET", EventKind::RowCreated, Some("s3cr3t"), None).unwrap_err();
        assert_eq!(err, ValidationError::MethodNotPost);
    }

    #[test]
    fn rejects_a_missing_body() {
        let err = check("POST", EventKind::RowCreated, Some("s3cr3t"), None).unwrap_err();
        assert_eq!(err, ValidationError::MissingBody);
    }

    #[test]
    fn rejects_a_table_mismatch() {
        let mut payload = insert_payload();
        payload.table = Some("orders".to_string());
        let err = check("POST", EventKind::RowCreated, Some("s3cr3t"), Some(&payload)).unwrap_err();
        assert_eq!(err, ValidationError::TableMismatch);
    }

    #[test]
    fn create_hooks_require_insert_type() {
        let mut payload = insert_payload();
        payload.kind = Some("UPDATE".to_string());
        let err = check("POST", EventKind::RowCreated, Some("s3cr3t"), Some(&payload)).unwrap_err();
        assert_eq!(err, ValidationError::TypeMismatch);
    }

    #[test]
    fn create_hooks_require_a_record() {
        let mut payload = insert_payload();
        payload.record = None;
        let err = check("POST", EventKind::RowCreated, Some("s3cr3t"), Some(&payload)).unwrap_err();
        assert_eq!(err, ValidationError::MissingRecord);
    }

    #[test]
    fn update_hooks_require_both_record_versions() {
        let mut payload = update_payload();
        payload.old_record = None;
        let err = check("POST", EventKind::RowUpdated, Some("s3cr3t"), Some(&payload)).unwrap_err();
        assert_eq!(err, ValidationError::MissingOldRecord);

        let mut payload = update_payload();
        payload.record = None;
        let err = check("POST", EventKind::RowUpdated, Some("s3cr3t"), Some(&payload)).unwrap_err();
        assert_eq!(err, ValidationError::MissingNewRecord);
    }

    #[test]
    fn rejects_wrong_or_absent_api_keys() {
        let payload = insert_payload();
        let err =
            check("POST", EventKind::RowCreated, Some("wrong"), Some(&payload)).unwrap_err();
        assert_eq!(err, ValidationError::BadApiKey);

        let err = check("POST", EventKind::RowCreated, None, Some(&payload)).unwrap_err();
        assert_eq!(err, ValidationError::BadApiKey);
    }

    #[test]
    fn key_comparison_is_exact() {
        let payload = insert_payload();
        let err = validate_request(
            "POST",
            "users",
            EventKind::RowCreated,
            "s3cr3t",
            Some("S3CR3T"),
            Some(&payload),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::BadApiKey);
    }
}
