//! Backend response envelope parsing and normalization.
//!
//! The backend wraps most payloads in
//! `{ dataResponse: { idTx, response }, data, message, error: [...] }`,
//! but not consistently: listings arrive as a bare array, as `{data: [...]}`
//! or as `{data: {content: [...]}}`, and create/update success is signalled
//! three different ways depending on the endpoint. Everything that tolerates
//! that inconsistency lives here so the services stay uniform.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the backend's field-level error array.
///
/// On this backend `msgError` carries the target field name, not a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(rename = "codError", default)]
    pub code: Option<String>,
    #[serde(rename = "descError", default)]
    pub description: Option<String>,
    #[serde(rename = "msgError", default)]
    pub field_name: Option<String>,
}

/// Result of a create/update/delete as the pages consume it.
///
/// Services never throw past their boundary; this is the only failure
/// signal for mutations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationOutcome {
    pub ok: bool,
    pub message: Option<String>,
    pub id: Option<i64>,
    pub field_errors: Vec<FieldError>,
}

impl MutationOutcome {
    pub fn success(message: Option<String>, id: Option<i64>) -> Self {
        Self {
            ok: true,
            message,
            id,
            field_errors: Vec::new(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
            id: None,
            field_errors: Vec::new(),
        }
    }
}

/// Normalize the three observed listing shapes to a plain array.
///
/// Bare array, `{data: [...]}` and `{data: {content: [...]}}` all yield the
/// same items; any other shape yields an empty vec.
pub fn extract_items(body: &Value) -> Vec<Value> {
    if let Some(items) = body.as_array() {
        return items.clone();
    }
    match body.get("data") {
        Some(Value::Array(items)) => items.clone(),
        Some(data) => data
            .get("content")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
        None => Vec::new(),
    }
}

/// Total element count, when the paged shape carries one.
///
/// Only `{data: {content, totalElements}}` responses expose it; the
/// free-text search paths usually do not.
pub fn extract_total_elements(body: &Value) -> Option<u64> {
    body.get("data")?.get("totalElements")?.as_u64()
}

/// Success discrimination for create/update/delete responses.
///
/// Priority chain, preserved as observed across endpoints:
/// envelope `dataResponse.response == "SUCCESS"`, else bare
/// `status == "SUCCESS"`, else presence of an id (top level or under
/// `data`).
pub fn is_success(body: &Value) -> bool {
    if let Some(resp) = body
        .get("dataResponse")
        .and_then(|dr| dr.get("response"))
        .and_then(Value::as_str)
    {
        return resp.eq_ignore_ascii_case("SUCCESS");
    }
    if let Some(status) = body.get("status").and_then(Value::as_str) {
        return status.eq_ignore_ascii_case("SUCCESS");
    }
    extract_id(body).is_some()
}

/// Id of a freshly created record, wherever the endpoint put it.
pub fn extract_id(body: &Value) -> Option<i64> {
    if let Some(id) = body.get("id").and_then(Value::as_i64) {
        return Some(id);
    }
    body.get("data")?.get("id")?.as_i64()
}

/// Best-effort user-facing message from an error response.
///
/// Priority chain, also a contract: first field error's description, else
/// the generic `message` field, else the caller's fallback. The UI depends
/// on getting the most specific message available.
pub fn extract_message(body: &Value, fallback: &str) -> String {
    if let Some(desc) = body
        .get("error")
        .and_then(Value::as_array)
        .and_then(|errs| errs.first())
        .and_then(|e| e.get("descError"))
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
    {
        return desc.to_string();
    }
    if let Some(msg) = body
        .get("message")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
    {
        return msg.to_string();
    }
    fallback.to_string()
}

/// Parse the backend's `error` array into field errors, tolerating missing
/// members on each entry.
pub fn field_errors(body: &Value) -> Vec<FieldError> {
    body.get("error")
        .and_then(Value::as_array)
        .map(|errs| {
            errs.iter()
                .filter_map(|e| serde_json::from_value(e.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn extract_items_bare_array() {
        let body = json!([{"id": 1}, {"id": 2}]);
        assert_eq!(extract_items(&body).len(), 2);
    }

    #[test]
    fn extract_items_data_array() {
        let body = json!({"data": [{"id": 1}, {"id": 2}]});
        assert_eq!(extract_items(&body).len(), 2);
    }

    #[test]
    fn extract_items_paged_content() {
        let body = json!({"data": {"content": [{"id": 1}, {"id": 2}], "totalElements": 9}});
        assert_eq!(extract_items(&body).len(), 2);
        assert_eq!(extract_total_elements(&body), Some(9));
    }

    #[test]
    fn extract_items_same_result_for_all_shapes() {
        let items = json!([{"id": 7, "nombre": "A"}]);
        let shapes = [
            items.clone(),
            json!({"data": items.clone()}),
            json!({"data": {"content": items.clone()}}),
        ];
        for shape in &shapes {
            assert_eq!(extract_items(shape), items.as_array().unwrap().clone());
        }
    }

    #[test]
    fn extract_items_unknown_shape_is_empty() {
        assert!(extract_items(&json!({"message": "nope"})).is_empty());
        assert!(extract_items(&json!(null)).is_empty());
    }

    #[test]
    fn success_via_envelope_flag() {
        let body = json!({"dataResponse": {"idTx": null, "response": "SUCCESS"}});
        assert!(is_success(&body));
        let body = json!({"dataResponse": {"idTx": "tx-1", "response": "ERROR"}, "id": 5});
        // Envelope verdict wins over the id heuristic.
        assert!(!is_success(&body));
    }

    #[test]
    fn success_via_bare_status() {
        assert!(is_success(&json!({"status": "SUCCESS"})));
        assert!(!is_success(&json!({"status": "ERROR"})));
    }

    #[test]
    fn success_via_id_presence() {
        assert!(is_success(&json!({"id": 42})));
        assert!(is_success(&json!({"data": {"id": 42}})));
        assert!(!is_success(&json!({"message": "created maybe"})));
    }

    #[test]
    fn message_prefers_field_error_description() {
        let body = json!({
            "error": [{"codError": "V01", "descError": "nombre requerido", "msgError": "nombre"}],
            "message": "validation failed"
        });
        assert_eq!(extract_message(&body, "fallback"), "nombre requerido");
    }

    #[test]
    fn message_falls_back_to_generic_then_hardcoded() {
        let body = json!({"message": "validation failed"});
        assert_eq!(extract_message(&body, "fallback"), "validation failed");
        assert_eq!(extract_message(&json!({}), "fallback"), "fallback");
        // Blank strings do not count as messages.
        let body = json!({"error": [{"descError": "  "}], "message": ""});
        assert_eq!(extract_message(&body, "fallback"), "fallback");
    }

    #[test]
    fn field_errors_tolerate_partial_entries() {
        let body = json!({"error": [
            {"codError": "V01", "descError": "requerido", "msgError": "nombre"},
            {"descError": "demasiado largo"}
        ]});
        let errs = field_errors(&body);
        assert_eq!(errs.len(), 2);
        assert_eq!(errs[0].field_name.as_deref(), Some("nombre"));
        assert_eq!(errs[1].field_name, None);
    }
}
