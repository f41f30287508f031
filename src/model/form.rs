use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};

const PROPERTIES_KEY: &str = "properties";

/// Form definition. Forms are handed back to the caller as received, so
/// optional keys keep their presence: a missing key stays missing and an
/// explicit `null` schema stays `null`. Unknown keys are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionForm {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_reusable: Option<bool>,
    /// opaque schema bag, only `properties` keys are read
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub field_schema: Option<JsonValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub ui_schema: Option<JsonValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub dynamic_field_config: Option<JsonValue>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// `Some` whenever the key is present, `null` included.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<JsonValue>, D::Error>
where
    D: Deserializer<'de>,
{
    JsonValue::deserialize(deserializer).map(Some)
}

impl ActionForm {
    /// Field names declared under `field_schema.properties`, in schema order.
    ///
    /// A missing or `null` schema, a missing `properties` entry or a
    /// `properties` value that is not an object all yield an empty list.
    pub fn field_names(&self) -> Vec<String> {
        self.field_schema
            .as_ref()
            .and_then(|schema| schema.get(PROPERTIES_KEY))
            .and_then(JsonValue::as_object)
            .map(|properties| properties.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn form(field_schema: JsonValue) -> ActionForm {
        serde_json::from_value(json!({
            "id": "form-1",
            "name": "Form 1",
            "field_schema": field_schema,
        }))
        .unwrap()
    }

    #[test]
    fn test_field_names_keep_schema_order() {
        let form = form(json!({ "properties": { "zeta": {}, "alpha": {}, "mid": {} } }));
        assert_eq!(form.field_names(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_field_names_without_properties() {
        assert!(form(json!({})).field_names().is_empty());
        assert!(form(json!({ "properties": {} })).field_names().is_empty());
        assert!(form(json!({ "properties": ["a"] })).field_names().is_empty());
    }

    #[test]
    fn test_null_schema_has_no_fields() {
        assert!(form(JsonValue::Null).field_names().is_empty());
    }

    #[test]
    fn test_form_round_trips_as_received() {
        let raw = json!({
            "id": "form-1",
            "name": "Form 1",
            "ui_schema": null,
            "field_schema": { "type": "object", "properties": { "email": {} } },
            "custom_flag": true,
        });
        let form: ActionForm = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(form.description, None);
        assert_eq!(form.ui_schema, Some(JsonValue::Null));
        assert_eq!(form.dynamic_field_config, None);
        assert_eq!(form.extra.get("custom_flag"), Some(&json!(true)));
        assert_eq!(serde_json::to_value(&form).unwrap(), raw);
    }

    #[test]
    fn test_absent_schema_is_not_serialized() {
        let form: ActionForm = serde_json::from_value(json!({ "id": "f", "name": "F" })).unwrap();
        assert!(form.field_names().is_empty());
        let value = serde_json::to_value(&form).unwrap();
        assert!(value.get("field_schema").is_none());
    }
}
