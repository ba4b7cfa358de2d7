//! Record — one named JSON object of the collection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::id::ObjectId;

/// A stored object: a service-assigned `id`, a required `name`, and any
/// number of opaque passthrough fields.
///
/// On the wire the passthrough fields sit next to `id` and `name` in the same
/// JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: ObjectId,
    pub name: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Build a new record from a validated draft.
    #[must_use]
    pub fn from_draft(id: ObjectId, draft: ObjectDraft) -> Self {
        Self {
            id,
            name: draft.name,
            fields: draft.fields,
        }
    }

    /// Shallow-merge a draft into this record.
    ///
    /// `name` is replaced, draft fields overwrite existing keys in place, and
    /// fields the draft does not mention are kept. The id never changes.
    pub fn merge(&mut self, draft: ObjectDraft) {
        self.name = draft.name;
        for (key, value) in draft.fields {
            self.fields.insert(key, value);
        }
    }
}

/// A validated client payload for creating or updating a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDraft {
    name: String,
    fields: Map<String, Value>,
}

impl ObjectDraft {
    /// Create a draft with only a name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingName`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        Ok(Self {
            name,
            fields: Map::new(),
        })
    }

    /// Attach a passthrough field. `id` and `name` are reserved and ignored.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != "id" && key != "name" {
            self.fields.insert(key, value.into());
        }
        self
    }

    /// Validate an arbitrary JSON request body.
    ///
    /// The body must be an object whose `name` is a non-empty string. A
    /// client-supplied `id` is dropped since ids are assigned by the service.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingName`] if the body is not an object
    /// or `name` is missing, empty, or not a string.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let Value::Object(mut fields) = value else {
            return Err(ValidationError::MissingName);
        };
        let name = match fields.shift_remove("name") {
            Some(Value::String(name)) if !name.is_empty() => name,
            _ => return Err(ValidationError::MissingName),
        };
        fields.shift_remove("id");
        Ok(Self { name, fields })
    }

    /// The validated name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Passthrough fields, in the order the client sent them.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id(value: u64) -> ObjectId {
        ObjectId::new(value).unwrap()
    }

    #[test]
    fn should_accept_body_with_name_and_extra_fields() {
        let draft = ObjectDraft::from_value(json!({"name": "lamp", "color": "red"})).unwrap();
        assert_eq!(draft.name(), "lamp");
        assert_eq!(draft.fields().get("color"), Some(&json!("red")));
    }

    #[test]
    fn should_reject_body_when_name_is_missing() {
        let result = ObjectDraft::from_value(json!({}));
        assert_eq!(result, Err(ValidationError::MissingName));
    }

    #[test]
    fn should_reject_body_when_name_is_empty_or_not_a_string() {
        for body in [json!({"name": ""}), json!({"name": 12}), json!({"name": null})] {
            assert_eq!(
                ObjectDraft::from_value(body),
                Err(ValidationError::MissingName)
            );
        }
    }

    #[test]
    fn should_reject_body_when_not_an_object() {
        for body in [json!([{"name": "a"}]), json!("a"), json!(null)] {
            assert_eq!(
                ObjectDraft::from_value(body),
                Err(ValidationError::MissingName)
            );
        }
    }

    #[test]
    fn should_accept_whitespace_only_name() {
        let draft = ObjectDraft::from_value(json!({"name": "  "})).unwrap();
        assert_eq!(draft.name(), "  ");
    }

    #[test]
    fn should_drop_client_supplied_id() {
        let draft = ObjectDraft::from_value(json!({"id": 99, "name": "a"})).unwrap();
        assert!(draft.fields().get("id").is_none());
    }

    #[test]
    fn should_serialize_record_as_flat_object() {
        let draft = ObjectDraft::new("a").unwrap().with_field("size", 3);
        let record = Record::from_draft(id(1), draft);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, json!({"id": 1, "name": "a", "size": 3}));
    }

    #[test]
    fn should_deserialize_record_with_passthrough_fields() {
        let record: Record =
            serde_json::from_value(json!({"id": 4, "name": "b", "tags": ["x"]})).unwrap();
        assert_eq!(record.id, id(4));
        assert_eq!(record.fields.get("tags"), Some(&json!(["x"])));
    }

    #[test]
    fn should_reject_stored_record_without_positive_id() {
        let result: Result<Record, _> = serde_json::from_value(json!({"id": 0, "name": "b"}));
        assert!(result.is_err());
    }

    #[test]
    fn should_keep_omitted_fields_when_merging() {
        let mut record = Record::from_draft(
            id(1),
            ObjectDraft::new("a")
                .unwrap()
                .with_field("color", "red")
                .with_field("size", 3),
        );

        record.merge(ObjectDraft::new("A").unwrap().with_field("size", 4));

        assert_eq!(record.id, id(1));
        assert_eq!(record.name, "A");
        assert_eq!(record.fields.get("color"), Some(&json!("red")));
        assert_eq!(record.fields.get("size"), Some(&json!(4)));
    }

    #[test]
    fn should_ignore_reserved_keys_in_with_field() {
        let draft = ObjectDraft::new("a")
            .unwrap()
            .with_field("id", 7)
            .with_field("name", "b");
        assert!(draft.fields().is_empty());
        assert_eq!(draft.name(), "a");
    }
}
