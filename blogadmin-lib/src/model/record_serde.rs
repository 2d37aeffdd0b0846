//! Serde support for Record
//!
//! Records serialize as a flat JSON object. Deserialization accepts any JSON
//! object and maps each member through [`Value::from`]; the identifier field
//! is always `id` for records read off the wire.

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::DeserializeOwned;
use serde::de::Error as _;
use serde::ser::SerializeMap;

use super::Record;
use super::Value;

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, &serde_json::Value::from(value))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Object(obj) => Ok(Record::from_object(obj)),
            other => Err(D::Error::custom(format!(
                "expected a JSON object for a record, got {}",
                json_kind(&other)
            ))),
        }
    }
}

impl Record {
    /// Builds a record from a JSON object.
    pub fn from_object(obj: serde_json::Map<String, serde_json::Value>) -> Self {
        let mut record = Record::new();
        for (key, value) in obj {
            record.fields.insert(key, Value::from(value));
        }
        record
    }

    /// Converts any serializable DTO into a dynamic record.
    ///
    /// # Example
    ///
    /// ```
    /// use blogadmin_lib::model::Record;
    /// use blogadmin_lib::model::dto::ArticleDto;
    ///
    /// let dto = ArticleDto { id: "1".into(), title: Some("Hi".into()), ..Default::default() };
    /// let record = Record::from_dto(&dto).unwrap();
    /// assert_eq!(record.get_string("title").unwrap(), Some("Hi"));
    /// ```
    pub fn from_dto<T: Serialize>(dto: &T) -> Result<Self, serde_json::Error> {
        let value = serde_json::to_value(dto)?;
        serde_json::from_value(value)
    }

    /// Converts the record back into a typed DTO.
    pub fn to_dto<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        let value = serde_json::to_value(self)?;
        serde_json::from_value(value)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dto::ArticleDto;
    use crate::model::dto::CategoryDto;

    #[test]
    fn test_serialize_simple_fields() {
        let record = Record::new().set("title", "Merhaba").set("viewsCount", 120);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"title\":\"Merhaba\""));
        assert!(json.contains("\"viewsCount\":120"));
    }

    #[test]
    fn test_deserialize_simple_fields() {
        let json = r#"{"id": "a1", "title": "Rust", "viewsCount": 1000, "slug": null}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.id().as_deref(), Some("a1"));
        assert_eq!(record.get_string("title").unwrap(), Some("Rust"));
        assert_eq!(record.get_number("viewsCount").unwrap(), Some(1000.0));
        assert_eq!(record.get_string("slug").unwrap(), None);
    }

    #[test]
    fn test_deserialize_rejects_non_object() {
        let result: Result<Record, _> = serde_json::from_str("[1, 2]");
        assert!(result.is_err());
    }

    #[test]
    fn test_dto_round_trip_keeps_nested_parent() {
        let json = r#"{
            "id": "c1",
            "name": "Teknoloji",
            "tagName": "tech",
            "parentCategoryId": "p1",
            "parentCategoryDto": {"id": "p1", "name": "Root"}
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.get("parentCategoryDto").map(Value::type_name), Some("json"));

        let dto: CategoryDto = record.to_dto().unwrap();
        let parent = dto.parent_category_dto.unwrap();
        assert_eq!(parent.name.as_deref(), Some("Root"));
        assert_eq!(dto.tag_name.as_deref(), Some("tech"));
    }

    #[test]
    fn test_top_level_category_has_no_parent() {
        let json = r#"{"id": "c2", "name": "Genel", "parentCategoryId": null, "parentCategoryDto": null}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        let dto: CategoryDto = record.to_dto().unwrap();
        assert_eq!(dto.parent_category_id, None);
        assert_eq!(dto.parent_category_dto, None);

        let bare: CategoryDto = serde_json::from_str(r#"{"id": "c3"}"#).unwrap();
        assert_eq!(bare.parent_category_dto, None);
    }

    #[test]
    fn test_article_without_title() {
        let record: Record = serde_json::from_str(r#"{"id": "a9", "title": null}"#).unwrap();
        let dto: ArticleDto = record.to_dto().unwrap();
        assert_eq!(dto.id, "a9");
        assert_eq!(dto.title, None);
    }
}
