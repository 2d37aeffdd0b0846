//! Dynamic entity record

use std::collections::HashMap;

use super::Value;
use super::value::format_number;
use crate::error::FieldError;

/// Default name of the identifier field.
pub const DEFAULT_ID_FIELD: &str = "id";

/// A dynamic entity record (one article, category or user).
///
/// Records hold field values as a `HashMap<String, Value>`, with exactly one
/// field designated as the stable identifier. The table view only looks at
/// fields its configuration names.
///
/// # Example
///
/// ```
/// use blogadmin_lib::model::Record;
///
/// let record = Record::new()
///     .set("id", "1")
///     .set("title", "Hello")
///     .set("viewsCount", 10);
///
/// assert_eq!(record.id().as_deref(), Some("1"));
/// assert_eq!(record.get_string("title").unwrap(), Some("Hello"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Name of the field that identifies this record.
    pub(crate) id_field: String,

    /// The field values.
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record identified by the `id` field.
    pub fn new() -> Self {
        Self::with_id_field(DEFAULT_ID_FIELD)
    }

    /// Creates a new empty record identified by a custom field.
    pub fn with_id_field(id_field: impl Into<String>) -> Self {
        Self {
            id_field: id_field.into(),
            fields: HashMap::new(),
        }
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Returns the name of the identifier field.
    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    /// Returns the identifier as text.
    ///
    /// Both string and numeric identifiers are accepted; numbers are rendered
    /// without a fractional part.
    pub fn id(&self) -> Option<String> {
        match self.fields.get(&self.id_field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(format_number(*n)),
            _ => None,
        }
    }

    /// Returns the identifier or an error if the record has none.
    pub fn require_id(&self) -> Result<String, FieldError> {
        self.id().ok_or_else(|| FieldError::MissingId {
            field: self.id_field.clone(),
        })
    }

    /// Returns `true` if both records carry the same identifier.
    pub fn same_identity(&self, other: &Record) -> bool {
        match (self.id(), other.id()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the display text of a field, empty when absent or null.
    pub fn display(&self, field: &str) -> String {
        self.fields.get(field).map(Value::display).unwrap_or_default()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(field, "string", other.type_name())),
        }
    }

    /// Gets a numeric field value.
    pub fn get_number(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "number", other.type_name())),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}
