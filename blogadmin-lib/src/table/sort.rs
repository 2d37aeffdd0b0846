//! Sort stage of the pipeline

use std::cmp::Ordering;

use super::Collation;
use super::SortDirection;
use crate::model::Record;
use crate::model::Value;

/// How a pair of non-null values is compared.
///
/// Selected once per pair from the runtime types of both values. Pairs that
/// are neither both strings nor both numbers (booleans, nested objects, a
/// string against a number) compare as equal and keep their input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortStrategy<'a> {
    Text(&'a str, &'a str),
    Numeric(f64, f64),
    Unsupported,
}

impl<'a> SortStrategy<'a> {
    pub fn select(a: &'a Value, b: &'a Value) -> Self {
        match (a, b) {
            (Value::String(a), Value::String(b)) => SortStrategy::Text(a, b),
            (Value::Number(a), Value::Number(b)) => SortStrategy::Numeric(*a, *b),
            _ => SortStrategy::Unsupported,
        }
    }

    /// Ascending comparison of the pair.
    pub fn compare(self, collation: Collation) -> Ordering {
        match self {
            SortStrategy::Text(a, b) => collation.compare(a, b),
            SortStrategy::Numeric(a, b) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            SortStrategy::Unsupported => Ordering::Equal,
        }
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Compares two records by one field.
///
/// Null and absent values always sink to the bottom, whatever the direction.
pub fn compare_records(
    a: &Record,
    b: &Record,
    key: &str,
    direction: SortDirection,
    collation: Collation,
) -> Ordering {
    match (present(a.get(key)), present(b.get(key))) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => direction.apply(SortStrategy::select(a, b).compare(collation)),
    }
}

/// Sorts records in place by `key`. The sort is stable.
pub fn sort_records(
    records: &mut [&Record],
    key: &str,
    direction: SortDirection,
    collation: Collation,
) {
    records.sort_by(|a, b| compare_records(a, b, key, direction, collation));
}
