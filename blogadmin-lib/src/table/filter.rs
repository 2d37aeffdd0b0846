//! Search stage of the pipeline

use crate::model::Record;
use crate::model::Value;

/// Returns the text a field is matched against, if it has a value.
///
/// Null and absent fields never match.
fn search_text(record: &Record, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::Null => None,
        value => Some(value.display()),
    }
}

/// Returns `true` if the record matches the search string.
///
/// `needle` must already be lowercased.
fn matches(record: &Record, fields: &[String], needle: &str) -> bool {
    fields.iter().any(|field| {
        search_text(record, field).is_some_and(|text| text.to_lowercase().contains(needle))
    })
}

/// Keeps the records whose searchable fields contain `search`,
/// case-insensitively.
///
/// An empty search string or an empty field list lets every record through,
/// in input order.
pub fn filter_records<'a>(records: &'a [Record], fields: &[String], search: &str) -> Vec<&'a Record> {
    if search.is_empty() || fields.is_empty() {
        return records.iter().collect();
    }

    let needle = search.to_lowercase();
    records
        .iter()
        .filter(|record| matches(record, fields, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn articles() -> Vec<Record> {
        vec![
            Record::new().set("id", "1").set("title", "Rust Ownership").set("slug", "rust-ownership"),
            Record::new().set("id", "2").set("title", "Async in Practice").set("keywords", "tokio,rust"),
            Record::new().set("id", "3").set("title", "Gardening").set("keywords", Value::Null),
        ]
    }

    fn ids(records: &[&Record]) -> Vec<String> {
        records.iter().filter_map(|r| r.id()).collect()
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let records = articles();
        let fields = vec!["title".to_string()];
        assert_eq!(ids(&filter_records(&records, &fields, "")), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_no_searchable_fields_keeps_everything() {
        let records = articles();
        assert_eq!(ids(&filter_records(&records, &[], "rust")), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_case_insensitive_any_field() {
        let records = articles();
        let fields = vec!["title".to_string(), "keywords".to_string()];
        assert_eq!(ids(&filter_records(&records, &fields, "RUST")), vec!["1", "2"]);
    }

    #[test]
    fn test_numbers_are_coerced() {
        let records = vec![
            Record::new().set("id", 1).set("viewsCount", 1500),
            Record::new().set("id", 2).set("viewsCount", 20),
        ];
        let fields = vec!["viewsCount".to_string()];
        assert_eq!(ids(&filter_records(&records, &fields, "150")), vec!["1"]);
    }

    #[test]
    fn test_null_never_matches() {
        let records = articles();
        let fields = vec!["keywords".to_string()];
        assert_eq!(ids(&filter_records(&records, &fields, "null")), Vec::<String>::new());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = articles();
        let fields = vec!["title".to_string(), "keywords".to_string()];
        let once: Vec<Record> = filter_records(&records, &fields, "in")
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_records(&once, &fields, "in");
        assert_eq!(ids(&twice), once.iter().filter_map(Record::id).collect::<Vec<_>>());
    }
}
