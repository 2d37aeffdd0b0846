//! Per-resource page layouts

use super::ConfirmDialog;
use crate::model::Record;
use crate::model::Resource;
use crate::table::Column;
use crate::table::TableView;

/// Everything that differs between the article, category and user pages.
#[derive(Debug, Clone)]
pub struct PageDefinition {
    pub resource: Resource,
    /// Page heading.
    pub title: &'static str,
    pub columns: Vec<Column>,
    pub searchable: Vec<&'static str>,
    pub page_size: usize,
    /// Field naming a record in the delete dialog.
    pub display_field: &'static str,
    /// Singular noun used in the delete dialog.
    pub noun: &'static str,
}

impl PageDefinition {
    /// Returns the layout for a resource.
    pub fn for_resource(resource: Resource) -> Self {
        match resource {
            Resource::Article => Self::articles(),
            Resource::Category => Self::categories(),
            Resource::User => Self::users(),
        }
    }

    pub fn articles() -> Self {
        Self {
            resource: Resource::Article,
            title: "Articles",
            columns: vec![
                Column::field("id", "ID").sortable(),
                Column::field("title", "Title").sortable(),
                Column::field("slug", "Slug"),
                Column::field("keywords", "Keywords"),
                Column::field("viewsCount", "Views"),
                Column::actions("Actions"),
            ],
            searchable: vec!["title", "keywords", "slug"],
            page_size: 5,
            display_field: "title",
            noun: "article",
        }
    }

    pub fn categories() -> Self {
        Self {
            resource: Resource::Category,
            title: "Categories",
            columns: vec![
                Column::field("id", "ID"),
                Column::field("name", "Name").sortable(),
                Column::field("tagName", "Tag").sortable(),
                Column::actions("Actions"),
            ],
            searchable: vec!["name", "tagName"],
            page_size: 5,
            display_field: "name",
            noun: "category",
        }
    }

    pub fn users() -> Self {
        Self {
            resource: Resource::User,
            title: "Users",
            columns: vec![
                Column::field("id", "ID").sortable(),
                Column::field("userName", "User Name").sortable(),
                Column::field("email", "Email"),
                Column::actions("Actions"),
            ],
            searchable: vec!["userName", "email"],
            page_size: 10,
            display_field: "userName",
            noun: "user",
        }
    }

    /// Builds an empty table with this layout and no row callbacks.
    pub fn table(&self) -> TableView {
        TableView::new(self.columns.clone())
            .page_size(self.page_size)
            .searchable(self.searchable.iter().copied())
    }

    /// The dialog asking to confirm deleting `record`.
    pub fn delete_dialog(&self, record: &Record) -> ConfirmDialog {
        let mut noun = self.noun.chars();
        let title = match noun.next() {
            Some(first) => format!("Delete {}{}", first.to_uppercase(), noun.as_str()),
            None => "Delete".to_string(),
        };
        ConfirmDialog::new(format!(
            "Do you want to delete the {} \"{}\"?",
            self.noun,
            record.display(self.display_field)
        ))
        .title(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_resource_has_actions_last() {
        for resource in Resource::ALL {
            let def = PageDefinition::for_resource(resource);
            assert_eq!(def.resource, resource);
            let last = def.columns.last().unwrap();
            assert!(!last.key().is_field());
            assert!(!last.is_sortable());
        }
    }

    #[test]
    fn test_category_id_is_not_sortable() {
        let def = PageDefinition::categories();
        assert!(!def.columns[0].is_sortable());
        assert!(def.columns[1].is_sortable());
    }

    #[test]
    fn test_delete_dialog_names_the_record() {
        let record = Record::new().set("id", "1").set("title", "Hello");
        let dialog = PageDefinition::articles().delete_dialog(&record);

        assert_eq!(dialog.title, "Delete Article");
        assert_eq!(dialog.message, "Do you want to delete the article \"Hello\"?");
        assert_eq!(dialog.confirm_text, "Delete");
        assert_eq!(dialog.cancel_text, "Cancel");
    }
}
