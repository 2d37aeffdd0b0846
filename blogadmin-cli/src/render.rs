//! Plain-text table output

use blogadmin_lib::controller::Crumb;
use blogadmin_lib::table::Action;
use blogadmin_lib::table::ActionSet;
use blogadmin_lib::table::Cell;
use blogadmin_lib::table::RenderedTable;
use blogadmin_lib::table::SortIndicator;
use blogadmin_lib::table::TableBody;
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = " │ ";

/// Formats a rendered table as aligned text.
pub fn table_text(table: &RenderedTable) -> String {
    let headers: Vec<String> = table
        .headers
        .iter()
        .map(|h| match h.indicator {
            SortIndicator::None => h.label.clone(),
            SortIndicator::Unsorted => format!("{} ↕", h.label),
            SortIndicator::Ascending => format!("{} ↑", h.label),
            SortIndicator::Descending => format!("{} ↓", h.label),
        })
        .collect();

    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| row.cells.iter().map(cell_text).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(idx) {
                *width = (*width).max(cell.width());
            }
        }
    }

    let mut out = String::new();
    if let Some(search) = &table.search {
        out.push_str(&format!("Search: {}\n", search));
    }

    let header_line = line(&headers, &widths);
    out.push_str(&header_line);
    out.push('\n');
    out.push_str(&"─".repeat(header_line.width()));
    out.push('\n');

    match &table.body {
        TableBody::Rows(_) => {
            for row in &rows {
                out.push_str(&line(row, &widths));
                out.push('\n');
            }
        }
        TableBody::Placeholder { message, .. } => {
            out.push_str(message);
            out.push('\n');
        }
        TableBody::Empty => {}
    }

    if table.loading {
        out.push_str("Loading...\n");
    }

    let footer = &table.footer;
    out.push_str(&format!(
        "{}Page {} of {}{}",
        if footer.has_previous { "‹ " } else { "  " },
        footer.page,
        footer.total_pages,
        if footer.has_next { " ›" } else { "" },
    ));
    out.push('\n');
    out
}

/// Formats a breadcrumb trail as `Admin / Articles / Edit`.
pub fn breadcrumb_text(crumbs: &[Crumb]) -> String {
    crumbs
        .iter()
        .map(|c| c.label.as_str())
        .collect::<Vec<_>>()
        .join(" / ")
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => text.clone(),
        Cell::Actions(actions) => actions_text(*actions),
    }
}

fn actions_text(actions: ActionSet) -> String {
    actions
        .iter()
        .map(|a| match a {
            Action::View => "view",
            Action::Edit => "edit",
            Action::Delete => "delete",
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
        .trim_end()
        .to_string()
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use blogadmin_lib::model::Record;
    use blogadmin_lib::table::Column;
    use blogadmin_lib::table::TableView;

    use super::*;

    #[test]
    fn test_columns_align_on_display_width() {
        let mut view = TableView::new(vec![
            Column::field("name", "Name").sortable(),
            Column::field("tag", "Tag"),
        ]);
        view.set_records(vec![
            Record::new().set("id", "1").set("name", "Çay").set("tag", "drink"),
            Record::new().set("id", "2").set("name", "漢字").set("tag", "cjk"),
        ]);

        let text = table_text(&view.render());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name ↕ │ Tag");
        assert_eq!(lines[2], "Çay    │ drink");
        assert_eq!(lines[3], "漢字   │ cjk");
        assert_eq!(lines[4], "  Page 1 of 1");
    }

    #[test]
    fn test_placeholder_and_actions() {
        let mut view = TableView::new(vec![Column::field("name", "Name"), Column::actions("Actions")])
            .searchable(["name"])
            .on_view(|_| {})
            .on_delete(|_| {});
        view.set_records(vec![Record::new().set("id", "1").set("name", "x")]);

        let text = table_text(&view.render());
        assert!(text.starts_with("Search: \n"));
        assert!(text.contains("view delete"));

        view.set_search("nothing");
        assert!(table_text(&view.render()).contains("No results found."));
    }

    #[test]
    fn test_breadcrumb_text() {
        let crumbs = blogadmin_lib::controller::breadcrumbs("/admin/articles/edit/1");
        assert_eq!(breadcrumb_text(&crumbs), "Admin / Articles / Edit / 1");
    }
}
