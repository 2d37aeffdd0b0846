//! Breadcrumb trail for admin paths

/// A single breadcrumb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// Path the crumb links to.
    pub path: String,
}

/// Builds the breadcrumb trail for an admin path.
///
/// The trail always starts with `Admin`. Each further path segment becomes a
/// crumb with dashes turned into spaces and every word capitalized.
///
/// # Example
///
/// ```
/// use blogadmin_lib::controller::breadcrumbs;
///
/// let labels: Vec<String> = breadcrumbs("/admin/articles/edit/1")
///     .into_iter()
///     .map(|c| c.label)
///     .collect();
/// assert_eq!(labels, ["Admin", "Articles", "Edit", "1"]);
/// ```
pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb {
        label: "Admin".to_string(),
        path: "/admin".to_string(),
    }];

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let mut current = String::new();
    for (idx, segment) in segments.iter().enumerate() {
        current.push('/');
        current.push_str(segment);
        if idx == 0 {
            continue;
        }
        crumbs.push(Crumb {
            label: capitalize_words(&segment.replace('-', " ")),
            path: current.clone(),
        });
    }

    crumbs
}

fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
