//! Resource enum (articles, categories, users)

use std::fmt;
use std::str::FromStr;

/// One of the entity collections the admin panel manages.
///
/// Each resource knows its REST endpoints and its admin route.
///
/// # Example
///
/// ```
/// use blogadmin_lib::model::Resource;
///
/// assert_eq!(Resource::Article.list_endpoint(), "article/getList");
/// assert_eq!(Resource::Category.delete_endpoint("42"), "category/delete/42");
/// assert_eq!(Resource::User.route(), "/admin/users");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Article,
    Category,
    User,
}

impl Resource {
    /// All managed resources, in navigation order.
    pub const ALL: [Resource; 3] = [Resource::Category, Resource::Article, Resource::User];

    /// The endpoint prefix used by the backend (`article`, `category`, `user`).
    pub fn api_name(self) -> &'static str {
        match self {
            Resource::Article => "article",
            Resource::Category => "category",
            Resource::User => "user",
        }
    }

    /// The plural route segment used by the admin pages.
    pub fn route_segment(self) -> &'static str {
        match self {
            Resource::Article => "articles",
            Resource::Category => "categories",
            Resource::User => "users",
        }
    }

    /// Endpoint that lists the whole collection.
    pub fn list_endpoint(self) -> String {
        format!("{}/getList", self.api_name())
    }

    /// Endpoint that creates a record.
    pub fn create_endpoint(self) -> String {
        format!("{}/add", self.api_name())
    }

    /// Endpoint that updates a record.
    pub fn update_endpoint(self) -> String {
        format!("{}/update", self.api_name())
    }

    /// Endpoint that deletes the record with the given id.
    pub fn delete_endpoint(self, id: &str) -> String {
        format!("{}/delete/{}", self.api_name(), urlencoding::encode(id))
    }

    /// Admin route of the list page.
    pub fn route(self) -> String {
        format!("/admin/{}", self.route_segment())
    }

    /// Admin route of the detail page for a record.
    pub fn view_route(self, id: &str) -> String {
        format!("/admin/{}/{}", self.route_segment(), id)
    }

    /// Admin route of the edit page for a record.
    pub fn edit_route(self, id: &str) -> String {
        format!("/admin/{}/edit/{}", self.route_segment(), id)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_segment())
    }
}

/// Error returned when a resource name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource '{0}' (expected articles, categories or users)")]
pub struct UnknownResource(pub String);

impl FromStr for Resource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "article" | "articles" => Ok(Resource::Article),
            "category" | "categories" => Ok(Resource::Category),
            "user" | "users" => Ok(Resource::User),
            _ => Err(UnknownResource(s.to_string())),
        }
    }
}
