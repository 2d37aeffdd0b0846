//! Typed payloads exchanged with the backend.
//!
//! Identifiers are GUIDs on the server side and travel as strings.

use serde::Deserialize;
use serde::Serialize;

/// An article as returned by `article/getList`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub views_count: u64,
    #[serde(default)]
    pub category_id: Option<String>,
}

/// A category as returned by `category/getList`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub parent_category_id: Option<String>,
    /// Absent or null for top-level categories.
    #[serde(default)]
    pub parent_category_dto: Option<ParentCategoryDto>,
}

/// The parent of a category, embedded in [`CategoryDto`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParentCategoryDto {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A user as returned by `user/getList`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Credentials for `auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Payload for `auth/register`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Bearer token handed out by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    #[serde(alias = "accessToken")]
    pub token: String,
    #[serde(default)]
    pub expiration: Option<String>,
}
