//! Blog Post Model
//!
//! Marketing-site content, owned by the platform (not tenant-scoped).

use serde::{Deserialize, Serialize};

/// Blog post entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BlogPost {
    pub id: i64,
    /// URL slug (unique)
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    pub published_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostCreate {
    pub title: String,
    /// Optional explicit slug; derived from the title when absent
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub body: String,
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogPostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}
