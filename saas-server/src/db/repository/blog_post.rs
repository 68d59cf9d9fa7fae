//! Blog Post Repository (platform-owned marketing content)

use sqlx::SqlitePool;

use shared::models::{BlogPost, BlogPostCreate, BlogPostUpdate};
use shared::util::{now_millis, slugify, snowflake_id};

use super::{RepoError, RepoResult};

const COLUMNS: &str = "id, slug, title, excerpt, body, cover_image_url, is_published, published_at, created_at, updated_at";

/// List posts. `published_only` hides drafts (public listing).
pub async fn list(pool: &SqlitePool, published_only: bool) -> RepoResult<Vec<BlogPost>> {
    let sql = if published_only {
        format!(
            "SELECT {COLUMNS} FROM blog_posts WHERE is_published = 1 ORDER BY published_at DESC"
        )
    } else {
        format!("SELECT {COLUMNS} FROM blog_posts ORDER BY created_at DESC")
    };
    let posts = sqlx::query_as::<_, BlogPost>(&sql).fetch_all(pool).await?;
    Ok(posts)
}

pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<Option<BlogPost>> {
    let post =
        sqlx::query_as::<_, BlogPost>(&format!("SELECT {COLUMNS} FROM blog_posts WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(post)
}

pub async fn get_by_slug(pool: &SqlitePool, slug: &str) -> RepoResult<Option<BlogPost>> {
    let post =
        sqlx::query_as::<_, BlogPost>(&format!("SELECT {COLUMNS} FROM blog_posts WHERE slug = ?"))
            .bind(slug)
            .fetch_optional(pool)
            .await?;
    Ok(post)
}

pub async fn create(pool: &SqlitePool, data: BlogPostCreate) -> RepoResult<BlogPost> {
    if data.title.trim().is_empty() {
        return Err(RepoError::Validation("title is required".into()));
    }

    let slug = match data.slug {
        Some(ref s) if !s.trim().is_empty() => slugify(s),
        _ => slugify(&data.title),
    };
    if slug.is_empty() {
        return Err(RepoError::Validation("slug cannot be derived from title".into()));
    }
    if get_by_slug(pool, &slug).await?.is_some() {
        return Err(RepoError::Duplicate(format!("Slug '{slug}' already exists")));
    }

    let id = snowflake_id();
    let now = now_millis();
    let published_at = data.is_published.then_some(now);
    sqlx::query(
        "INSERT INTO blog_posts (id, slug, title, excerpt, body, cover_image_url, is_published, published_at, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
    )
    .bind(id)
    .bind(&slug)
    .bind(data.title.trim())
    .bind(&data.excerpt)
    .bind(&data.body)
    .bind(&data.cover_image_url)
    .bind(data.is_published)
    .bind(published_at)
    .bind(now)
    .execute(pool)
    .await?;

    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create blog post".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: BlogPostUpdate) -> RepoResult<BlogPost> {
    let existing = get(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Blog post {id} not found")))?;

    let slug = match data.slug {
        Some(ref s) => {
            let normalized = slugify(s);
            if normalized.is_empty() {
                return Err(RepoError::Validation("slug cannot be empty".into()));
            }
            if normalized != existing.slug && get_by_slug(pool, &normalized).await?.is_some() {
                return Err(RepoError::Duplicate(format!(
                    "Slug '{normalized}' already exists"
                )));
            }
            Some(normalized)
        }
        None => None,
    };

    // First publish stamps published_at; republishing keeps the original date
    let now = now_millis();
    let published_at = match data.is_published {
        Some(true) if existing.published_at.is_none() => Some(now),
        _ => existing.published_at,
    };

    sqlx::query(
        "UPDATE blog_posts SET slug = COALESCE(?1, slug), title = COALESCE(?2, title), excerpt = COALESCE(?3, excerpt), body = COALESCE(?4, body), cover_image_url = COALESCE(?5, cover_image_url), is_published = COALESCE(?6, is_published), published_at = ?7, updated_at = ?8 WHERE id = ?9",
    )
    .bind(&slug)
    .bind(&data.title)
    .bind(&data.excerpt)
    .bind(&data.body)
    .bind(&data.cover_image_url)
    .bind(data.is_published)
    .bind(published_at)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Blog post {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM blog_posts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Blog post {id} not found")));
    }
    Ok(true)
}
