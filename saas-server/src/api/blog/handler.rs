//! Blog API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use shared::models::{BlogPost, BlogPostCreate, BlogPostUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult, validation};

/// GET /api/blog/posts - 公开的已发布文章列表
pub async fn list_published(State(state): State<ServerState>) -> AppResult<Json<Vec<BlogPost>>> {
    let posts = repository::blog_post::list(state.get_pool(), true).await?;
    Ok(Json(posts))
}

/// GET /api/blog/posts/{slug} - 公开的单篇文章 (草稿视为不存在)
pub async fn get_published(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<BlogPost>> {
    let post = repository::blog_post::get_by_slug(state.get_pool(), &slug)
        .await?
        .filter(|p| p.is_published)
        .ok_or_else(|| AppError::not_found(format!("Post '{slug}' not found")))?;
    Ok(Json(post))
}

/// GET /api/blog/admin/posts - 全部文章 (含草稿)
pub async fn admin_list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<BlogPost>>> {
    user.require_platform()?;
    let posts = repository::blog_post::list(state.get_pool(), false).await?;
    Ok(Json(posts))
}

/// GET /api/blog/admin/posts/{id}
pub async fn admin_get(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<BlogPost>> {
    user.require_platform()?;
    let post = repository::blog_post::get(state.get_pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Blog post {id} not found")))?;
    Ok(Json(post))
}

/// POST /api/blog/admin/posts - 创建文章
pub async fn admin_create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<BlogPostCreate>,
) -> AppResult<Json<BlogPost>> {
    user.require_platform()?;
    validation::validate_required_text(&payload.title, "title", validation::MAX_NAME_LEN)?;
    validation::validate_required_text(&payload.body, "body", validation::MAX_BODY_LEN)?;
    validation::validate_optional_text(&payload.excerpt, "excerpt", validation::MAX_NOTE_LEN)?;
    let post = repository::blog_post::create(state.get_pool(), payload).await?;
    Ok(Json(post))
}

/// PUT /api/blog/admin/posts/{id} - 更新文章
pub async fn admin_update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<BlogPostUpdate>,
) -> AppResult<Json<BlogPost>> {
    user.require_platform()?;
    validation::validate_optional_text(&payload.title, "title", validation::MAX_NAME_LEN)?;
    validation::validate_optional_text(&payload.body, "body", validation::MAX_BODY_LEN)?;
    validation::validate_optional_text(&payload.excerpt, "excerpt", validation::MAX_NOTE_LEN)?;
    let post = repository::blog_post::update(state.get_pool(), id, payload).await?;
    Ok(Json(post))
}

/// DELETE /api/blog/admin/posts/{id} - 删除文章
pub async fn admin_delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    user.require_platform()?;
    let result = repository::blog_post::delete(state.get_pool(), id).await?;
    Ok(Json(result))
}
