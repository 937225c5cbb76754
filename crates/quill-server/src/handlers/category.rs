use axum::extract::{Json, Path, State};
use serde::Deserialize;
use serde_json::{json, Value};

use quill_store::{BlogStore, CategoryStore};
use quill_types::Category;

use crate::error::{ApiError, ApiResult};
use crate::extract::CurrentUser;
use crate::handlers::blog::cascade_delete_blog;
use crate::handlers::parse_id;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CategoryBody {
    title: String,
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<Vec<Category>>> {
    let categories = state.store.all_categories().await?;
    Ok(ApiResponse::ok(
        categories,
        "all categories fetched successfully",
    ))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<Category>> {
    let id = parse_id(&id)?;
    let category = state
        .store
        .category_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("category not found".into()))?;
    Ok(ApiResponse::ok(category, "category fetched successfully"))
}

pub async fn create_category(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Json(body): Json<CategoryBody>,
) -> ApiResult<ApiResponse<Category>> {
    if body.title.trim().is_empty() {
        return Err(ApiError::Validation("title is required".into()));
    }
    let category = state
        .store
        .insert_category(Category::new(body.title))
        .await?;
    Ok(ApiResponse::created(category, "category created successfully"))
}

pub async fn update_category(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<String>,
    Json(body): Json<CategoryBody>,
) -> ApiResult<ApiResponse<Category>> {
    if body.title.trim().is_empty() {
        return Err(ApiError::Validation("title is required".into()));
    }
    let id = parse_id(&id)?;
    let mut category = state
        .store
        .category_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("category not found".into()))?;
    category.title = body.title.trim().to_string();
    category.touch();
    let category = state.store.update_category(category).await?;
    Ok(ApiResponse::ok(category, "category updated successfully"))
}

/// Delete a category and every blog in it (each with its own cascade).
pub async fn delete_category(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<Value>> {
    let id = parse_id(&id)?;
    state
        .store
        .category_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("category not found".into()))?;

    let blogs = state.store.blogs_by_category(&id).await?;
    for blog in &blogs {
        cascade_delete_blog(state.store.as_ref(), blog.id).await?;
    }
    state.store.remove_category(&id).await?;
    tracing::info!(category = %id, blogs = blogs.len(), "category deleted with blogs");
    Ok(ApiResponse::ok(
        json!({ "id": id }),
        "category deleted successfully",
    ))
}
