use axum::extract::{Path, State};
use serde_json::{json, Value};

use quill_store::{BlogStore, CommentStore, LikeStore};
use quill_types::{Like, LikeTarget, RecordId};

use crate::error::{ApiError, ApiResult};
use crate::extract::CurrentUser;
use crate::handlers::parse_id;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Read-then-write toggle: delete the existing like or create a new one.
/// Not atomic; a concurrent toggle on the same pair can race.
async fn toggle(state: &AppState, target: LikeTarget, user: RecordId) -> ApiResult<bool> {
    match state.store.find_like(&target, &user).await? {
        Some(existing) => {
            state.store.remove_like(&existing.id).await?;
            Ok(false)
        }
        None => {
            state.store.insert_like(Like::new(target, user)).await?;
            Ok(true)
        }
    }
}

pub async fn toggle_blog_like(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(blog_id): Path<String>,
) -> ApiResult<ApiResponse<Value>> {
    let blog_id = parse_id(&blog_id)?;
    state
        .store
        .blog_by_id(&blog_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("blog not found".into()))?;

    let is_liked = toggle(&state, LikeTarget::Blog(blog_id), user.id).await?;
    Ok(ApiResponse::ok(json!({ "isLiked": is_liked }), "like toggled"))
}

pub async fn toggle_comment_like(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(comment_id): Path<String>,
) -> ApiResult<ApiResponse<Value>> {
    let comment_id = parse_id(&comment_id)?;
    state
        .store
        .comment_by_id(&comment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("comment not found".into()))?;

    let is_liked = toggle(&state, LikeTarget::Comment(comment_id), user.id).await?;
    Ok(ApiResponse::ok(json!({ "isLiked": is_liked }), "like toggled"))
}
