use axum::extract::{Json, Path, Query, State};
use serde::Deserialize;
use serde_json::{json, Value};

use quill_query::{Page, PageRequest, QueryContext};
use quill_store::{BlogStore, CommentStore, LikeStore};
use quill_types::{Comment, LikeTarget};

use crate::error::{ApiError, ApiResult};
use crate::extract::CurrentUser;
use crate::handlers::parse_id;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct CommentBody {
    content: String,
}

pub async fn list_comments(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(blog_id): Path<String>,
    Query(page): Query<PageRequest>,
) -> ApiResult<ApiResponse<Page>> {
    let blog_id = parse_id(&blog_id)?;
    state
        .store
        .blog_by_id(&blog_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("blog not found".into()))?;

    let comments = views::comment_pipeline(blog_id)
        .run_paged(
            state.docs.as_ref(),
            &QueryContext::for_viewer(user.id),
            page,
        )
        .await?;
    Ok(ApiResponse::ok(comments, "comments fetched successfully"))
}

pub async fn add_comment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(blog_id): Path<String>,
    Json(body): Json<CommentBody>,
) -> ApiResult<ApiResponse<Comment>> {
    if body.content.trim().is_empty() {
        return Err(ApiError::Validation("content is required".into()));
    }
    let blog_id = parse_id(&blog_id)?;
    state
        .store
        .blog_by_id(&blog_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("blog not found".into()))?;

    let comment = state
        .store
        .insert_comment(Comment::new(body.content, blog_id, user.id))
        .await?;
    Ok(ApiResponse::created(comment, "comment added successfully"))
}

pub async fn update_comment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(comment_id): Path<String>,
    Json(body): Json<CommentBody>,
) -> ApiResult<ApiResponse<Comment>> {
    if body.content.trim().is_empty() {
        return Err(ApiError::Validation("content is required".into()));
    }
    let comment_id = parse_id(&comment_id)?;
    let mut comment = state
        .store
        .comment_by_id(&comment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("comment not found".into()))?;
    if comment.owner != user.id {
        return Err(ApiError::Forbidden(
            "only the owner can edit this comment".into(),
        ));
    }
    comment.content = body.content;
    comment.touch();
    let comment = state.store.update_comment(comment).await?;
    Ok(ApiResponse::ok(comment, "comment edited successfully"))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(comment_id): Path<String>,
) -> ApiResult<ApiResponse<Value>> {
    let comment_id = parse_id(&comment_id)?;
    let comment = state
        .store
        .comment_by_id(&comment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("comment not found".into()))?;
    if comment.owner != user.id {
        return Err(ApiError::Forbidden(
            "only the owner can delete this comment".into(),
        ));
    }
    state.store.remove_comment(&comment_id).await?;
    state
        .store
        .remove_likes_for_target(&LikeTarget::Comment(comment_id))
        .await?;
    Ok(ApiResponse::ok(
        json!({ "commentId": comment_id }),
        "comment deleted successfully",
    ))
}
