use axum::extract::{Json, Path, Query, State};
use serde::Deserialize;
use serde_json::{json, Value};

use quill_query::{Page, PageRequest, QueryContext};
use quill_store::{BlogStore, CategoryStore, CommentStore, Datastore, LikeStore};
use quill_types::{Blog, LikeTarget, RecordId};

use crate::error::{ApiError, ApiResult};
use crate::extract::{CurrentUser, MaybeUser};
use crate::handlers::parse_id;
use crate::response::ApiResponse;
use crate::state::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct CreateBlogBody {
    title: String,
    content: String,
    category: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBlogBody {
    title: String,
    content: String,
}

fn viewer_context(viewer: Option<&quill_types::UserPublic>) -> QueryContext {
    match viewer {
        Some(user) => QueryContext::for_viewer(user.id),
        None => QueryContext::anonymous(),
    }
}

/// Delete a blog and its dependents. Best-effort multi-step sequence: a
/// failure partway leaves earlier steps applied.
pub(crate) async fn cascade_delete_blog(store: &dyn Datastore, blog: RecordId) -> ApiResult<()> {
    let comments = store.comments_for_blog(&blog).await?;
    for comment in &comments {
        store
            .remove_likes_for_target(&LikeTarget::Comment(comment.id))
            .await?;
    }
    store.remove_comments_for_blog(&blog).await?;
    store.remove_likes_for_target(&LikeTarget::Blog(blog)).await?;
    store.remove_blog(&blog).await?;
    Ok(())
}

pub async fn list_blogs(
    State(state): State<AppState>,
    MaybeUser(viewer): MaybeUser,
    Query(page): Query<PageRequest>,
) -> ApiResult<ApiResponse<Page>> {
    let context = viewer_context(viewer.as_ref());
    let blogs = views::blog_pipeline(None)
        .run_paged(state.docs.as_ref(), &context, page)
        .await?;
    Ok(ApiResponse::ok(blogs, "all blogs fetched successfully"))
}

pub async fn single_blog(
    State(state): State<AppState>,
    MaybeUser(viewer): MaybeUser,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<Value>> {
    let id = parse_id(&id)?;
    let context = viewer_context(viewer.as_ref());
    let rows = views::blog_pipeline(Some(("id", id)))
        .run(state.docs.as_ref(), &context)
        .await?;
    let blog = rows
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::NotFound("blog not found".into()))?;
    Ok(ApiResponse::ok(
        Value::Object(blog),
        "blog fetched successfully",
    ))
}

pub async fn user_blogs(
    State(state): State<AppState>,
    MaybeUser(viewer): MaybeUser,
    Path(user_id): Path<String>,
) -> ApiResult<ApiResponse<Vec<quill_store::Document>>> {
    let owner = parse_id(&user_id)?;
    let context = viewer_context(viewer.as_ref());
    let blogs = views::blog_pipeline(Some(("owner", owner)))
        .run(state.docs.as_ref(), &context)
        .await?;
    Ok(ApiResponse::ok(blogs, "user blogs fetched successfully"))
}

pub async fn own_blogs(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<ApiResponse<Vec<quill_store::Document>>> {
    let context = QueryContext::for_viewer(user.id);
    let blogs = views::blog_pipeline(Some(("owner", user.id)))
        .run(state.docs.as_ref(), &context)
        .await?;
    Ok(ApiResponse::ok(blogs, "your blogs fetched successfully"))
}

pub async fn create_blog(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<CreateBlogBody>,
) -> ApiResult<ApiResponse<Blog>> {
    if body.title.trim().is_empty()
        || body.content.trim().is_empty()
        || body.category.trim().is_empty()
    {
        return Err(ApiError::Validation("all fields are required".into()));
    }
    let category = parse_id(&body.category)?;
    state
        .store
        .category_by_id(&category)
        .await?
        .ok_or_else(|| ApiError::NotFound("category not found".into()))?;

    let blog = state
        .store
        .insert_blog(Blog::new(body.title, body.content, category, user.id))
        .await?;
    Ok(ApiResponse::created(blog, "blog created successfully"))
}

pub async fn update_blog(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Json(body): Json<UpdateBlogBody>,
) -> ApiResult<ApiResponse<Blog>> {
    if body.title.trim().is_empty() || body.content.trim().is_empty() {
        return Err(ApiError::Validation("all fields are required".into()));
    }
    let id = parse_id(&id)?;
    let mut blog = state
        .store
        .blog_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("blog not found".into()))?;
    if blog.owner != user.id {
        return Err(ApiError::Forbidden(
            "only the owner can edit this blog".into(),
        ));
    }
    blog.title = body.title.trim().to_string();
    blog.content = body.content;
    blog.touch();
    let blog = state.store.update_blog(blog).await?;
    Ok(ApiResponse::ok(blog, "blog updated successfully"))
}

pub async fn delete_blog(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<Value>> {
    let id = parse_id(&id)?;
    let blog = state
        .store
        .blog_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("blog not found".into()))?;
    if blog.owner != user.id {
        return Err(ApiError::Forbidden(
            "only the owner can delete this blog".into(),
        ));
    }
    cascade_delete_blog(state.store.as_ref(), id).await?;
    tracing::info!(blog = %id, "blog deleted with dependents");
    Ok(ApiResponse::ok(
        json!({ "blogId": id }),
        "blog deleted successfully",
    ))
}
