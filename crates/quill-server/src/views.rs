//! The two read projections of the platform, built on the shared pipeline
//! builder: blogs (owner + category + likes) and comments (owner + likes).
//! All blog read paths reuse one pipeline shape; callers only vary the
//! leading match.

use quill_query::{DerivedField, JoinSpec, Pipeline, ProjectField};
use quill_store::collections;
use quill_types::RecordId;
use serde_json::Value;

/// Blog projection: owner (username + avatar URL), category title, like
/// count, viewer flag; newest first.
pub fn blog_pipeline(filter: Option<(&str, RecordId)>) -> Pipeline {
    let mut builder = Pipeline::over(collections::BLOGS);
    if let Some((field, id)) = filter {
        builder = builder.match_field(field, Value::from(id.to_string()));
    }
    builder
        .join(
            JoinSpec::new(collections::USERS, "owner", "id", "ownerDetails")
                .with_fields(["username", "avatar.url"]),
        )
        .join(
            JoinSpec::new(collections::LIKES, "id", "blog", "likeDetails")
                .with_fields(["likedBy"]),
        )
        .join(
            JoinSpec::new(collections::CATEGORIES, "category", "id", "categoryDetails")
                .with_fields(["title"]),
        )
        .derive(vec![
            DerivedField::Count {
                field: "likesCount".into(),
                of: "likeDetails".into(),
            },
            DerivedField::First {
                field: "ownerDetails".into(),
                of: "ownerDetails".into(),
            },
            DerivedField::First {
                field: "categoryDetails".into(),
                of: "categoryDetails".into(),
            },
            DerivedField::ViewerMember {
                field: "isLiked".into(),
                array: "likeDetails".into(),
                key: "likedBy".into(),
            },
        ])
        .sort_descending("createdAt")
        .project(vec![
            ProjectField::Keep("id".into()),
            ProjectField::Keep("title".into()),
            ProjectField::Keep("content".into()),
            ProjectField::Computed {
                field: "category".into(),
                from: "categoryDetails.title".into(),
            },
            ProjectField::Keep("ownerDetails".into()),
            ProjectField::Keep("likesCount".into()),
            ProjectField::Keep("createdAt".into()),
            ProjectField::Keep("isLiked".into()),
        ])
        .build()
}

/// Comment projection for one blog: owner (username, display name, avatar
/// URL), like count, viewer flag; newest first.
pub fn comment_pipeline(blog: RecordId) -> Pipeline {
    Pipeline::over(collections::COMMENTS)
        .match_field("blog", Value::from(blog.to_string()))
        .join(
            JoinSpec::new(collections::USERS, "owner", "id", "owner")
                .with_fields(["username", "displayName", "avatar.url"]),
        )
        .join(
            JoinSpec::new(collections::LIKES, "id", "comment", "likes")
                .with_fields(["likedBy"]),
        )
        .derive(vec![
            DerivedField::Count {
                field: "likesCount".into(),
                of: "likes".into(),
            },
            DerivedField::First {
                field: "owner".into(),
                of: "owner".into(),
            },
            DerivedField::ViewerMember {
                field: "isLiked".into(),
                array: "likes".into(),
                key: "likedBy".into(),
            },
        ])
        .sort_descending("createdAt")
        .project(vec![
            ProjectField::Keep("id".into()),
            ProjectField::Keep("content".into()),
            ProjectField::Keep("createdAt".into()),
            ProjectField::Keep("likesCount".into()),
            ProjectField::Keep("owner".into()),
            ProjectField::Keep("isLiked".into()),
        ])
        .build()
}
