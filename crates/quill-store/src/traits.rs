use async_trait::async_trait;

use quill_types::{Blog, Category, Comment, Like, LikeTarget, RecordId, User};

use crate::error::StoreResult;

/// Account persistence.
///
/// All implementations must satisfy these invariants:
/// - Username and email are globally unique; `insert_user` and
///   `update_user` reject a record that would collide with another user
///   with `StoreError::Conflict`, atomically with the write.
/// - Lookups by login identifier match either username or email,
///   case-insensitively (records store both lowercase).
/// - The store never interprets the password hash or refresh token.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user. Fails with `Conflict` if the username or email
    /// is already taken.
    async fn insert_user(&self, user: User) -> StoreResult<User>;

    /// Fetch a user by id. Returns `Ok(None)` if absent.
    async fn user_by_id(&self, id: &RecordId) -> StoreResult<Option<User>>;

    /// Fetch a user whose username OR email equals the identifier
    /// (lowercased before comparison).
    async fn user_by_login(&self, identifier: &str) -> StoreResult<Option<User>>;

    /// Replace a user record by id. Fails with `NotFound` if absent, or
    /// `Conflict` if the new username/email collides with another user.
    async fn update_user(&self, user: User) -> StoreResult<User>;
}

/// Blog post persistence.
#[async_trait]
pub trait BlogStore: Send + Sync {
    async fn insert_blog(&self, blog: Blog) -> StoreResult<Blog>;

    async fn blog_by_id(&self, id: &RecordId) -> StoreResult<Option<Blog>>;

    /// Replace a blog record by id. Fails with `NotFound` if absent.
    async fn update_blog(&self, blog: Blog) -> StoreResult<Blog>;

    /// Delete a blog. Returns `true` if it existed. Dependent comments and
    /// likes are NOT touched; cascades are the caller's multi-step sequence.
    async fn remove_blog(&self, id: &RecordId) -> StoreResult<bool>;

    /// All blogs in a category (for the category-deletion cascade).
    async fn blogs_by_category(&self, category: &RecordId) -> StoreResult<Vec<Blog>>;
}

/// Category persistence. Titles are unique, case-sensitive exact match,
/// enforced atomically with the write.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Persist a new category. Fails with `Conflict` on a duplicate title.
    async fn insert_category(&self, category: Category) -> StoreResult<Category>;

    async fn category_by_id(&self, id: &RecordId) -> StoreResult<Option<Category>>;

    /// All categories, oldest first.
    async fn all_categories(&self) -> StoreResult<Vec<Category>>;

    /// Replace a category by id. Fails with `NotFound` if absent, or
    /// `Conflict` if the title collides with another category.
    async fn update_category(&self, category: Category) -> StoreResult<Category>;

    /// Delete a category. Returns `true` if it existed.
    async fn remove_category(&self, id: &RecordId) -> StoreResult<bool>;
}

/// Comment persistence.
#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn insert_comment(&self, comment: Comment) -> StoreResult<Comment>;

    async fn comment_by_id(&self, id: &RecordId) -> StoreResult<Option<Comment>>;

    /// Replace a comment by id. Fails with `NotFound` if absent.
    async fn update_comment(&self, comment: Comment) -> StoreResult<Comment>;

    /// Delete a comment. Returns `true` if it existed.
    async fn remove_comment(&self, id: &RecordId) -> StoreResult<bool>;

    /// All comments on a blog (for cascades; read paths go through the
    /// query pipeline instead).
    async fn comments_for_blog(&self, blog: &RecordId) -> StoreResult<Vec<Comment>>;

    /// Delete every comment on a blog. Returns the number removed.
    async fn remove_comments_for_blog(&self, blog: &RecordId) -> StoreResult<usize>;
}

/// Like persistence. The (user, target) pair is kept unique by the toggle
/// sequence, not by a store constraint.
#[async_trait]
pub trait LikeStore: Send + Sync {
    /// The like a user placed on a target, if any.
    async fn find_like(&self, target: &LikeTarget, liked_by: &RecordId)
        -> StoreResult<Option<Like>>;

    async fn insert_like(&self, like: Like) -> StoreResult<Like>;

    /// Delete a like by id. Returns `true` if it existed.
    async fn remove_like(&self, id: &RecordId) -> StoreResult<bool>;

    /// Delete every like on a target. Returns the number removed.
    async fn remove_likes_for_target(&self, target: &LikeTarget) -> StoreResult<usize>;
}

/// The full write-side datastore: everything the request handlers mutate.
/// Read projections go through [`crate::DocumentSource`] instead.
pub trait Datastore: UserStore + BlogStore + CategoryStore + CommentStore + LikeStore {}

impl<T> Datastore for T where T: UserStore + BlogStore + CategoryStore + CommentStore + LikeStore {}
