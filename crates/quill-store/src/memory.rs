use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_types::{Blog, Category, Comment, Like, LikeTarget, RecordId, User};

use crate::document::{collections, to_document, Document, DocumentSource};
use crate::error::{StoreError, StoreResult};
use crate::traits::{BlogStore, CategoryStore, CommentStore, LikeStore, UserStore};

/// In-memory, HashMap-based datastore.
///
/// The reference implementation of the store traits, intended for tests and
/// single-process deployments. Each collection is a `RwLock`-guarded map;
/// uniqueness checks run while the write lock is held, so check-then-insert
/// has no race window.
pub struct InMemoryStore {
    users: RwLock<HashMap<RecordId, User>>,
    blogs: RwLock<HashMap<RecordId, Blog>>,
    categories: RwLock<HashMap<RecordId, Category>>,
    comments: RwLock<HashMap<RecordId, Comment>>,
    likes: RwLock<HashMap<RecordId, Like>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            blogs: RwLock::new(HashMap::new()),
            categories: RwLock::new(HashMap::new()),
            comments: RwLock::new(HashMap::new()),
            likes: RwLock::new(HashMap::new()),
        }
    }

    /// Number of users currently stored.
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    /// Number of likes currently stored.
    pub async fn like_count(&self) -> usize {
        self.likes.read().await.len()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore").finish_non_exhaustive()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn insert_user(&self, user: User) -> StoreResult<User> {
        let mut users = self.users.write().await;
        let taken = users
            .values()
            .any(|u| u.username == user.username || u.email == user.email);
        if taken {
            return Err(StoreError::Conflict(
                "user with email or username already exists".into(),
            ));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn user_by_id(&self, id: &RecordId) -> StoreResult<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn user_by_login(&self, identifier: &str) -> StoreResult<Option<User>> {
        let identifier = identifier.trim().to_lowercase();
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.username == identifier || u.email == identifier)
            .cloned())
    }

    async fn update_user(&self, user: User) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(StoreError::NotFound("user"));
        }
        let taken = users
            .values()
            .any(|u| u.id != user.id && (u.username == user.username || u.email == user.email));
        if taken {
            return Err(StoreError::Conflict(
                "user with email or username already exists".into(),
            ));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl BlogStore for InMemoryStore {
    async fn insert_blog(&self, blog: Blog) -> StoreResult<Blog> {
        self.blogs.write().await.insert(blog.id, blog.clone());
        Ok(blog)
    }

    async fn blog_by_id(&self, id: &RecordId) -> StoreResult<Option<Blog>> {
        Ok(self.blogs.read().await.get(id).cloned())
    }

    async fn update_blog(&self, blog: Blog) -> StoreResult<Blog> {
        let mut blogs = self.blogs.write().await;
        if !blogs.contains_key(&blog.id) {
            return Err(StoreError::NotFound("blog"));
        }
        blogs.insert(blog.id, blog.clone());
        Ok(blog)
    }

    async fn remove_blog(&self, id: &RecordId) -> StoreResult<bool> {
        Ok(self.blogs.write().await.remove(id).is_some())
    }

    async fn blogs_by_category(&self, category: &RecordId) -> StoreResult<Vec<Blog>> {
        let blogs = self.blogs.read().await;
        Ok(blogs
            .values()
            .filter(|b| b.category == *category)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CategoryStore for InMemoryStore {
    async fn insert_category(&self, category: Category) -> StoreResult<Category> {
        let mut categories = self.categories.write().await;
        if categories.values().any(|c| c.title == category.title) {
            return Err(StoreError::Conflict("category title already exists".into()));
        }
        categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn category_by_id(&self, id: &RecordId) -> StoreResult<Option<Category>> {
        Ok(self.categories.read().await.get(id).cloned())
    }

    async fn all_categories(&self) -> StoreResult<Vec<Category>> {
        let categories = self.categories.read().await;
        let mut all: Vec<Category> = categories.values().cloned().collect();
        all.sort_by_key(|c| c.created_at);
        Ok(all)
    }

    async fn update_category(&self, category: Category) -> StoreResult<Category> {
        let mut categories = self.categories.write().await;
        if !categories.contains_key(&category.id) {
            return Err(StoreError::NotFound("category"));
        }
        let taken = categories
            .values()
            .any(|c| c.id != category.id && c.title == category.title);
        if taken {
            return Err(StoreError::Conflict("category title already exists".into()));
        }
        categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn remove_category(&self, id: &RecordId) -> StoreResult<bool> {
        Ok(self.categories.write().await.remove(id).is_some())
    }
}

#[async_trait]
impl CommentStore for InMemoryStore {
    async fn insert_comment(&self, comment: Comment) -> StoreResult<Comment> {
        self.comments.write().await.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn comment_by_id(&self, id: &RecordId) -> StoreResult<Option<Comment>> {
        Ok(self.comments.read().await.get(id).cloned())
    }

    async fn update_comment(&self, comment: Comment) -> StoreResult<Comment> {
        let mut comments = self.comments.write().await;
        if !comments.contains_key(&comment.id) {
            return Err(StoreError::NotFound("comment"));
        }
        comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn remove_comment(&self, id: &RecordId) -> StoreResult<bool> {
        Ok(self.comments.write().await.remove(id).is_some())
    }

    async fn comments_for_blog(&self, blog: &RecordId) -> StoreResult<Vec<Comment>> {
        let comments = self.comments.read().await;
        Ok(comments
            .values()
            .filter(|c| c.blog == *blog)
            .cloned()
            .collect())
    }

    async fn remove_comments_for_blog(&self, blog: &RecordId) -> StoreResult<usize> {
        let mut comments = self.comments.write().await;
        let before = comments.len();
        comments.retain(|_, c| c.blog != *blog);
        Ok(before - comments.len())
    }
}

#[async_trait]
impl LikeStore for InMemoryStore {
    async fn find_like(
        &self,
        target: &LikeTarget,
        liked_by: &RecordId,
    ) -> StoreResult<Option<Like>> {
        let likes = self.likes.read().await;
        Ok(likes
            .values()
            .find(|l| l.target == *target && l.liked_by == *liked_by)
            .cloned())
    }

    async fn insert_like(&self, like: Like) -> StoreResult<Like> {
        self.likes.write().await.insert(like.id, like.clone());
        Ok(like)
    }

    async fn remove_like(&self, id: &RecordId) -> StoreResult<bool> {
        Ok(self.likes.write().await.remove(id).is_some())
    }

    async fn remove_likes_for_target(&self, target: &LikeTarget) -> StoreResult<usize> {
        let mut likes = self.likes.write().await;
        let before = likes.len();
        likes.retain(|_, l| l.target != *target);
        Ok(before - likes.len())
    }
}

#[async_trait]
impl DocumentSource for InMemoryStore {
    async fn collection(&self, name: &str) -> StoreResult<Vec<Document>> {
        match name {
            collections::USERS => {
                self.users.read().await.values().map(to_document).collect()
            }
            collections::BLOGS => {
                self.blogs.read().await.values().map(to_document).collect()
            }
            collections::CATEGORIES => {
                self.categories.read().await.values().map(to_document).collect()
            }
            collections::COMMENTS => {
                self.comments.read().await.values().map(to_document).collect()
            }
            collections::LIKES => {
                self.likes.read().await.values().map(to_document).collect()
            }
            other => Err(StoreError::UnknownCollection(other.to_string())),
        }
    }
}
