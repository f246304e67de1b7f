use crate::post::post_model::{NewPost, Post, PostUpdate};
use crate::utils::error::CustomError;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

/// Storage for blog posts.
///
/// Lookups on an unknown id resolve to `None`/`false`; callers decide whether
/// that is an error.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, in insertion order.
    async fn list(&self) -> Result<Vec<Post>, CustomError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, CustomError>;

    async fn insert(&self, post: NewPost) -> Result<Post, CustomError>;

    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<Post>, CustomError>;

    /// Merges the given fields and returns the updated post.
    async fn update_by_id(
        &self,
        id: &ObjectId,
        update: PostUpdate,
    ) -> Result<Option<Post>, CustomError>;

    async fn delete_by_id(&self, id: &ObjectId) -> Result<bool, CustomError>;

    async fn count(&self) -> Result<u64, CustomError>;

    /// Drops every post. Used for test teardown.
    async fn clear(&self) -> Result<(), CustomError>;
}
