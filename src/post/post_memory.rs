use crate::post::post_model::{NewPost, Post, PostUpdate};
use crate::post::post_store::PostStore;
use crate::utils::error::CustomError;
use async_trait::async_trait;
use log::debug;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

/// Post store kept in process memory. Data is lost on restart.
#[derive(Default)]
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list(&self) -> Result<Vec<Post>, CustomError> {
        debug!("listing posts");
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, CustomError> {
        debug!("fetching post {}", id);
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == *id).cloned())
    }

    async fn insert(&self, post: NewPost) -> Result<Post, CustomError> {
        let post = Post::new(post);
        debug!("inserted post {}", post.id);
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<Post>, CustomError> {
        let posts: Vec<Post> = posts.into_iter().map(Post::new).collect();
        debug!("inserted {} posts", posts.len());
        self.posts.write().await.extend(posts.iter().cloned());
        Ok(posts)
    }

    async fn update_by_id(
        &self,
        id: &ObjectId,
        update: PostUpdate,
    ) -> Result<Option<Post>, CustomError> {
        debug!("updating post {}", id);
        let mut posts = self.posts.write().await;
        Ok(posts.iter_mut().find(|p| p.id == *id).map(|post| {
            post.apply(update);
            post.clone()
        }))
    }

    async fn delete_by_id(&self, id: &ObjectId) -> Result<bool, CustomError> {
        debug!("deleting post {}", id);
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != *id);
        Ok(posts.len() < before)
    }

    async fn count(&self) -> Result<u64, CustomError> {
        Ok(self.posts.read().await.len() as u64)
    }

    async fn clear(&self) -> Result<(), CustomError> {
        debug!("clearing posts");
        self.posts.write().await.clear();
        Ok(())
    }
}
