use crate::post::post_model::{NewPost, Post, PostUpdate};
use crate::post::post_store::PostStore;
use crate::utils::error::CustomError;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, error};
use mongodb::error::ErrorKind;
use mongodb::options::ReturnDocument;
use mongodb::{
    Client, Collection,
    bson::{Document, doc, oid::ObjectId},
};

/// MongoDB-backed post store over the `posts` collection.
pub struct MongoPostStore {
    collection: Collection<Post>,
}

impl MongoPostStore {
    pub fn new(client: &Client, database: &str) -> Self {
        let collection = client.database(database).collection::<Post>("posts");
        MongoPostStore { collection }
    }
}

/// Connection-level failures surface as 503, everything else as 500.
fn store_error(action: &str, e: mongodb::error::Error) -> CustomError {
    error!("{}: {}", action, e);
    match *e.kind {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(..)
        | ErrorKind::ConnectionPoolCleared { .. } => {
            CustomError::ServiceUnavailableError(format!("{}: database unavailable", action))
        }
        _ => CustomError::InternalServerError(format!("{}: {}", action, e)),
    }
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn list(&self) -> Result<Vec<Post>, CustomError> {
        debug!("listing posts");
        // ObjectIds grow with insertion time, natural order does not.
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| store_error("Failed to fetch posts", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| store_error("Failed to collect posts", e))
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Post>, CustomError> {
        debug!("fetching post {}", id);
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| store_error("Failed to fetch post", e))
    }

    async fn insert(&self, post: NewPost) -> Result<Post, CustomError> {
        let post = Post::new(post);

        self.collection
            .insert_one(&post)
            .await
            .map_err(|e| store_error("Failed to create post", e))?;

        debug!("inserted post {}", post.id);
        Ok(post)
    }

    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<Post>, CustomError> {
        let posts: Vec<Post> = posts.into_iter().map(Post::new).collect();
        if posts.is_empty() {
            return Ok(posts);
        }

        self.collection
            .insert_many(&posts)
            .await
            .map_err(|e| store_error("Failed to insert posts", e))?;

        debug!("inserted {} posts", posts.len());
        Ok(posts)
    }

    async fn update_by_id(
        &self,
        id: &ObjectId,
        update: PostUpdate,
    ) -> Result<Option<Post>, CustomError> {
        debug!("updating post {}", id);
        if update.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut set = Document::new();
        if let Some(title) = update.title {
            set.insert("title", title);
        }
        if let Some(content) = update.content {
            set.insert("content", content);
        }

        self.collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| store_error("Failed to update post", e))
    }

    async fn delete_by_id(&self, id: &ObjectId) -> Result<bool, CustomError> {
        debug!("deleting post {}", id);
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| store_error("Failed to delete post", e))?;

        Ok(result.deleted_count > 0)
    }

    async fn count(&self) -> Result<u64, CustomError> {
        debug!("counting posts");
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(|e| store_error("Failed to count posts", e))
    }

    async fn clear(&self) -> Result<(), CustomError> {
        debug!("dropping posts collection");
        self.collection
            .drop()
            .await
            .map_err(|e| store_error("Failed to drop posts", e))
    }
}
