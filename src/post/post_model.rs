use crate::utils::error::CustomError;
use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A blog post as stored in the `posts` collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub content: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created: DateTime<Utc>,
    pub author: Author,
}

impl Post {
    /// Assigns a fresh id, and the current time when `created` was not supplied.
    ///
    /// `created` is cut to milliseconds, the precision of a BSON date.
    pub fn new(new_post: NewPost) -> Self {
        Post {
            id: ObjectId::new(),
            title: new_post.title,
            content: new_post.content,
            created: new_post.created.unwrap_or_else(Utc::now).trunc_subsecs(3),
            author: new_post.author,
        }
    }

    pub fn apply(&mut self, update: PostUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
    }

    pub fn to_response(&self) -> PostResponse {
        PostResponse {
            id: self.id.to_hex(),
            author: self.author.full_name(),
            title: self.title.clone(),
            content: self.content.clone(),
            created: self.created,
        }
    }
}

/// Public representation returned by the HTTP layer.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PostResponse {
    pub id: String,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

/// A validated post that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Clone)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreatePostRequest {
    pub author: Option<AuthorRequest>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created: Option<DateTime<Utc>>,
}

impl CreatePostRequest {
    pub fn validate(self) -> Result<NewPost, CustomError> {
        let title = self.title.ok_or_else(|| missing("title"))?;
        let content = self.content.ok_or_else(|| missing("content"))?;
        let author = self.author.ok_or_else(|| missing("author"))?;
        let first_name = author.first_name.ok_or_else(|| missing("author.firstName"))?;
        let last_name = author.last_name.ok_or_else(|| missing("author.lastName"))?;

        Ok(NewPost {
            author: Author {
                first_name,
                last_name,
            },
            title,
            content,
            created: self.created,
        })
    }
}

fn missing(field: &str) -> CustomError {
    CustomError::ValidationError(format!("Missing `{}` in request body", field))
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UpdatePostRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdatePostRequest {
    /// Rejects a body whose `id` does not name the post in the path.
    pub fn into_update(self, path_id: &ObjectId) -> Result<PostUpdate, CustomError> {
        if let Some(body_id) = &self.id {
            if ObjectId::parse_str(body_id).ok().as_ref() != Some(path_id) {
                return Err(CustomError::ValidationError(format!(
                    "Request path id ({}) and request body id ({}) must match",
                    path_id, body_id
                )));
            }
        }

        Ok(PostUpdate {
            title: self.title,
            content: self.content,
        })
    }
}
