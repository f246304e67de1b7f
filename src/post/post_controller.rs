use crate::post::post_model::{CreatePostRequest, PostResponse, UpdatePostRequest};
use crate::post::post_store::PostStore;
use crate::utils::error::CustomError;
use actix_web::{HttpResponse, web};
use log::info;
use mongodb::bson::oid::ObjectId;

fn parse_post_id(id: &str) -> Result<ObjectId, CustomError> {
    ObjectId::parse_str(id).map_err(|_| CustomError::BadRequestError("Invalid post ID".into()))
}

/// GET /posts
pub async fn list_posts(post_store: web::Data<dyn PostStore>) -> Result<HttpResponse, CustomError> {
    let posts: Vec<PostResponse> = post_store
        .list()
        .await?
        .iter()
        .map(|p| p.to_response())
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get_post(
    post_id: web::Path<String>,
    post_store: web::Data<dyn PostStore>,
) -> Result<HttpResponse, CustomError> {
    let post_id = parse_post_id(&post_id.into_inner())?;

    let post = post_store
        .find_by_id(&post_id)
        .await?
        .ok_or_else(|| CustomError::NotFoundError("Post not found".into()))?;

    Ok(HttpResponse::Ok().json(post.to_response()))
}

/// POST /posts
pub async fn create_post(
    post_store: web::Data<dyn PostStore>,
    post: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, CustomError> {
    let new_post = post.into_inner().validate()?;
    let inserted_post = post_store.insert(new_post).await?;

    info!("Created post {}", inserted_post.id);
    Ok(HttpResponse::Created().json(inserted_post.to_response()))
}

/// PUT /posts/{id}
pub async fn update_post(
    post_id: web::Path<String>,
    post_store: web::Data<dyn PostStore>,
    body: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, CustomError> {
    let post_id = parse_post_id(&post_id.into_inner())?;
    let update = body.into_inner().into_update(&post_id)?;

    post_store
        .update_by_id(&post_id, update)
        .await?
        .ok_or_else(|| CustomError::NotFoundError("Post not found".into()))?;

    info!("Updated post {}", post_id);
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    post_id: web::Path<String>,
    post_store: web::Data<dyn PostStore>,
) -> Result<HttpResponse, CustomError> {
    let post_id = parse_post_id(&post_id.into_inner())?;

    if post_store.delete_by_id(&post_id).await? {
        info!("Deleted post {}", post_id);
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(CustomError::NotFoundError("Post not found".into()))
    }
}
