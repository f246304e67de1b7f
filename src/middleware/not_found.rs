use crate::utils::error::CustomError;
use actix_web::HttpResponse;

pub async fn not_found() -> Result<HttpResponse, CustomError> {
    Err(CustomError::NotFoundError("Route does not exist".into()))
}
