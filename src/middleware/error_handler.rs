use crate::utils::error::CustomError;
use actix_web::error::JsonPayloadError;
use actix_web::{Error, HttpRequest};
use log::warn;

/// Turns malformed or mistyped JSON bodies into the standard error envelope.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    warn!("Rejected JSON body on {} {}: {}", req.method(), req.path(), err);
    CustomError::ValidationError(err.to_string()).into()
}
