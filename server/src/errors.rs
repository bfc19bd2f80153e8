// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;
use tracing::{debug, error};

use crate::constants::INTERNAL_ERROR_DETAIL;
use crate::messages::ErrorResponse;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Field `{0}` must not be empty")]
    EmptyField(&'static str),
}

impl ClientError {
    pub fn status(&self) -> StatusCode {
        match self {
            ClientError::InvalidBody(rejection) => rejection.status(),
            ClientError::EmptyField(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

#[derive(Error, Debug)]
#[error("Internal server error")]
pub struct ServerError(#[from] anyhow::Error);

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error(transparent)]
    Server(#[from] ServerError),
}

impl axum::response::IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HandlerError::Client(err) => {
                debug!("Client error: {err}");
                let body = ErrorResponse {
                    detail: err.to_string(),
                };
                (err.status(), Json(body)).into_response()
            }
            HandlerError::Server(err) => {
                error!("Internal server error: {:#}", err.0);
                let body = ErrorResponse {
                    detail: INTERNAL_ERROR_DETAIL.to_owned(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
