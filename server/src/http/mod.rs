use axum::{
    extract::{Json, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use ::api::contact::{ContactErrorResp, ContactInvalid, MSG_SEND_FAILED};

pub mod api;
pub mod svc;

// everything a json endpoint can fail with
//
// the visitor only ever sees the {error} body; the detail goes to the log
#[derive(Debug)]
pub enum ApiError {
    JsonRejection(JsonRejection),
    Invalid(ContactInvalid),
    ChannelSendError,
    ChannelRecvError,
    SendFailed(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::JsonRejection(rejection) => {
                (StatusCode::BAD_REQUEST, rejection.body_text())
            }
            ApiError::Invalid(invalid) => (StatusCode::BAD_REQUEST, invalid.to_string()),
            ApiError::ChannelSendError | ApiError::ChannelRecvError => {
                error!({service = "http", error = "internal communications error"});
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_SEND_FAILED.to_owned())
            }
            ApiError::SendFailed(err) => {
                error!({service = "http", error = %err});
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_SEND_FAILED.to_owned())
            }
        };

        (status, Json(ContactErrorResp { error })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::JsonRejection(rejection)
    }
}

impl From<ContactInvalid> for ApiError {
    fn from(invalid: ContactInvalid) -> Self {
        ApiError::Invalid(invalid)
    }
}
