use std::sync::Arc;

use axum::extract::{Json, State, rejection::JsonRejection};
use tracing::{debug, instrument};

use crate::{
    http::{ApiError, svc::HttpEndpoint},
    mail::msg::MailMsg,
};
use api::contact::{ContactReq, ContactResp, MSG_SENT};

// contact relay
//
// the same validation runs in the browser, but the form is a public endpoint
// and anything can post to it
#[instrument(skip_all)]
pub(super) async fn send_contact(
    State(state): State<Arc<HttpEndpoint>>,
    payload: Result<Json<ContactReq>, JsonRejection>,
) -> Result<Json<ContactResp>, ApiError> {
    let Json(message) = payload?;

    message.validate()?;

    let (tx, rx) = tokio::sync::oneshot::channel();

    state
        .mail_svc_sender
        .send(MailMsg::SendContact { resp: tx, message }.into())
        .await
        .map_err(|_| ApiError::ChannelSendError)?;

    rx.await
        .map_err(|_| ApiError::ChannelRecvError)?
        .map_err(ApiError::SendFailed)?;

    debug!("contact message accepted");

    Ok(Json(ContactResp {
        success: true,
        message: MSG_SENT.to_owned(),
    }))
}
