use crate::service::{Msg, MsgResp};
use api::contact::ContactReq;

#[derive(Debug)]
pub enum MailMsg {
    // relay one contact form submission to the site owner
    SendContact {
        resp: MsgResp<()>,
        message: ContactReq,
    },
}

impl From<MailMsg> for Msg {
    fn from(value: MailMsg) -> Self {
        Msg::Mail(value)
    }
}
