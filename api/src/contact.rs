use std::sync::LazyLock;

use gloo_net::http::Request;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::CONTACT_PATH;

// contact relay messages
//
// the same types are deserialized by the server handler and serialized by the
// webapp, so the validation below runs on both ends

pub const MSG_REQUIRED_FIELDS: &str = "Minden mező kitöltése kötelező";
pub const MSG_INVALID_EMAIL: &str = "Érvénytelen email cím";
pub const MSG_SEND_FAILED: &str = "Hiba történt az üzenet küldése közben";
pub const MSG_SENT: &str = "Üzenet sikeresen elküldve!";
pub const MSG_PRIVACY_REQUIRED: &str = "Kérjük, fogadja el az adatvédelmi szabályzatot.";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

// missing fields deserialize as empty strings so that the handler can answer
// with the validation message instead of a generic parse failure
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactReq {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactResp {
    pub success: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactErrorResp {
    pub error: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactInvalid {
    MissingField,
    InvalidEmail,
}

impl ContactInvalid {
    pub fn message(&self) -> &'static str {
        match self {
            ContactInvalid::MissingField => MSG_REQUIRED_FIELDS,
            ContactInvalid::InvalidEmail => MSG_INVALID_EMAIL,
        }
    }
}

impl std::fmt::Display for ContactInvalid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ContactInvalid {}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

impl ContactReq {
    pub fn validate(&self) -> Result<(), ContactInvalid> {
        if [&self.name, &self.email, &self.message]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(ContactInvalid::MissingField);
        }

        if !is_valid_email(self.email.trim()) {
            return Err(ContactInvalid::InvalidEmail);
        }

        Ok(())
    }
}

// post the message to the relay
//
// any non-success answer is collapsed into an error carrying the text the
// visitor should see; the server's own message is preferred when it sent one
pub async fn send_contact(req: &ContactReq) -> anyhow::Result<ContactResp> {
    let resp = Request::post(CONTACT_PATH)
        .json(req)?
        .send()
        .await
        .map_err(|_| anyhow::Error::msg(MSG_SEND_FAILED))?;

    if !resp.ok() {
        let error = resp
            .json::<ContactErrorResp>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| String::from(MSG_SEND_FAILED));

        return Err(anyhow::Error::msg(error));
    }

    let body: ContactResp = resp
        .json()
        .await
        .map_err(|_| anyhow::Error::msg(MSG_SEND_FAILED))?;

    if !body.success {
        return Err(anyhow::Error::msg(MSG_SEND_FAILED));
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(name: &str, email: &str, message: &str) -> ContactReq {
        ContactReq {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        }
    }

    #[test]
    fn complete_request_passes() {
        assert_eq!(req("Anna", "anna@example.hu", "Szia!").validate(), Ok(()));
    }

    #[test]
    fn blank_fields_are_rejected_before_the_email_check() {
        assert_eq!(
            req("", "not-an-email", "x").validate(),
            Err(ContactInvalid::MissingField)
        );
        assert_eq!(
            req("Anna", "anna@example.hu", "   ").validate(),
            Err(ContactInvalid::MissingField)
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["anna", "anna@", "anna@example", "an na@example.hu", "@example.hu"] {
            assert_eq!(
                req("Anna", email, "x").validate(),
                Err(ContactInvalid::InvalidEmail),
                "email {email:?}"
            );
        }
    }

    #[test]
    fn missing_json_fields_default_to_empty() {
        let req: ContactReq = serde_json::from_str(r#"{"name": "Anna"}"#).unwrap();

        assert_eq!(req.email, "");
        assert_eq!(req.validate().unwrap_err().message(), MSG_REQUIRED_FIELDS);
    }
}
