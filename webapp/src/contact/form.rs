use api::contact::{ContactInvalid, ContactReq, ContactResp, MSG_PRIVACY_REQUIRED, MSG_SENT};

pub const TITLE_SUCCESS: &str = "Sikeres küldés";
pub const TITLE_ERROR: &str = "Hiba";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultModal {
    pub kind: ModalKind,
    pub title: String,
    pub message: String,
}

impl ResultModal {
    fn success(message: &str) -> Self {
        ResultModal {
            kind: ModalKind::Success,
            title: TITLE_SUCCESS.to_owned(),
            message: message.to_owned(),
        }
    }

    fn error(message: &str) -> Self {
        ResultModal {
            kind: ModalKind::Error,
            title: TITLE_ERROR.to_owned(),
            message: message.to_owned(),
        }
    }
}

// contact form state
//
// submission is split in two so the component can own the async call:
// begin() validates and hands back the request (or opens an error modal),
// finish() takes the outcome of send_contact.  while a request is in flight
// begin() refuses to start another one
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub accept_terms: bool,
    submitting: bool,
    modal: Option<ResultModal>,
}

impl ContactForm {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn modal(&self) -> Option<&ResultModal> {
        self.modal.as_ref()
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn begin(&mut self) -> Option<ContactReq> {
        if self.submitting {
            return None;
        }

        if !self.accept_terms {
            self.modal = Some(ResultModal::error(MSG_PRIVACY_REQUIRED));
            return None;
        }

        let req = ContactReq {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        };

        // the email shape is left to the relay, which answers with its own
        // message; only blank fields are caught here
        if let Err(ContactInvalid::MissingField) = req.validate() {
            self.modal = Some(ResultModal::error(ContactInvalid::MissingField.message()));
            return None;
        }

        self.submitting = true;
        Some(req)
    }

    pub fn finish(&mut self, result: anyhow::Result<ContactResp>) {
        self.submitting = false;

        match result {
            Ok(resp) => {
                let message = if resp.message.is_empty() {
                    MSG_SENT
                } else {
                    resp.message.as_str()
                };
                self.modal = Some(ResultModal::success(message));

                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.accept_terms = false;
            }
            Err(err) => self.modal = Some(ResultModal::error(&err.to_string())),
        }
    }
}
