use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// papirmania server configuration subtables
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    // ip and port for http server
    pub socket: String,

    // location of the built wasm app, i.e. the directory holding index.html
    pub doc_root: PathBuf,
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            socket: String::from("127.0.0.1:8080"),
            doc_root: PathBuf::from("dist"),
        }
    }
}

// transactional mail provider used by the contact relay
//
// the request shape follows the resend api, which several other providers accept
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct MailConfig {
    pub api_url: String,

    // usually supplied through RESEND_API_KEY rather than the file
    pub api_key: Option<String>,

    pub from: String,
    pub to: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        MailConfig {
            api_url: String::from("https://api.resend.com/emails"),
            api_key: None,
            from: String::from("Papírmania Weboldal <noreply@papirmania.hu>"),
            to: String::from("info@papirmania.hu"),
        }
    }
}
