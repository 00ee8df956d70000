use std::sync::Arc;

use anyhow::{Context, Result};
use async_cell::sync::AsyncCell;
use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::{
    Method, Request,
    body::Bytes,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use maud::html;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{Level, debug, error, info, instrument, warn};

use crate::{
    mail::msg::MailMsg,
    service::{Msg, MsgReceiver, MsgRegistry, ServiceType, SiteInner, SiteService},
};
use api::contact::ContactReq;
use common::{config::SiteConfig, server::MailConfig};

type HttpsClient = Client<HttpsConnector<HttpConnector>, Full<Bytes>>;

pub struct MailService {
    config: Arc<SiteConfig>,
    receiver: Arc<Mutex<MsgReceiver>>,
    handle: AsyncCell<tokio::task::JoinHandle<Result<()>>>,
}

#[async_trait]
impl SiteService for MailService {
    type Inner = MailRelay;

    fn create(config: Arc<SiteConfig>, registry: &MsgRegistry) -> Result<Self> {
        let (tx, rx) = tokio::sync::mpsc::channel::<Msg>(32);

        registry
            .insert(ServiceType::Mail, tx)
            .context("failed to add mail sender to registry")?;

        Ok(MailService {
            config: config.clone(),
            receiver: Arc::new(Mutex::new(rx)),
            handle: AsyncCell::new(),
        })
    }

    #[instrument(level=Level::DEBUG, skip(self, registry))]
    async fn start(&self, registry: &MsgRegistry) -> Result<()> {
        info!("starting");

        if !self.config.has_mail_key() {
            warn!("no mail api key configured, contact messages will fail until one is set");
        }

        let receiver = Arc::clone(&self.receiver);
        let state = Arc::new(MailRelay::new(self.config.clone(), registry.clone())?);

        let serve = {
            async move {
                let mut receiver = receiver.lock().await;

                while let Some(msg) = receiver.recv().await {
                    let state = Arc::clone(&state);
                    tokio::task::spawn(async move {
                        match state.message_handler(msg).await {
                            Ok(()) => (),
                            Err(err) => {
                                error!({service = "mail", channel = "msg", error = %err})
                            }
                        }
                    });
                }

                Err(anyhow::Error::msg("mail service msg channel disconnected"))
            }
        };

        self.handle.set(tokio::task::spawn(serve));

        debug!("started");
        Ok(())
    }
}

// the part of the mail service that actually talks to the provider
pub struct MailRelay {
    config: Arc<SiteConfig>,
    registry: MsgRegistry,
    client: HttpsClient,
}

#[async_trait]
impl SiteInner for MailRelay {
    fn new(config: Arc<SiteConfig>, registry: MsgRegistry) -> Result<Self> {
        let https = HttpsConnectorBuilder::new()
            .with_native_roots()
            .context("failed to load native tls roots")?
            .https_or_http()
            .enable_http1()
            .enable_http2()
            .build();

        Ok(MailRelay {
            config: config.clone(),
            registry: registry.clone(),
            client: Client::builder(TokioExecutor::new()).build(https),
        })
    }

    fn registry(&self) -> MsgRegistry {
        self.registry.clone()
    }

    async fn message_handler(&self, msg: Msg) -> Result<()> {
        match msg {
            Msg::Mail(message) => match message {
                MailMsg::SendContact { resp, message } => {
                    self.respond(resp, self.send_contact(message)).await
                }
            },
        }
    }
}

impl MailRelay {
    #[instrument(skip_all)]
    async fn send_contact(&self, message: ContactReq) -> Result<()> {
        let mail = &self.config.mail;

        let api_key = mail
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow::Error::msg("mail api key is not configured"))?;

        let body = serde_json::to_vec(&OutgoingMail::new(mail, &message))?;

        let req = Request::builder()
            .method(Method::POST)
            .uri(&mail.api_url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .body(Full::new(Bytes::from(body)))
            .context("failed to build mail provider request")?;

        let resp = self
            .client
            .request(req)
            .await
            .context("mail provider request failed")?;

        let status = resp.status();

        if !status.is_success() {
            let body = resp.into_body().collect().await?.to_bytes();

            return Err(anyhow::Error::msg(format!(
                "mail provider returned {status}: {}",
                String::from_utf8_lossy(&body)
            )));
        }

        debug!("contact message relayed");
        Ok(())
    }
}

// request body for the provider's send endpoint
#[derive(Debug, Serialize)]
pub struct OutgoingMail<'a> {
    pub from: &'a str,
    pub to: Vec<&'a str>,
    pub reply_to: &'a str,
    pub subject: String,
    pub html: String,
}

impl<'a> OutgoingMail<'a> {
    pub fn new(config: &'a MailConfig, message: &'a ContactReq) -> Self {
        OutgoingMail {
            from: &config.from,
            to: vec![config.to.as_str()],
            reply_to: message.email.trim(),
            subject: format!("Új üzenet: {}", message.name.trim()),
            html: render_html(message),
        }
    }
}

// visitors control every field; maud escapes each interpolated value
pub fn render_html(message: &ContactReq) -> String {
    let body = message.message.replace("\r\n", "\n");

    html! {
        h2 { "Új kapcsolatfelvételi űrlap" }
        p { strong { "Név:" } " " (message.name.trim()) }
        p { strong { "Email:" } " " (message.email.trim()) }
        p { strong { "Üzenet:" } }
        p {
            @for (i, line) in body.split('\n').enumerate() {
                @if i > 0 { br; }
                (line)
            }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactReq {
        ContactReq {
            name: String::from("Kovács <b>Márta</b>"),
            email: String::from(" marta@example.hu "),
            message: String::from("Szia!\r\nMikor lesz a következő alkalom?\n\"Köszi\""),
        }
    }

    #[test]
    fn html_body_escapes_markup_in_the_message() {
        let html = render_html(&ContactReq {
            name: String::from("Tom & Jerry"),
            email: String::from("tom@example.hu"),
            message: String::from("<script>alert(\"x\")</script>\nárvíztűrő"),
        });

        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;<br>árvíztűrő"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn html_body_escapes_fields_and_keeps_line_breaks() {
        let html = render_html(&message());

        assert!(html.contains("<strong>Név:</strong> Kovács &lt;b&gt;Márta&lt;/b&gt;"));
        assert!(html.contains("<strong>Email:</strong> marta@example.hu</p>"));
        assert!(html.contains("Szia!<br>Mikor lesz a következő alkalom?<br>&quot;Köszi&quot;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn outgoing_mail_matches_the_provider_shape() {
        let config = MailConfig::default();
        let message = message();
        let value = serde_json::to_value(OutgoingMail::new(&config, &message)).unwrap();

        assert_eq!(value["from"], "Papírmania Weboldal <noreply@papirmania.hu>");
        assert_eq!(value["to"], serde_json::json!(["info@papirmania.hu"]));
        assert_eq!(value["reply_to"], "marta@example.hu");
        assert_eq!(value["subject"], "Új üzenet: Kovács <b>Márta</b>");
    }
}
