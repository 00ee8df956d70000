use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use async_cell::sync::AsyncCell;
use async_trait::async_trait;
use axum::{Router, routing::post};
use tokio::net::TcpListener;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{Level, debug, info, instrument};

use crate::{
    http::api::send_contact,
    service::{Msg, MsgRegistry, MsgSender, ServiceType, SiteInner, SiteService},
};
use api::CONTACT_PATH;
use common::config::SiteConfig;

#[derive(Debug)]
pub struct HttpEndpoint {
    config: Arc<SiteConfig>,
    registry: MsgRegistry,
    pub(super) mail_svc_sender: MsgSender,
}

#[async_trait]
impl SiteInner for HttpEndpoint {
    fn new(config: Arc<SiteConfig>, registry: MsgRegistry) -> Result<Self> {
        Ok(HttpEndpoint {
            config: config.clone(),
            registry: registry.clone(),
            mail_svc_sender: registry
                .get(&ServiceType::Mail)
                .context("http service failed to find mail service sender")?,
        })
    }

    fn registry(&self) -> MsgRegistry {
        self.registry.clone()
    }

    // nothing talks to the http service, it only ever sends
    async fn message_handler(&self, msg: Msg) -> Result<()> {
        Err(anyhow::Error::msg(format!(
            "http service received an unexpected message: {msg:?}"
        )))
    }
}

pub struct HttpService {
    config: Arc<SiteConfig>,
    handle: AsyncCell<tokio::task::JoinHandle<Result<()>>>,
}

#[async_trait]
impl SiteService for HttpService {
    type Inner = HttpEndpoint;

    fn create(config: Arc<SiteConfig>, _registry: &MsgRegistry) -> Result<Self> {
        Ok(HttpService {
            config: config.clone(),
            handle: AsyncCell::new(),
        })
    }

    #[instrument(level=Level::DEBUG, skip(self, registry))]
    async fn start(&self, registry: &MsgRegistry) -> Result<()> {
        info!("starting");

        let state = Arc::new(HttpEndpoint::new(self.config.clone(), registry.clone())?);

        let socket: SocketAddr = self
            .config
            .http
            .socket
            .parse()
            .with_context(|| format!("invalid http socket {:?}", self.config.http.socket))?;

        // bind here rather than in the task so that a busy port fails startup
        let listener = TcpListener::bind(socket)
            .await
            .with_context(|| format!("http listener failed to bind {socket}"))?;

        info!({socket = %socket, doc_root = ?self.config.http.doc_root}, "listening");

        let serve = async move {
            axum::serve(listener, router(state))
                .await
                .context("http server exited")
        };

        self.handle.set(tokio::task::spawn(serve));

        debug!("started");
        Ok(())
    }
}

// the api routes, and the wasm bundle for everything else
//
// unknown paths get index.html so that client-side routes such as
// /kurzus/<id> survive a reload
pub fn router(state: Arc<HttpEndpoint>) -> Router {
    let doc_root = &state.config.http.doc_root;

    let static_files = ServeDir::new(doc_root).fallback(ServeFile::new(doc_root.join("index.html")));

    Router::new()
        .route(CONTACT_PATH, post(send_contact))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::mail::msg::MailMsg;
    use api::contact::{
        ContactErrorResp, ContactResp, MSG_INVALID_EMAIL, MSG_REQUIRED_FIELDS, MSG_SEND_FAILED,
        MSG_SENT,
    };
    use common::server::HttpConfig;

    // stands in for the mail service: fails any message from "Hiba", accepts the rest
    fn fake_mail_service(registry: &MsgRegistry) -> tokio::sync::mpsc::Receiver<String> {
        let (tx, mut rx) = tokio::sync::mpsc::channel::<Msg>(8);
        let (seen_tx, seen_rx) = tokio::sync::mpsc::channel::<String>(8);

        registry.insert(ServiceType::Mail, tx).unwrap();

        tokio::spawn(async move {
            while let Some(Msg::Mail(MailMsg::SendContact { resp, message })) = rx.recv().await {
                let result = if message.name == "Hiba" {
                    Err(anyhow::Error::msg("provider said no"))
                } else {
                    Ok(())
                };

                seen_tx.send(message.name).await.unwrap();
                resp.send(result).unwrap();
            }
        });

        seen_rx
    }

    fn doc_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("papirmania-{}-{name}", std::process::id()));

        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>papirmania</html>").unwrap();
        std::fs::write(dir.join("app.js"), "console.log(1)").unwrap();

        dir
    }

    fn app(name: &str) -> (Router, tokio::sync::mpsc::Receiver<String>) {
        let registry = MsgRegistry::new();
        let seen = fake_mail_service(&registry);

        let config = Arc::new(SiteConfig {
            http: HttpConfig {
                socket: String::from("127.0.0.1:0"),
                doc_root: doc_root(name),
            },
            ..SiteConfig::default()
        });

        let state = Arc::new(HttpEndpoint::new(config, registry).unwrap());

        (router(state), seen)
    }

    fn post_contact(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(CONTACT_PATH)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn body_of(resp: axum::response::Response) -> Vec<u8> {
        to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    #[tokio::test]
    async fn valid_message_is_relayed() {
        let (app, mut seen) = app("valid");

        let resp = app
            .oneshot(post_contact(
                r#"{"name": "Anna", "email": "anna@example.hu", "message": "Szia!"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body: ContactResp = serde_json::from_slice(&body_of(resp).await).unwrap();
        assert!(body.success);
        assert_eq!(body.message, MSG_SENT);
        assert_eq!(seen.recv().await.as_deref(), Some("Anna"));
    }

    #[tokio::test]
    async fn missing_fields_are_rejected_without_sending() {
        let (app, mut seen) = app("missing");

        let resp = app
            .oneshot(post_contact(r#"{"name": "Anna", "email": "anna@example.hu"}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ContactErrorResp = serde_json::from_slice(&body_of(resp).await).unwrap();
        assert_eq!(body.error, MSG_REQUIRED_FIELDS);
        assert!(seen.try_recv().is_err());
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let (app, _seen) = app("email");

        let resp = app
            .oneshot(post_contact(
                r#"{"name": "Anna", "email": "anna.example.hu", "message": "Szia!"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ContactErrorResp = serde_json::from_slice(&body_of(resp).await).unwrap();
        assert_eq!(body.error, MSG_INVALID_EMAIL);
    }

    #[tokio::test]
    async fn unparseable_body_is_a_bad_request() {
        let (app, _seen) = app("garbage");

        let resp = app.oneshot(post_contact("{not json")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ContactErrorResp = serde_json::from_slice(&body_of(resp).await).unwrap();
        assert!(!body.error.is_empty());
    }

    #[tokio::test]
    async fn provider_failure_is_a_server_error() {
        let (app, mut seen) = app("failure");

        let resp = app
            .oneshot(post_contact(
                r#"{"name": "Hiba", "email": "hiba@example.hu", "message": "x"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ContactErrorResp = serde_json::from_slice(&body_of(resp).await).unwrap();
        assert_eq!(body.error, MSG_SEND_FAILED);
        assert_eq!(seen.recv().await.as_deref(), Some("Hiba"));
    }

    #[tokio::test]
    async fn static_files_and_client_routes_are_served() {
        let (app, _seen) = app("static");

        let asset = app
            .clone()
            .oneshot(Request::get("/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(asset.status(), StatusCode::OK);
        assert_eq!(body_of(asset).await, b"console.log(1)");

        let client_route = app
            .oneshot(Request::get("/kurzus/7").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(client_route.status(), StatusCode::OK);
        assert_eq!(body_of(client_route).await, b"<html>papirmania</html>");
    }
}
