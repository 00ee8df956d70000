use std::{future::Future, sync::Arc};

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

use common::config::SiteConfig;

// services reachable over the message bus; the http service only sends
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ServiceType {
    Mail,
}

// service messages
//
// one enum-of-enums so that every service can talk to every other over a
// single channel type
pub type MsgSender = tokio::sync::mpsc::Sender<Msg>;
pub type MsgReceiver = tokio::sync::mpsc::Receiver<Msg>;

// replies travel back on oneshot channels
pub type MsgResp<T> = tokio::sync::oneshot::Sender<Result<T>>;

#[derive(Debug)]
pub enum Msg {
    Mail(crate::mail::msg::MailMsg),
}

// service registry
//
// each service is instantiated once and registers its sender under its type.
// services look up their dependencies when their inner state is built and keep
// a clone of the sender, so the registry must be fully populated before the
// first start() call
#[derive(Clone, Debug, Default)]
pub struct MsgRegistry(Arc<DashMap<ServiceType, MsgSender>>);

impl MsgRegistry {
    pub fn new() -> Self {
        MsgRegistry(Arc::new(DashMap::new()))
    }

    pub fn insert(&self, k: ServiceType, v: MsgSender) -> Result<()> {
        match self.0.insert(k.clone(), v) {
            None => Ok(()),
            Some(w) => {
                self.0.insert(k, w);
                Err(anyhow::Error::msg(
                    "internal error: a sender was added twice to the registry",
                ))
            }
        }
    }

    pub fn get(&self, k: &ServiceType) -> Result<MsgSender> {
        Ok(self
            .0
            .get(k)
            .ok_or_else(|| {
                anyhow::Error::msg(format!(
                    "internal error: a service was started without a necessary dependency ({k:?})"
                ))
            })?
            .clone())
    }
}

// core service trait
//
// the outer half owns the channel and the task handles, the inner half (see
// below) holds the state that the message handler works on
#[async_trait]
pub trait SiteService: Sized + Send + Sync + 'static {
    type Inner: SiteInner;

    fn create(config: Arc<SiteConfig>, registry: &MsgRegistry) -> Result<Self>;

    async fn start(&self, registry: &MsgRegistry) -> Result<()>;
}

// service message responder
#[async_trait]
pub trait SiteInner: Sized + Send + Sync + 'static {
    fn new(config: Arc<SiteConfig>, registry: MsgRegistry) -> Result<Self>;

    fn registry(&self) -> MsgRegistry;

    async fn message_handler(&self, msg: Msg) -> Result<()>;

    // the rpc functions return plain results so that they can call each other;
    // the message loop uses this to route the result back to the caller
    async fn respond<T, Fut>(&self, resp: MsgResp<T>, fut: Fut) -> Result<()>
    where
        T: Send + Sync,
        Fut: Future<Output = Result<T>> + Send,
    {
        resp.send(fut.await).map_err(|_| {
            anyhow::Error::msg(format!(
                "failed to respond to a {} message",
                std::any::type_name::<T>()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_rejects_duplicate_senders() {
        let registry = MsgRegistry::new();
        let (tx, _rx) = tokio::sync::mpsc::channel::<Msg>(1);

        registry.insert(ServiceType::Mail, tx.clone()).unwrap();
        assert!(registry.insert(ServiceType::Mail, tx).is_err());
        assert!(registry.get(&ServiceType::Mail).is_ok());
    }

    #[test]
    fn registry_reports_missing_dependencies() {
        let err = MsgRegistry::new().get(&ServiceType::Mail).unwrap_err();
        assert!(err.to_string().contains("Mail"));
    }
}
