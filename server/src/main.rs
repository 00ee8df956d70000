use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod checks;
mod http;
mod mail;
mod service;

use common::config::read_config;
use service::{MsgRegistry, SiteService};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "/etc/papirmania/config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // both aws-lc-rs and ring can end up in the tree, in which case rustls
    // refuses to guess
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    info!("papirmania server starting up, processing config file");

    let config = read_config(PathBuf::from(args.config)).await?;

    info!("performing filesystem sanity checks");

    if let Err(err) = checks::doc_root_ready(&config.http.doc_root) {
        warn!({error = %err}, "static site unavailable");
    }

    info!("starting core services");

    let registry = MsgRegistry::new();

    let mail_svc = mail::svc::MailService::create(config.clone(), &registry)?;
    let http_svc = http::svc::HttpService::create(config.clone(), &registry)?;

    mail_svc.start(&registry).await?;
    http_svc.start(&registry).await?;

    info!("startup complete!");

    tokio::signal::ctrl_c().await?;

    info!("shutting down");
    Ok(())
}
