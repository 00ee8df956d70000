use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::server::{HttpConfig, MailConfig};

pub const ENV_MAIL_KEY: &str = "RESEND_API_KEY";
pub const ENV_DOC_ROOT: &str = "DIST_DIR";
pub const ENV_SOCKET: &str = "PAPIRMANIA_SOCKET";

// papirmania configuration
//
// everything the server needs at start; nothing here is reloaded at runtime
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub http: HttpConfig,
    pub mail: MailConfig,
}

impl SiteConfig {
    // environment overrides, applied after the file is parsed
    //
    // the lookup is injected so that tests do not have to touch the process
    // environment
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = lookup(ENV_MAIL_KEY) {
            self.mail.api_key = Some(key);
        }

        if let Some(dir) = lookup(ENV_DOC_ROOT) {
            self.http.doc_root = PathBuf::from(dir);
        }

        if let Some(socket) = lookup(ENV_SOCKET) {
            self.http.socket = socket;
        }
    }

    pub fn has_mail_key(&self) -> bool {
        self.mail
            .api_key
            .as_ref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<SiteConfig> {
    // only the message, since the full error quotes the offending line and
    // that line may well be the api key
    let data: TomlConfigFile = toml::from_str(doc)
        .map_err(|err| anyhow::Error::msg(format!("failed to parse config file: {}", err.message())))?;

    Ok(data.config)
}

#[instrument(level=Level::DEBUG)]
pub async fn read_config(filename: PathBuf) -> anyhow::Result<Arc<SiteConfig>> {
    debug!("reading config file");

    let doc = tokio::fs::read_to_string(&filename)
        .await
        .with_context(|| format!("failed to read config file {filename:?}"))?;

    let mut config = parse_config(&doc)?;

    config.apply_env(|key| std::env::var(key).ok());

    debug!("successfully parsed config file");
    Ok(Arc::new(config))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const DOC: &str = r#"
[config.http]
socket = "0.0.0.0:3000"
doc_root = "/srv/papirmania/dist"

[config.mail]
to = "muhely@papirmania.hu"
"#;

    #[test]
    fn parses_the_config_table() {
        let config = parse_config(DOC).unwrap();

        assert_eq!(config.http.socket, "0.0.0.0:3000");
        assert_eq!(config.http.doc_root, PathBuf::from("/srv/papirmania/dist"));
        assert_eq!(config.mail.to, "muhely@papirmania.hu");
        assert_eq!(config.mail.api_url, MailConfig::default().api_url);
        assert!(!config.has_mail_key());
    }

    #[test]
    fn empty_config_table_uses_defaults() {
        assert_eq!(parse_config("[config]").unwrap(), SiteConfig::default());
    }

    #[test]
    fn missing_config_table_is_an_error() {
        assert!(parse_config("[http]\nsocket = \"x\"").is_err());
    }

    #[test]
    fn parse_errors_do_not_echo_the_file() {
        let err = parse_config("[config.mail]\napi_key = re_secret_value").unwrap_err();
        assert!(!err.to_string().contains("re_secret_value"));
    }

    #[test]
    fn environment_overrides_the_file() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_MAIL_KEY, "re_123"),
            (ENV_DOC_ROOT, "/tmp/dist"),
            (ENV_SOCKET, "   "),
        ]);

        let mut config = parse_config(DOC).unwrap();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert!(config.has_mail_key());
        assert_eq!(config.mail.api_key.as_deref(), Some("re_123"));
        assert_eq!(config.http.doc_root, PathBuf::from("/tmp/dist"));
        // blank values are ignored
        assert_eq!(config.http.socket, "0.0.0.0:3000");
    }
}
