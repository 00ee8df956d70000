use api::cms::CmsClient;

pub mod storage;
pub mod style;

// every section talks to the same cms, configured when the bundle is built
pub fn cms() -> CmsClient {
    CmsClient::from_env()
}

// a section whose fetch failed keeps showing the built-in content; the
// failure only goes to the log
pub fn or_fallback<T>(what: &str, result: anyhow::Result<T>, fallback: impl FnOnce() -> T) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!({what = what, error = %err}, "cms fetch failed, using built-in content");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_fetches_use_the_fallback() {
        let value = or_fallback("courses", Err(anyhow::Error::msg("offline")), || 3);
        assert_eq!(value, 3);

        let value = or_fallback("courses", Ok(1), || 3);
        assert_eq!(value, 1);
    }
}
