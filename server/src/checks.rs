use std::path::Path;

// the server can run without the bundle (the contact relay still works), so
// these only produce warnings at startup
pub fn doc_root_ready(doc_root: &Path) -> anyhow::Result<()> {
    if !doc_root.is_dir() {
        return Err(anyhow::Error::msg(format!(
            "doc_root {doc_root:?} is not a directory"
        )));
    }

    let index = doc_root.join("index.html");

    if !index.is_file() {
        return Err(anyhow::Error::msg(format!(
            "doc_root {doc_root:?} has no index.html, client routes will not load"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_root_needs_an_index() {
        let dir = std::env::temp_dir().join(format!("papirmania-checks-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        assert!(doc_root_ready(&dir.join("missing")).is_err());

        let _ = std::fs::remove_file(dir.join("index.html"));
        assert!(doc_root_ready(&dir).is_err());

        std::fs::write(dir.join("index.html"), "<html></html>").unwrap();
        assert!(doc_root_ready(&dir).is_ok());
    }
}
