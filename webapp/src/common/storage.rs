use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

// values are stored as plain strings, not json, so that whatever the browser
// already holds under a key from an earlier version of the site reads back as-is

pub fn set_local_storage(key: &str, value: &str) {
    if let Err(err) = LocalStorage::raw().set_item(key, value) {
        console_error!(format!("Failed to set local storage {key}: {err:?}"));
    }
}

// a first visit has nothing stored, which comes back as None rather than an error
pub fn get_local_storage(key: &str) -> anyhow::Result<Option<String>> {
    LocalStorage::raw().get_item(key).map_err(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}
