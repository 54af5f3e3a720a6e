//! Browser localStorage helpers for persisted editor preferences.
//!
//! Without the `csr` feature (native tests) storage is absent: loads return
//! `None` and saves are no-ops.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let raw = match local_storage()?.get_item(key) {
            Ok(raw) => raw?,
            Err(err) => {
                log::warn!("cannot read stored {key}: {err:?}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("ignoring stored {key}: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("cannot encode {key}: {err}");
                return;
            }
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("localStorage rejected {key}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}
