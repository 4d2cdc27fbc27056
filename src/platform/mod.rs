//! Platform abstraction layer
//!
//! Handles browser/native differences for storage (LocalStorage on web).
//! Native builds get no-op storage so the sim and its tests run headless.

/// Read a string value from LocalStorage
#[cfg(target_arch = "wasm32")]
pub fn storage_get(key: &str) -> Option<String> {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()?;
    storage.get_item(key).ok().flatten()
}

/// Write a string value to LocalStorage. Failures (quota, privacy mode)
/// are logged and swallowed; persistence is best-effort.
#[cfg(target_arch = "wasm32")]
pub fn storage_set(key: &str, value: &str) {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    if let Some(storage) = storage {
        if storage.set_item(key, value).is_err() {
            log::warn!("Failed to persist {key}");
        }
    }
}

/// Native stubs
#[cfg(not(target_arch = "wasm32"))]
pub fn storage_get(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn storage_set(_key: &str, _value: &str) {
    // No-op for native
}
