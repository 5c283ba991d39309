//! Clipboard write via `navigator.clipboard`.

/// Copy `text` to the system clipboard.
///
/// # Errors
///
/// Returns a message when the browser refuses the write or no window exists.
pub async fn copy_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let clipboard = window
            .navigator()
            .clipboard()
            .ok_or_else(|| "clipboard unavailable".to_owned())?;
        let promise = clipboard.write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("clipboard not available on server".to_owned())
    }
}
