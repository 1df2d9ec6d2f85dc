//! Best-effort clipboard writes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Copy `text` to the clipboard. Failures are logged and reported as `false`.
pub async fn copy_text(text: String) -> bool {
    match write(text).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(%err, "copy to clipboard failed");
            false
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn write(text: String) -> Result<(), ClipboardError> {
    use dioxus::prelude::document;

    let literal =
        serde_json::to_string(&text).map_err(|err| ClipboardError::Rejected(err.to_string()))?;
    let script = format!(
        r#"if (!navigator.clipboard) {{ return false; }}
        return await navigator.clipboard.writeText({literal}).then(() => true, () => false);"#
    );

    let value = document::eval(&script)
        .await
        .map_err(|err| ClipboardError::Unavailable(format!("{err:?}")))?;

    if value.as_bool().unwrap_or(false) {
        Ok(())
    } else {
        Err(ClipboardError::Rejected("browser denied clipboard access".into()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn write(text: String) -> Result<(), ClipboardError> {
    use arboard::Clipboard;

    let mut clipboard =
        Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|err| ClipboardError::Rejected(err.to_string()))
}
