use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use color_eyre::{eyre::eyre, Result};

/// Local-only image preview, encoded as a `data:` URL. Never uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarPreview(String);

impl AvatarPreview {
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        let encoded = general_purpose::STANDARD.encode(bytes);

        Self(format!("data:{mime};base64,{encoded}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for AvatarPreview {
    fn from(value: String) -> Self {
        Self(value)
    }
}

fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

pub async fn read_avatar(path: &Path) -> Result<AvatarPreview> {
    if !path.is_file() {
        return Err(eyre!("{} is not a file", path.display()));
    }

    let bytes = tokio::fs::read(path).await?;
    tracing::debug!(path = %path.display(), size = bytes.len(), "avatar preview loaded");

    Ok(AvatarPreview::from_bytes(mime_for(path), &bytes))
}

/// Up to two uppercase initials, shown when there is no avatar.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}
