//! Local files headed for the backend, and the type hints each endpoint takes.

use std::path::{Path, PathBuf};

use crate::error::GatewayError;

/// Extensions offered for chat attachments
pub const CHAT_UPLOAD_EXTENSIONS: [&str; 5] = ["pdf", "txt", "png", "jpg", "jpeg"];

const OCTET_STREAM: &str = "application/octet-stream";

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Guess a MIME type from the file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    match extension(path).as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("heic") => "image/heic",
        Some("avif") => "image/avif",
        _ => OCTET_STREAM,
    }
}

pub fn accepts_chat_upload(path: &Path) -> bool {
    extension(path).is_some_and(|ext| CHAT_UPLOAD_EXTENSIONS.contains(&ext.as_str()))
}

/// The listing endpoint takes any image type.
pub fn accepts_listing_image(path: &Path) -> bool {
    mime_for_path(path).starts_with("image/")
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// A file read into memory, ready for a multipart `file` field
#[derive(Debug, Clone)]
pub struct Attachment {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub async fn read(path: &Path) -> Result<Self, GatewayError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| GatewayError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            file_name: file_name(path),
            mime: mime_for_path(path),
            bytes,
        })
    }
}
