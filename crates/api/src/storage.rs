//! Local blob storage for project preview images.
//!
//! Images are written under a single directory with a UUID v4 file name and
//! the original extension. The file name is the opaque image id handed back
//! to clients, so ids are validated before they are ever joined onto a path.

use std::path::PathBuf;

use showcase_core::error::CoreError;
use uuid::Uuid;

/// Accepted image extensions and their content types.
const IMAGE_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
];

/// A stored image ready to be served.
#[derive(Debug)]
pub struct StoredImage {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Debug)]
pub struct ImageStore {
    root: PathBuf,
    max_bytes: usize,
}

impl ImageStore {
    pub fn new(root: PathBuf, max_bytes: usize) -> Self {
        Self { root, max_bytes }
    }

    /// Store `bytes` uploaded as `filename`, returning the new image id.
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> Result<String, CoreError> {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        if content_type_for(&ext).is_none() {
            return Err(CoreError::Validation(format!(
                "Unsupported image format '.{ext}'. Supported: .png, .jpg, .jpeg, .webp, .gif"
            )));
        }
        if bytes.is_empty() {
            return Err(CoreError::Validation("Uploaded file is empty".into()));
        }
        if bytes.len() > self.max_bytes {
            return Err(CoreError::Validation(format!(
                "Image exceeds the {} byte limit",
                self.max_bytes
            )));
        }

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| CoreError::Internal(format!("Failed to create storage dir: {e}")))?;

        let id = format!("{}.{ext}", Uuid::new_v4());
        tokio::fs::write(self.root.join(&id), bytes)
            .await
            .map_err(|e| CoreError::Internal(format!("Failed to write image: {e}")))?;

        tracing::debug!(image_id = %id, size = bytes.len(), "Image stored");
        Ok(id)
    }

    /// Load an image by id. Malformed and unknown ids are both `Ok(None)`.
    pub async fn load(&self, id: &str) -> Result<Option<StoredImage>, CoreError> {
        let Some(content_type) = parse_image_id(id) else {
            return Ok(None);
        };
        match tokio::fs::read(self.root.join(id)).await {
            Ok(bytes) => Ok(Some(StoredImage {
                content_type,
                bytes,
            })),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::Internal(format!("Failed to read image: {e}"))),
        }
    }
}

/// Whether `id` has the shape of an id produced by [`ImageStore::save`].
pub fn is_valid_image_id(id: &str) -> bool {
    parse_image_id(id).is_some()
}

fn parse_image_id(id: &str) -> Option<&'static str> {
    let (stem, ext) = id.split_once('.')?;
    Uuid::parse_str(stem).ok()?;
    // Only the lowercase form is ever produced.
    if ext != ext.to_lowercase() {
        return None;
    }
    content_type_for(ext)
}

fn content_type_for(ext: &str) -> Option<&'static str> {
    IMAGE_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, content_type)| *content_type)
}
