//! Inline image encoding.
//!
//! Image bytes cross the boundary to the upstream model as a single
//! self-describing data URL; there is no separate upload mechanism.

use std::path::Path;

use base64::Engine;

use crate::error::TaggerError;

/// MIME type used when the extension gives no answer.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Base64-encoded image ready to send to the completion API.
#[derive(Debug, Clone)]
pub struct ImageInput {
    /// Base64-encoded image bytes
    pub data: String,
    /// MIME type (e.g. "image/jpeg", "image/png")
    pub media_type: String,
}

impl ImageInput {
    /// Read and encode the image at `path`.
    ///
    /// The MIME type is guessed from the file extension, falling back to
    /// [`DEFAULT_MIME_TYPE`]. A missing path fails with `ImageNotFound`
    /// before any read is attempted.
    pub fn from_path(path: &Path) -> std::result::Result<Self, TaggerError> {
        if !path.exists() {
            return Err(TaggerError::ImageNotFound(path.to_path_buf()));
        }

        let media_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();

        let bytes = std::fs::read(path).map_err(|e| TaggerError::ImageEncoding {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Self::from_bytes(&bytes, &media_type))
    }

    /// Create an `ImageInput` from raw bytes and a MIME type.
    pub fn from_bytes(bytes: &[u8], media_type: &str) -> Self {
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            media_type: media_type.to_string(),
        }
    }

    /// Return the `data:<mime>;base64,<payload>` form.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_from_path_missing_file() {
        let err = ImageInput::from_path(&PathBuf::from("/nonexistent/image.jpg")).unwrap_err();
        assert!(matches!(err, TaggerError::ImageNotFound(_)));
    }

    #[test]
    fn test_from_path_detects_mime_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(&[0x89, 0x50, 0x4E, 0x47])
            .unwrap();

        let input = ImageInput::from_path(&path).unwrap();
        assert_eq!(input.media_type, "image/png");
        assert!(!input.data.is_empty());
    }

    #[test]
    fn test_from_path_unknown_extension_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.zzz9");
        std::fs::write(&path, [1, 2, 3]).unwrap();

        let input = ImageInput::from_path(&path).unwrap();
        assert_eq!(input.media_type, DEFAULT_MIME_TYPE);
    }

    #[test]
    fn test_data_url_shape() {
        let input = ImageInput::from_bytes(&[1, 2, 3], "image/jpeg");
        assert!(input.data_url().starts_with("data:image/jpeg;base64,"));
    }
}
