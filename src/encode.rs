//! Image file → data-URI encoding.
//!
//! The API takes images as self-contained data URIs. Format is sniffed
//! from the file's magic bytes, not its extension.

use std::path::Path;

use anyhow::Context;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode one image file as `data:{mime};base64,{payload}`.
pub fn data_uri_for(path: &Path) -> anyhow::Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let format = image::guess_format(&bytes)
        .with_context(|| format!("{} is not a recognized image format", path.display()))?;
    Ok(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(&bytes)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    // The 8-byte PNG signature — enough for format detection.
    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn png_encodes_with_mime_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        std::fs::write(&path, PNG_MAGIC).unwrap();

        let uri = data_uri_for(&path).unwrap();
        assert!(
            uri.starts_with("data:image/png;base64,"),
            "unexpected prefix: {uri}"
        );
        assert_eq!(uri, format!("data:image/png;base64,{}", STANDARD.encode(PNG_MAGIC)));
    }

    #[test]
    fn non_image_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"plain text, not pixels").unwrap();
        assert!(data_uri_for(&path).is_err());
    }

    #[test]
    fn missing_file_is_rejected() {
        assert!(data_uri_for(Path::new("/nonexistent/pixel.png")).is_err());
    }
}
