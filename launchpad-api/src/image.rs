//! Base64 token-image validation
//!
//! Upload endpoints embed the token image as base64. The payload is decoded
//! and sniffed locally so oversized or non-image uploads never reach the
//! network.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use launchpad_core::{SdkError, SdkResult};

/// Maximum decoded image size accepted by the platform
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// A decoded, type-checked token image
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

/// Decode and validate a base64 image payload.
///
/// Accepts an optional `data:<mime>;base64,` prefix. Rejects payloads that
/// are not valid base64, exceed [`MAX_IMAGE_BYTES`] once decoded, or whose
/// magic bytes are not in the PNG/JPEG/GIF/WebP allow-list.
pub fn validate_base64_image(payload: &str) -> SdkResult<DecodedImage> {
    let encoded = strip_data_uri(payload);

    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| SdkError::validation(format!("Invalid image encoding: {}", e)))?;

    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(SdkError::validation(format!(
            "Image is {} bytes, maximum is {}",
            bytes.len(),
            MAX_IMAGE_BYTES
        )));
    }

    let mime_type = detect_mime(&bytes).ok_or_else(|| {
        SdkError::validation("Unsupported image type, expected PNG, JPEG, GIF or WebP")
    })?;

    Ok(DecodedImage { bytes, mime_type })
}

/// Strip a `data:<mime>;base64,` prefix when present
fn strip_data_uri(payload: &str) -> &str {
    if payload.starts_with("data:") {
        if let Some(idx) = payload.find(";base64,") {
            return &payload[idx + ";base64,".len()..];
        }
    }
    payload
}

/// Detect the image MIME type from magic bytes
fn detect_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn encode(bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    #[test]
    fn test_accepts_png() {
        let image = validate_base64_image(&encode(&PNG_MAGIC)).unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.bytes, PNG_MAGIC);
    }

    #[test]
    fn test_accepts_data_uri_prefix() {
        let payload = format!("data:image/png;base64,{}", encode(&PNG_MAGIC));
        let image = validate_base64_image(&payload).unwrap();
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn test_accepts_jpeg_gif_webp() {
        assert_eq!(
            validate_base64_image(&encode(&[0xFF, 0xD8, 0xFF, 0xE0]))
                .unwrap()
                .mime_type,
            "image/jpeg"
        );
        assert_eq!(
            validate_base64_image(&encode(b"GIF89a xxxx"))
                .unwrap()
                .mime_type,
            "image/gif"
        );
        let mut webp = Vec::from(*b"RIFF");
        webp.extend_from_slice(&[0, 0, 0, 0]);
        webp.extend_from_slice(b"WEBPVP8 ");
        assert_eq!(
            validate_base64_image(&encode(&webp)).unwrap().mime_type,
            "image/webp"
        );
    }

    #[test]
    fn test_rejects_invalid_base64() {
        assert!(matches!(
            validate_base64_image("not-base64!!"),
            Err(SdkError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_type() {
        // BMP magic is not in the allow-list
        assert!(matches!(
            validate_base64_image(&encode(b"BM1234")),
            Err(SdkError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_image() {
        let mut big = Vec::from(PNG_MAGIC);
        big.resize(MAX_IMAGE_BYTES + 1, 0);
        assert!(matches!(
            validate_base64_image(&encode(&big)),
            Err(SdkError::Validation(_))
        ));
    }
}
