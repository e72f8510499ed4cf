//! Embeddable profile photo reference.
//!
//! A `PhotoRef` is always a complete `data:image/<subtype>;base64,<payload>`
//! URI. There is no partial state: it is either constructed valid or not at all.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhotoError {
    #[error("'{0}' is not a valid MIME type")]
    InvalidMime(String),

    #[error("'{0}' is not an image type")]
    NotAnImage(String),

    #[error("image is empty")]
    Empty,

    #[error("not a base64 image data URI")]
    MalformedUri,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhotoRef(String);

impl PhotoRef {
    /// Encodes uploaded image bytes as a data URI.
    pub fn from_image_bytes(content_type: &str, bytes: &[u8]) -> Result<Self, PhotoError> {
        let mime = parse_image_mime(content_type)?;
        if bytes.is_empty() {
            return Err(PhotoError::Empty);
        }
        Ok(Self(format!(
            "data:{};base64,{}",
            mime.essence_str(),
            STANDARD.encode(bytes)
        )))
    }

    /// Validates an existing data URI.
    pub fn parse(uri: &str) -> Result<Self, PhotoError> {
        let rest = uri.strip_prefix("data:").ok_or(PhotoError::MalformedUri)?;
        let (mime, payload) = rest
            .split_once(";base64,")
            .ok_or(PhotoError::MalformedUri)?;
        parse_image_mime(mime)?;
        if payload.is_empty() {
            return Err(PhotoError::Empty);
        }
        STANDARD
            .decode(payload)
            .map_err(|_| PhotoError::MalformedUri)?;
        Ok(Self(uri.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn parse_image_mime(content_type: &str) -> Result<mime::Mime, PhotoError> {
    let mime: mime::Mime = content_type
        .trim()
        .parse()
        .map_err(|_| PhotoError::InvalidMime(content_type.to_string()))?;
    if mime.type_() != mime::IMAGE {
        return Err(PhotoError::NotAnImage(mime.essence_str().to_string()));
    }
    Ok(mime)
}

impl TryFrom<String> for PhotoRef {
    type Error = PhotoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PhotoRef::parse(&value)
    }
}

impl From<PhotoRef> for String {
    fn from(photo: PhotoRef) -> Self {
        photo.0
    }
}

impl fmt::Display for PhotoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_bytes_become_data_uri() {
        let photo = PhotoRef::from_image_bytes("image/png", b"abc").unwrap();
        assert_eq!(photo.as_str(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_mime_parameters_are_dropped() {
        let photo = PhotoRef::from_image_bytes("image/jpeg; charset=binary", b"abc").unwrap();
        assert!(photo.as_str().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_non_image_is_rejected() {
        assert_eq!(
            PhotoRef::from_image_bytes("application/pdf", b"%PDF"),
            Err(PhotoError::NotAnImage("application/pdf".into()))
        );
    }

    #[test]
    fn test_empty_upload_is_rejected() {
        assert_eq!(
            PhotoRef::from_image_bytes("image/png", b""),
            Err(PhotoError::Empty)
        );
    }

    #[test]
    fn test_parse_accepts_own_output() {
        let photo = PhotoRef::from_image_bytes("image/webp", &[1, 2, 3, 4]).unwrap();
        assert_eq!(PhotoRef::parse(photo.as_str()).unwrap(), photo);
    }

    #[test]
    fn test_parse_rejects_broken_uris() {
        assert_eq!(
            PhotoRef::parse("https://example.com/me.png"),
            Err(PhotoError::MalformedUri)
        );
        assert_eq!(
            PhotoRef::parse("data:image/png;base64,@@@"),
            Err(PhotoError::MalformedUri)
        );
        assert!(matches!(
            PhotoRef::parse("data:text/plain;base64,YWJj"),
            Err(PhotoError::NotAnImage(_))
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<PhotoRef, _> = serde_json::from_str("\"data:image/gif;base64,R0lG\"");
        assert!(ok.is_ok());
        let bad: Result<PhotoRef, _> = serde_json::from_str("\"not a photo\"");
        assert!(bad.is_err());
    }
}
