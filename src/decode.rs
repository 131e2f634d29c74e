//! Base64 body decoding.

use crate::config::HandlerConfig;
use crate::error::Result;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use std::borrow::Cow;

/// Standard alphabet with optional `=` padding, as `java.util.Base64` decodes.
const BODY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Split a data URI into its media type and payload.
///
/// Anything up to the last comma is treated as the header, matching how
/// browsers upload files (`data:application/pdf;base64,JVBERi0...`). Base64
/// never contains a comma, so a bare payload passes through untouched.
pub fn split_data_uri(body: &str) -> (Option<&str>, &str) {
    match body.rfind(',') {
        Some(idx) => {
            let header = &body[..idx];
            let media_type = header
                .strip_prefix("data:")
                .map(|rest| rest.split(';').next().unwrap_or(rest))
                .filter(|mime| !mime.is_empty());
            (media_type, &body[idx + 1..])
        },
        None => (None, body),
    }
}

/// Decode an event body into raw document bytes.
pub fn decode_body(body: &str, config: &HandlerConfig) -> Result<Vec<u8>> {
    let payload = if config.accept_data_uri {
        let (media_type, payload) = split_data_uri(body);
        if let Some(mime) = media_type {
            log::debug!("Body is a data URI with media type {}", mime);
        }
        payload
    } else {
        body
    };

    let payload: Cow<'_, str> = if config.strip_whitespace {
        Cow::Owned(payload.chars().filter(|c| !c.is_ascii_whitespace()).collect())
    } else {
        Cow::Borrowed(payload)
    };

    let bytes = BODY_ENGINE.decode(payload.as_bytes())?;
    log::debug!("Decoded {} base64 chars into {} bytes", payload.len(), bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_plain_base64() {
        let bytes = decode_body("SGVsbG8=", &HandlerConfig::default()).unwrap();
        assert_eq!(bytes, b"Hello");
    }

    #[test]
    fn test_padding_is_optional() {
        let config = HandlerConfig::default();
        assert_eq!(decode_body("SGVsbG8", &config).unwrap(), b"Hello");
        assert_eq!(decode_body("SGk", &config).unwrap(), b"Hi");
        assert_eq!(decode_body("data:application/pdf;base64,SGVsbG8", &config).unwrap(), b"Hello");
    }

    #[test]
    fn test_truncated_quantum_is_rejected() {
        assert!(decode_body("SGVsbG8=A", &HandlerConfig::default()).is_err());
        assert!(decode_body("Q", &HandlerConfig::default()).is_err());
    }

    #[test]
    fn test_malformed_base64() {
        let err = decode_body("not-base64!!", &HandlerConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Base64(_)));
    }

    #[test]
    fn test_data_uri() {
        let body = "data:application/pdf;base64,SGVsbG8=";
        assert_eq!(split_data_uri(body), (Some("application/pdf"), "SGVsbG8="));
        assert_eq!(decode_body(body, &HandlerConfig::default()).unwrap(), b"Hello");
    }

    #[test]
    fn test_data_uri_disabled() {
        let config = HandlerConfig::new().with_data_uri(false);
        let result = decode_body("data:application/pdf;base64,SGVsbG8=", &config);
        assert!(result.is_err());
    }

    #[test]
    fn test_bare_payload_has_no_media_type() {
        assert_eq!(split_data_uri("SGVsbG8="), (None, "SGVsbG8="));
        assert_eq!(split_data_uri(",SGVsbG8="), (None, "SGVsbG8="));
    }

    #[test]
    fn test_whitespace_is_rejected_by_default() {
        let result = decode_body("SGVs\nbG8=", &HandlerConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_whitespace_stripping() {
        let config = HandlerConfig::new().with_strip_whitespace(true);
        assert_eq!(decode_body("SGVs\r\nbG8=\n", &config).unwrap(), b"Hello");
    }

    #[test]
    fn test_empty_body_decodes_to_nothing() {
        assert!(decode_body("", &HandlerConfig::default()).unwrap().is_empty());
    }
}
