use crate::patterns::{BASE64_CONTENT, BASE64_DATA_URI};
use crate::validators::Validator;
use base64::{engine::general_purpose::STANDARD, Engine};

/// Canonical Base64 payload: shape-checked against the alphabet/padding
/// pattern, then actually decoded.
pub struct Base64Content;

impl Validator for Base64Content {
    fn is_valid(&self, input: &str) -> bool {
        BASE64_CONTENT.is_match(input) && STANDARD.decode(input).is_ok()
    }
}

pub fn is_base64_content(input: &str) -> bool {
    Base64Content.is_valid(input)
}

/// Parts extracted from a `data:` URI carrying Base64 content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base64DataUri {
    /// Full media type, e.g. `image/png`.
    pub media_type: String,
    /// Subtype alone, e.g. `png`.
    pub extension: String,
    /// The Base64 payload, undecoded.
    pub content: String,
}

/// Parses a `data:<type>/<subtype>;base64,<content>` URI. Returns `None`
/// when the shape or the payload alphabet does not match.
pub fn parse_base64_data_uri(input: &str) -> Option<Base64DataUri> {
    let captures = BASE64_DATA_URI.captures(input)?;
    Some(Base64DataUri {
        media_type: captures.name("type")?.as_str().to_string(),
        extension: captures.name("extension")?.as_str().to_string(),
        content: captures.name("content")?.as_str().to_string(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_payloads() {
        let valid = ["TnV2IFRvb2xz", "QQ==", "QUJD", "YWJjZA==", "AAAA"];
        for payload in valid {
            assert!(is_base64_content(payload), "{payload}");
        }
    }

    #[test]
    fn invalid_payloads() {
        let invalid = [
            "",
            "QQ=",
            "Q===",
            "TnV2IFRvb2x!",
            "TnV2 IFRvb2xz",
            "AAAA=",
        ];
        for payload in invalid {
            assert!(!is_base64_content(payload), "{payload}");
        }
    }

    #[test]
    fn data_uri_extraction() {
        let parsed = parse_base64_data_uri("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(parsed.media_type, "image/png");
        assert_eq!(parsed.extension, "png");
        assert_eq!(parsed.content, "iVBORw0KGgo=");

        let parsed = parse_base64_data_uri("data:application/pdf;base64,AAAA").unwrap();
        assert_eq!(parsed.media_type, "application/pdf");
        assert_eq!(parsed.extension, "pdf");
        assert_eq!(parsed.content, "AAAA");
    }

    #[test]
    fn malformed_data_uris() {
        let malformed = [
            "data:image/png;base64,",
            "data:image/png,AAAA",
            "data:imagepng;base64,AAAA",
            "image/png;base64,AAAA",
        ];
        for uri in malformed {
            assert!(parse_base64_data_uri(uri).is_none(), "{uri}");
        }
    }
}
