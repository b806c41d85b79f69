//! The `{meta, data}` response envelope every backend endpoint uses.

use serde::Deserialize;

/// Status code + message carried alongside every payload.
///
/// `code` mirrors HTTP status semantics but lives inside the body: a 2xx
/// transport response can still carry a non-200 envelope code.
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    pub code: u16,
    #[serde(default)]
    pub message: Option<String>,
}

impl Meta {
    /// The envelope message, with empty strings treated as absent.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

/// Response envelope: `{meta: {code, message}, data: ...}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub meta: Meta,
    #[serde(default)]
    pub data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success() {
        let json = r#"{"meta":{"code":200,"message":"ok"},"data":[1,2,3]}"#;
        let env: Envelope<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert_eq!(env.meta.code, 200);
        assert_eq!(env.meta.message(), Some("ok"));
        assert_eq!(env.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_envelope_error_without_data() {
        let json = r#"{"meta":{"code":404,"message":"symbol not found"}}"#;
        let env: Envelope<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert_eq!(env.meta.code, 404);
        assert_eq!(env.meta.message(), Some("symbol not found"));
        assert!(env.data.is_none());
    }

    #[test]
    fn test_empty_message_treated_as_absent() {
        let json = r#"{"meta":{"code":500,"message":""}}"#;
        let env: Envelope<()> = serde_json::from_str(json).unwrap();
        assert_eq!(env.meta.message(), None);
    }
}
