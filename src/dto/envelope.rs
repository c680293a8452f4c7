//! Response envelope shared by every backend call.
//!
//! The backend answers `{"success": bool, "error": "...", ...extras}`. Older
//! handlers emit booleans as `0`/`1` and identifiers as strings, so the
//! decoders below accept both spellings.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::types::ProfileId;

/// Message used when the backend reports a failure without any text.
pub const UNSPECIFIED_ERROR: &str = "Unknown error";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// `success` was false; carries the backend's message.
    #[error("{0}")]
    Rejected(String),
    /// The envelope or its extras did not have the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(deserialize_with = "lenient_bool")]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Envelope {
    /// Parses a raw response body.
    pub fn parse(body: &str) -> Result<Self, EnvelopeError> {
        serde_json::from_str(body).map_err(|err| EnvelopeError::Malformed(err.to_string()))
    }

    /// Turns the envelope into the operation specific reply.
    pub fn into_reply<T: DeserializeOwned>(self) -> Result<T, EnvelopeError> {
        if !self.success {
            let message = self
                .error
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| UNSPECIFIED_ERROR.to_string());
            return Err(EnvelopeError::Rejected(message));
        }

        serde_json::from_value(Value::Object(self.extra))
            .map_err(|err| EnvelopeError::Malformed(err.to_string()))
    }
}

/// Reply of operations without success extras.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {}

/// Reply of the type existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TypeExistsReply {
    #[serde(deserialize_with = "lenient_bool")]
    pub exists: bool,
}

/// Reply of the copy call; `profile_uid` names the column that received the copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CopyReply {
    #[serde(deserialize_with = "lenient_profile_id")]
    pub profile_uid: ProfileId,
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(flag) => Ok(flag),
        Value::Number(number) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
        Value::String(text) => match text.trim() {
            "" | "0" | "false" => Ok(false),
            _ => Ok(true),
        },
        Value::Null => Ok(false),
        other => Err(D::Error::custom(format!("expected a boolean, got {other}"))),
    }
}

fn lenient_profile_id<'de, D>(deserializer: D) -> Result<ProfileId, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => text.parse().map_err(D::Error::custom),
        Value::Number(number) => {
            let raw = number
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| D::Error::custom(format!("invalid profile id {number}")))?;
            ProfileId::new(raw).map_err(D::Error::custom)
        }
        other => Err(D::Error::custom(format!(
            "expected a profile id, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_without_extras_decodes_to_ack() {
        let envelope = Envelope::parse(r#"{"success": true}"#).unwrap();
        assert_eq!(envelope.into_reply::<Ack>(), Ok(Ack {}));
    }

    #[test]
    fn failure_carries_backend_message() {
        let envelope = Envelope::parse(r#"{"success": false, "error": "Duplicate type"}"#).unwrap();
        assert_eq!(
            envelope.into_reply::<Ack>(),
            Err(EnvelopeError::Rejected("Duplicate type".to_string()))
        );
    }

    #[test]
    fn failure_without_message_uses_placeholder() {
        let envelope = Envelope::parse(r#"{"success": 0}"#).unwrap();
        assert_eq!(
            envelope.into_reply::<TypeExistsReply>(),
            Err(EnvelopeError::Rejected(UNSPECIFIED_ERROR.to_string()))
        );
    }

    #[test]
    fn numeric_booleans_are_accepted() {
        let envelope = Envelope::parse(r#"{"success": 1, "exists": 0}"#).unwrap();
        assert_eq!(
            envelope.into_reply::<TypeExistsReply>(),
            Ok(TypeExistsReply { exists: false })
        );
    }

    #[test]
    fn profile_uid_decodes_from_string_or_number() {
        let from_string = Envelope::parse(r#"{"success": true, "profile_uid": "5"}"#)
            .unwrap()
            .into_reply::<CopyReply>()
            .unwrap();
        let from_number = Envelope::parse(r#"{"success": true, "profile_uid": 5}"#)
            .unwrap()
            .into_reply::<CopyReply>()
            .unwrap();

        assert_eq!(from_string, from_number);
        assert_eq!(from_string.profile_uid.get(), 5);
    }

    #[test]
    fn missing_extras_are_malformed() {
        let envelope = Envelope::parse(r#"{"success": true}"#).unwrap();
        assert!(matches!(
            envelope.into_reply::<CopyReply>(),
            Err(EnvelopeError::Malformed(_))
        ));
    }

    #[test]
    fn non_json_body_is_malformed() {
        assert!(matches!(
            Envelope::parse("<html>500</html>"),
            Err(EnvelopeError::Malformed(_))
        ));
    }
}
