//! Typed response decoding.

use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Converts response bytes into a typed value.
///
/// The decoder is a generic parameter of the executor rather than a trait
/// object, so `decode` can stay generic over the target type.
pub trait ResponseDecoder: Send + Sync {
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ClientError>;
}

/// `serde_json`-backed decoder; the executor default.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl ResponseDecoder for JsonDecoder {
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ClientError> {
        serde_json::from_slice(data).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pair {
        a: u32,
        b: String,
    }

    #[test]
    fn decodes_matching_schema() {
        let value: Pair = JsonDecoder.decode(br#"{"a": 1, "b": "two"}"#).unwrap();
        assert_eq!(
            value,
            Pair {
                a: 1,
                b: "two".to_string()
            }
        );
    }

    #[test]
    fn schema_mismatch_is_decoding_error() {
        let err = JsonDecoder.decode::<Pair>(b"{}").unwrap_err();
        assert!(err.is_decoding());
    }
}
