//! Header-map helpers.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

use crate::error::ClientError;

/// Build a `HeaderMap` from a string map, rejecting invalid names or values.
pub fn header_map(entries: &HashMap<String, String>) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::new();
    merge_headers(&mut headers, entries)?;
    Ok(headers)
}

/// Merge `extra` into `base`; one value per key, extra entries override
/// existing values for the same name.
pub fn merge_headers(base: &mut HeaderMap, extra: &HashMap<String, String>) -> Result<(), ClientError> {
    for (key, value) in extra {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| ClientError::Configuration(format!("invalid header name '{key}': {e}")))?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            ClientError::Configuration(format!("invalid header value for '{key}': {e}"))
        })?;
        base.insert(name, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_headers_overrides_existing_values() {
        let mut base = HeaderMap::new();
        base.insert(
            HeaderName::from_static("x-app-mode"),
            HeaderValue::from_static("a,b"),
        );

        let mut extra = HashMap::new();
        extra.insert("X-App-Mode".to_string(), "c".to_string());

        merge_headers(&mut base, &extra).unwrap();
        assert_eq!(base.get("x-app-mode").unwrap(), "c");
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let mut extra = HashMap::new();
        extra.insert("bad header".to_string(), "v".to_string());
        let err = header_map(&extra).unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }
}
