//! HTTP method representation.
//!
//! The read-vs-command distinction carries per-variant payload: read requests
//! hold optional query pairs, command requests hold an optional body.

use bytes::Bytes;
use serde::Serialize;

use crate::error::ClientError;
use crate::utils::query::query_pairs;

/// Mutating HTTP verbs (excludes GET).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandVerb {
    Post,
    Put,
    Patch,
    Delete,
}

impl CommandVerb {
    /// Wire name of the verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// HTTP method with its payload.
#[derive(Debug, Clone)]
pub enum RequestMethod {
    /// Query-bearing read verb. Pairs are appended to any pre-existing query
    /// string on the endpoint URL, after the existing items.
    Get(Option<Vec<(String, String)>>),
    /// Body-bearing command verb with optional body bytes.
    Command(CommandVerb, Option<Bytes>),
}

impl RequestMethod {
    /// Plain GET with no extra query items.
    pub fn get() -> Self {
        Self::Get(None)
    }

    /// GET with query pairs converted from any ordered string-keyed mapping.
    pub fn get_with_query<I, K, V>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        Self::Get(Some(query_pairs(mapping)))
    }

    /// POST with raw body bytes.
    pub fn post(body: impl Into<Bytes>) -> Self {
        Self::Command(CommandVerb::Post, Some(body.into()))
    }

    /// PUT with raw body bytes.
    pub fn put(body: impl Into<Bytes>) -> Self {
        Self::Command(CommandVerb::Put, Some(body.into()))
    }

    /// PATCH with raw body bytes.
    pub fn patch(body: impl Into<Bytes>) -> Self {
        Self::Command(CommandVerb::Patch, Some(body.into()))
    }

    /// DELETE with no body.
    pub fn delete() -> Self {
        Self::Command(CommandVerb::Delete, None)
    }

    /// POST with a JSON-encoded body.
    pub fn post_json<T: Serialize>(value: &T) -> Result<Self, ClientError> {
        Ok(Self::Command(CommandVerb::Post, Some(encode_json(value)?)))
    }

    /// PUT with a JSON-encoded body.
    pub fn put_json<T: Serialize>(value: &T) -> Result<Self, ClientError> {
        Ok(Self::Command(CommandVerb::Put, Some(encode_json(value)?)))
    }

    /// PATCH with a JSON-encoded body.
    pub fn patch_json<T: Serialize>(value: &T) -> Result<Self, ClientError> {
        Ok(Self::Command(CommandVerb::Patch, Some(encode_json(value)?)))
    }

    /// The reqwest verb for this method.
    pub fn http_method(&self) -> reqwest::Method {
        match self {
            Self::Get(_) => reqwest::Method::GET,
            Self::Command(verb, _) => match verb {
                CommandVerb::Post => reqwest::Method::POST,
                CommandVerb::Put => reqwest::Method::PUT,
                CommandVerb::Patch => reqwest::Method::PATCH,
                CommandVerb::Delete => reqwest::Method::DELETE,
            },
        }
    }

    /// Query pairs carried by a read verb, if any.
    pub fn query(&self) -> Option<&[(String, String)]> {
        match self {
            Self::Get(Some(pairs)) => Some(pairs.as_slice()),
            _ => None,
        }
    }

    /// Body bytes carried by a command verb, if any.
    pub fn body(&self) -> Option<Bytes> {
        match self {
            Self::Command(_, body) => body.clone(),
            Self::Get(_) => None,
        }
    }
}

fn encode_json<T: Serialize>(value: &T) -> Result<Bytes, ClientError> {
    let bytes = serde_json::to_vec(value)
        .map_err(|e| ClientError::Configuration(format!("failed to encode JSON body: {e}")))?;
    Ok(bytes.into())
}
