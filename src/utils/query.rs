//! Query-item helpers.

use url::Url;

/// Convert an ordered string-keyed mapping into query pairs.
///
/// Works on any iterator of key/value entries whose values render to strings,
/// preserving the iteration order of the source.
pub fn query_pairs<I, K, V>(mapping: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: ToString,
{
    mapping
        .into_iter()
        .map(|(key, value)| (key.into(), value.to_string()))
        .collect()
}

/// Append query pairs to `url`, after any pre-existing query items.
///
/// Existing items are never replaced.
pub fn append_query_pairs(url: &mut Url, pairs: &[(String, String)]) {
    if pairs.is_empty() {
        return;
    }
    let mut editor = url.query_pairs_mut();
    for (key, value) in pairs {
        editor.append_pair(key, value);
    }
}
