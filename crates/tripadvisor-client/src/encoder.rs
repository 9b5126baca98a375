//! Turns an endpoint path and validated parameters into a request URL.

use serde_json::{Map, Value};
use tripadvisor_core::{Result, TripAdvisorError};
use url::Url;

/// Query key the API key is sent under
pub const API_KEY_PARAM: &str = "key";

/// Build the request URL for `path` under `base`.
///
/// `{name}` placeholders in `path` are filled from `params` and left out of
/// the query. The API key goes first, then every remaining non-null parameter
/// in the order it appears in `params`.
pub fn encode(base: &str, path: &str, api_key: &str, params: &Value) -> Result<Url> {
    let Value::Object(params) = params else {
        return Err(TripAdvisorError::invalid_request(
            "parameters must be a JSON object",
        ));
    };

    let mut url = Url::parse(base).map_err(|e| {
        TripAdvisorError::Configuration(format!("invalid base URL {base:?}: {e}"))
    })?;
    let placeholders = append_path(&mut url, path, params)?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair(API_KEY_PARAM, api_key);
        for (name, value) in params {
            if value.is_null() || placeholders.contains(&name.as_str()) {
                continue;
            }
            query.append_pair(name, &render(value));
        }
    }

    Ok(url)
}

/// Appends the segments of `template` to `url`, returning the placeholder names used
fn append_path<'p>(
    url: &mut Url,
    template: &'p str,
    params: &Map<String, Value>,
) -> Result<Vec<&'p str>> {
    let mut used = Vec::new();
    let mut segments = url.path_segments_mut().map_err(|()| {
        TripAdvisorError::Configuration("base URL cannot carry a path".to_string())
    })?;
    segments.pop_if_empty();

    for segment in template.split('/').filter(|s| !s.is_empty()) {
        match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) => {
                let value = params
                    .get(name)
                    .filter(|v| !v.is_null())
                    .ok_or_else(|| {
                        TripAdvisorError::invalid_request(format!(
                            "{name}: missing value for path placeholder"
                        ))
                    })?;
                segments.push(&render(value));
                used.push(name);
            }
            None => {
                segments.push(segment);
            }
        }
    }

    Ok(used)
}

/// String form of a parameter value
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(","),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// URL with the API key masked, for logging
pub(crate) fn redacted(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM { "***".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
