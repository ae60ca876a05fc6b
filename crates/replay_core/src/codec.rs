use url::{form_urlencoded, Url};

use crate::{EngineRegistry, SearchPayload};

pub const PARAM_QUERY: &str = "q";
pub const PARAM_ENGINE: &str = "engine";
pub const PARAM_CUSTOM: &str = "custom";

/// Ordered, already-decoded link parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkParams {
    pairs: Vec<(String, String)>,
}

impl LinkParams {
    /// Parses a raw query string. A leading `?` is accepted.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    pub fn from_url(url: &Url) -> Self {
        url.query_pairs().into_owned().collect()
    }

    /// First value for `key`, matching how a browser's parameter parser answers `get`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serializes with `application/x-www-form-urlencoded` escaping.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LinkParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Encodes a payload as `q`, then `engine` (only if known to `registry`), then `custom`.
pub fn encode(payload: &SearchPayload, registry: &EngineRegistry) -> LinkParams {
    let mut params = LinkParams::default();
    params.push(PARAM_QUERY, payload.query());
    if let Some(engine_id) = payload.engine_id().filter(|id| registry.contains(id)) {
        params.push(PARAM_ENGINE, engine_id);
    }
    if let Some(destination) = payload.custom_destination() {
        params.push(PARAM_CUSTOM, destination);
    }
    params
}

/// Returns `None` for a normal visit: no `q`, or a `q` that is blank.
pub fn decode(params: &LinkParams) -> Option<SearchPayload> {
    let mut payload = SearchPayload::new(params.get(PARAM_QUERY)?)?;
    if let Some(engine_id) = params.get(PARAM_ENGINE) {
        payload = payload.with_engine(engine_id);
    }
    if let Some(destination) = params.get(PARAM_CUSTOM) {
        payload = payload.with_custom_destination(destination);
    }
    Some(payload)
}
