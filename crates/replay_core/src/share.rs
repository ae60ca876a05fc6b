use url::Url;

use crate::{encode, EngineRegistry, SearchPayload};

/// Address of the playback page when none is configured.
pub const DEFAULT_PAGE_URL: &str = "https://search-for-you.local/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShareRejected {
    #[error("nothing to share: the query is empty")]
    EmptyQuery,
}

/// Produces replay links that point back at the page they were generated on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinkBuilder {
    base_url: String,
    registry: EngineRegistry,
}

impl ShareLinkBuilder {
    /// Uses `page_url` with its query and fragment removed as the link base.
    pub fn new(page_url: &Url, registry: EngineRegistry) -> Self {
        let mut base = page_url.clone();
        base.set_query(None);
        base.set_fragment(None);
        Self {
            base_url: base.into(),
            registry,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build(
        &self,
        query: &str,
        selected_engine_id: &str,
        custom_destination: &str,
    ) -> Result<String, ShareRejected> {
        let payload = SearchPayload::from_form(query, selected_engine_id, custom_destination)?;
        let params = encode(&payload, &self.registry);
        Ok(format!("{}?{}", self.base_url, params.to_query_string()))
    }
}

impl Default for ShareLinkBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PAGE_URL.to_string(),
            registry: EngineRegistry::builtin(),
        }
    }
}
