use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything `encodeURIComponent` escapes: all but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Identifier of the engine used when a lookup misses.
pub const DEFAULT_ENGINE_ID: &str = "google";

/// Static metadata describing how to build a search URL for one provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Prefix the query is appended to.
    pub url_template: &'static str,
    pub requires_percent_encoding: bool,
}

static BUILTIN_ENGINES: [EngineDescriptor; 4] = [
    EngineDescriptor {
        id: "google",
        display_name: "Google",
        url_template: "https://www.google.com/search?q=",
        requires_percent_encoding: true,
    },
    EngineDescriptor {
        id: "yandex",
        display_name: "Yandex",
        url_template: "https://yandex.ru/search/?text=",
        requires_percent_encoding: true,
    },
    EngineDescriptor {
        id: "bing",
        display_name: "Bing",
        url_template: "https://www.bing.com/search?q=",
        requires_percent_encoding: true,
    },
    EngineDescriptor {
        id: "duckduckgo",
        display_name: "DuckDuckGo",
        url_template: "https://duckduckgo.com/?q=",
        requires_percent_encoding: true,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search engine `{0}`")]
pub struct UnknownEngine(pub String);

/// Immutable engine table. Lookups never fail: a miss resolves to the default engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineRegistry {
    engines: &'static [EngineDescriptor],
    default_index: usize,
}

impl EngineRegistry {
    pub fn builtin() -> Self {
        Self {
            engines: &BUILTIN_ENGINES,
            default_index: 0,
        }
    }

    /// Returns a registry whose fallback is `engine_id`, which must be a known entry.
    pub fn with_default(self, engine_id: &str) -> Result<Self, UnknownEngine> {
        let default_index = self
            .engines
            .iter()
            .position(|engine| engine.id == engine_id)
            .ok_or_else(|| UnknownEngine(engine_id.to_string()))?;
        Ok(Self {
            default_index,
            ..self
        })
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, engine_id: &str) -> Option<&'static EngineDescriptor> {
        self.engines.iter().find(|engine| engine.id == engine_id)
    }

    pub fn contains(&self, engine_id: &str) -> bool {
        self.get(engine_id).is_some()
    }

    pub fn resolve(&self, engine_id: &str) -> &'static EngineDescriptor {
        self.get(engine_id).unwrap_or_else(|| self.default_engine())
    }

    pub fn default_engine(&self) -> &'static EngineDescriptor {
        &self.engines[self.default_index]
    }

    pub fn engines(&self) -> impl Iterator<Item = &'static EngineDescriptor> {
        self.engines.iter()
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn build_search_url(descriptor: &EngineDescriptor, query: &str) -> String {
    if descriptor.requires_percent_encoding {
        format!(
            "{}{}",
            descriptor.url_template,
            utf8_percent_encode(query, URI_COMPONENT)
        )
    } else {
        format!("{}{}", descriptor.url_template, query)
    }
}
