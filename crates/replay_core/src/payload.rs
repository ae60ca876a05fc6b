use crate::ShareRejected;

/// The decoded intent driving one playback or one redirect.
///
/// Construction enforces a non-empty trimmed query; empty optional fields are
/// stored as `None` so that "absent" has a single representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPayload {
    query: String,
    engine_id: Option<String>,
    custom_destination: Option<String>,
}

impl SearchPayload {
    /// Returns `None` when `query` is empty after trimming. The query itself is kept verbatim.
    pub fn new(query: impl Into<String>) -> Option<Self> {
        let query = query.into();
        if query.trim().is_empty() {
            return None;
        }
        Some(Self {
            query,
            engine_id: None,
            custom_destination: None,
        })
    }

    pub fn with_engine(mut self, engine_id: impl Into<String>) -> Self {
        self.engine_id = non_empty(engine_id.into());
        self
    }

    pub fn with_custom_destination(mut self, destination: impl Into<String>) -> Self {
        self.custom_destination = non_empty(destination.into());
        self
    }

    /// Builds a payload from live form fields, trimming the query and destination
    /// the way the page does before submitting or sharing.
    pub fn from_form(
        query: &str,
        engine_id: &str,
        custom_destination: &str,
    ) -> Result<Self, ShareRejected> {
        let payload = Self::new(query.trim()).ok_or(ShareRejected::EmptyQuery)?;
        Ok(payload
            .with_engine(engine_id)
            .with_custom_destination(custom_destination.trim()))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn engine_id(&self) -> Option<&str> {
        self.engine_id.as_deref()
    }

    pub fn custom_destination(&self) -> Option<&str> {
        self.custom_destination.as_deref()
    }

    /// Number of typing steps needed to spell out the query, counted in characters.
    pub fn query_len(&self) -> usize {
        self.query.chars().count()
    }

    /// The first `len` characters of the query.
    pub fn query_prefix(&self, len: usize) -> &str {
        match self.query.char_indices().nth(len) {
            Some((byte_idx, _)) => &self.query[..byte_idx],
            None => &self.query,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
