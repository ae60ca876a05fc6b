use crate::{build_search_url, EngineRegistry, SearchPayload};

/// Computes the navigation target for `payload`.
///
/// A non-empty custom destination is returned verbatim. Otherwise the payload's
/// engine is used when the registry knows it, then `fallback_engine_id`, then the
/// registry default.
pub fn resolve_redirect(
    registry: &EngineRegistry,
    payload: &SearchPayload,
    fallback_engine_id: &str,
) -> String {
    if let Some(destination) = payload.custom_destination() {
        return destination.to_string();
    }
    let engine_id = payload
        .engine_id()
        .filter(|id| registry.contains(id))
        .unwrap_or(fallback_engine_id);
    build_search_url(registry.resolve(engine_id), payload.query())
}
