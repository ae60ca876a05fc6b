use replay_core::{
    build_search_url, resolve_redirect, EngineDescriptor, EngineRegistry, SearchPayload,
    DEFAULT_ENGINE_ID,
};

#[test]
fn unknown_engine_falls_back_to_default() {
    let registry = EngineRegistry::builtin();
    assert_eq!(
        registry.resolve("not-a-real-engine"),
        registry.resolve("google")
    );
    assert_eq!(registry.default_engine().id, DEFAULT_ENGINE_ID);
}

#[test]
fn lookup_is_case_sensitive() {
    let registry = EngineRegistry::builtin();
    assert!(registry.contains("bing"));
    assert!(!registry.contains("Bing"));
    assert_eq!(registry.resolve("Bing").id, "google");
}

#[test]
fn registry_has_four_engines() {
    let ids: Vec<_> = EngineRegistry::builtin().engines().map(|e| e.id).collect();
    assert_eq!(ids, vec!["google", "yandex", "bing", "duckduckgo"]);
}

#[test]
fn configured_default_is_used_on_miss() {
    let registry = EngineRegistry::builtin().with_default("yandex").unwrap();
    assert_eq!(registry.resolve("nope").id, "yandex");
    assert!(EngineRegistry::builtin().with_default("nope").is_err());
}

#[test]
fn search_url_percent_encodes_when_required() {
    let registry = EngineRegistry::builtin();
    assert_eq!(
        build_search_url(registry.resolve("bing"), "cats"),
        "https://www.bing.com/search?q=cats"
    );
    assert_eq!(
        build_search_url(registry.resolve("google"), "cats & dogs"),
        "https://www.google.com/search?q=cats%20%26%20dogs"
    );
    assert_eq!(
        build_search_url(registry.resolve("google"), "hello world (it's) ~ok!*"),
        "https://www.google.com/search?q=hello%20world%20(it's)%20~ok!*"
    );
    assert_eq!(
        build_search_url(registry.resolve("yandex"), "кот+пёс?"),
        "https://yandex.ru/search/?text=%D0%BA%D0%BE%D1%82%2B%D0%BF%D1%91%D1%81%3F"
    );

    let raw = EngineDescriptor {
        id: "raw",
        display_name: "Raw",
        url_template: "https://raw.test/?q=",
        requires_percent_encoding: false,
    };
    assert_eq!(build_search_url(&raw, "a b"), "https://raw.test/?q=a b");
}

#[test]
fn custom_destination_wins_over_engine() {
    let registry = EngineRegistry::builtin();
    let payload = SearchPayload::new("cats")
        .unwrap()
        .with_engine("bing")
        .with_custom_destination("https://example.com/x");

    assert_eq!(
        resolve_redirect(&registry, &payload, "yandex"),
        "https://example.com/x"
    );
}

#[test]
fn payload_engine_then_fallback_then_default() {
    let registry = EngineRegistry::builtin();
    let with_engine = SearchPayload::new("cats").unwrap().with_engine("bing");
    assert_eq!(
        resolve_redirect(&registry, &with_engine, "yandex"),
        "https://www.bing.com/search?q=cats"
    );

    let tampered = SearchPayload::new("cats").unwrap().with_engine("evil");
    assert_eq!(
        resolve_redirect(&registry, &tampered, "yandex"),
        "https://yandex.ru/search/?text=cats"
    );
    assert_eq!(
        resolve_redirect(&registry, &tampered, "also-evil"),
        "https://www.google.com/search?q=cats"
    );
}
