// =============================================================================
// component_tests.rs - WASM unit tests for the ConferenceHub front-end
//
// Exercises the wire types, the form-layer validation and the translation
// bundles as the browser build sees them. Runs via wasm-bindgen-test in a
// headless browser.
//
// Run with:
//   cd app/leptos-ui && wasm-pack test --headless --chrome
//   or: cd app/leptos-ui && cargo test --target wasm32-unknown-unknown
// =============================================================================

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use ch_api_types::{Conference, ConferencePatch, ConferenceRequest, ConferenceType};
use ch_leptos_ui::i18n::{I18n, Locale};
use ch_leptos_ui::validation;

// =============================================================================
// Wire-type tests
// =============================================================================

#[wasm_bindgen_test]
fn conference_roundtrips_through_backend_json() {
    let json = r#"{
        "id": 12,
        "titre": "Systems Day",
        "type": "Academic",
        "date": "2025-03-01T09:00",
        "duree": 2.0,
        "nombreInscrits": 50,
        "score": 4.2,
        "reviews": [],
        "keynoteId": 7
    }"#;
    let conf: Conference = serde_json::from_str(json).expect("conference deserialization failed");
    assert_eq!(conf.titre, "Systems Day");
    assert_eq!(conf.conference_type, ConferenceType::Academic);
    assert_eq!(conf.nombre_inscrits, 50);
    assert!(conf.keynote.is_none());
}

#[wasm_bindgen_test]
fn create_payload_serializes_with_wire_names() {
    let req = ConferenceRequest {
        titre: "DevDay".into(),
        conference_type: ConferenceType::Commercial,
        date: "2025-06-10T14:00".into(),
        duree: 1.5,
        nombre_inscrits: 120,
        score: 3.9,
        reviews: None,
        keynote_id: 2,
    };
    let body = serde_json::to_string(&req).expect("serialization failed");
    assert!(body.contains("\"type\":\"commercial\""));
    assert!(body.contains("\"nombreInscrits\":120"));
    assert!(body.contains("\"keynoteId\":2"));
    assert!(!body.contains("reviews"));
}

#[wasm_bindgen_test]
fn patch_payload_is_minimal() {
    let patch = ConferencePatch {
        score: Some(4.5),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_string(&patch).expect("serialization failed"),
        r#"{"score":4.5}"#
    );
}

// =============================================================================
// Form validation tests
// =============================================================================

#[wasm_bindgen_test]
fn submission_is_blocked_on_invalid_fields() {
    let errors = validation::validate_conference("", "2025-03-01T09:00", "0.2", "50", "6", None);
    assert!(!errors.is_empty());
    assert!(errors.titre.is_some());
    assert!(errors.duree.is_some());
    assert!(errors.score.is_some());
    assert!(errors.keynote.is_some());
}

#[wasm_bindgen_test]
fn valid_fields_pass_validation() {
    let errors =
        validation::validate_conference("Systems Day", "2025-03-01T09:00", "2", "50", "4.2", Some(7));
    assert!(errors.is_empty());

    let errors = validation::validate_keynote("Curie", "Marie", "marie@curie.fr", "Chercheuse");
    assert!(errors.is_empty());
}

// =============================================================================
// Translation bundle tests
// =============================================================================

#[wasm_bindgen_test]
fn both_locales_resolve_the_error_title() {
    let i18n = I18n::new();
    assert_eq!(i18n.translate(Locale::Fr, "toast-error"), "Erreur");
    assert_eq!(i18n.translate(Locale::En, "toast-error"), "Error");
}

#[wasm_bindgen_test]
fn unknown_keys_come_back_verbatim() {
    let i18n = I18n::new();
    assert_eq!(i18n.translate(Locale::Fr, "no-such-key"), "no-such-key");
}
