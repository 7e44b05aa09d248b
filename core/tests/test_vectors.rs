//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Query parameters are compared as decoded pairs
//! rather than raw strings, so only presence and values matter.

use translate_core::{ErrorKind, FilterKey, HttpResponse, Locale, Request, Response};
use uuid::Uuid;

fn client(origin: Uuid) -> Request {
    Request::new()
        .with_protocol("http")
        .with_host("localhost")
        .with_port(3000)
        .with_origin(origin)
        .disable_logging()
}

fn parse_error_kind(s: &str) -> ErrorKind {
    match s {
        "Remote" => ErrorKind::Remote,
        "Decode" => ErrorKind::Decode,
        other => panic!("unknown error kind: {other}"),
    }
}

fn simulated(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

fn pairs(value: &serde_json::Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Translate
// ---------------------------------------------------------------------------

#[test]
fn translate_test_vectors() {
    let raw = include_str!("../../test-vectors/translate.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();
    let origin: Uuid = vectors["origin"].as_str().unwrap().parse().unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let subject = case["subject"].as_str().unwrap();

        let mut c = client(origin);
        for (key, value) in pairs(&case["filters"]) {
            let key: FilterKey = key.parse().unwrap();
            c = c.with_filter(key, value);
        }

        // Verify build
        let expected_req = &case["expected_request"];
        let req = c.build_translate_request(subject).unwrap();
        let expected_path = expected_req["path"]
            .as_str()
            .unwrap()
            .replace("{origin}", &origin.to_string());
        assert_eq!(req.url.path(), expected_path, "{name}: path");

        let query: Vec<(String, String)> = req
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let expected_query = pairs(&expected_req["query"]);
        assert_eq!(query.len(), expected_query.len(), "{name}: query length");
        for pair in &expected_query {
            assert!(query.contains(pair), "{name}: missing query pair {pair:?}");
        }

        // Verify parse
        let result = c.parse_translation(subject, simulated(case));
        let expected = &case["expected_result"];

        if let Some(expected_error) = case.get("expected_error") {
            let failure = result.unwrap_err();
            assert_eq!(
                failure.kind(),
                parse_error_kind(expected_error.as_str().unwrap()),
                "{name}: error kind"
            );
            assert_eq!(failure.partial.original, expected["original"], "{name}: original");
            assert_eq!(failure.partial.translated, expected["translated"], "{name}: translated");
            if let Some(information) = expected.get("information") {
                assert_eq!(failure.partial.information, *information, "{name}: information");
            } else {
                assert!(!failure.partial.information.is_empty(), "{name}: information");
            }
        } else {
            let response = result.unwrap();
            let expected: Response = serde_json::from_value(expected.clone()).unwrap();
            assert_eq!(response, expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Locales
// ---------------------------------------------------------------------------

#[test]
fn locales_test_vectors() {
    let raw = include_str!("../../test-vectors/locales.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client(Uuid::nil());
    let req = c.build_locales_request().unwrap();
    assert_eq!(req.url.as_str(), "http://localhost:3000/locales");

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let result = c.parse_locales(simulated(case));

        if let Some(expected_error) = case.get("expected_error") {
            let failure = result.unwrap_err();
            assert_eq!(
                failure.kind(),
                parse_error_kind(expected_error.as_str().unwrap()),
                "{name}: error kind"
            );
            assert!(failure.partial.locales.is_empty(), "{name}: locales");
            if let Some(expected) = case.get("expected_result") {
                assert_eq!(failure.partial.message, expected["message"], "{name}: message");
            }
        } else {
            let response = result.unwrap();
            let expected = &case["expected_result"];
            let locales: Vec<Locale> = serde_json::from_value(expected["locales"].clone()).unwrap();
            assert_eq!(response.locales, locales, "{name}: locales");
            assert_eq!(response.message, expected["message"], "{name}: message");
        }
    }
}
