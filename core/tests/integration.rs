//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port and drives the client over real
//! HTTP with the default ureq transport, so URL building, path-safe encoding
//! and response parsing are checked against an actual server.

use std::net::SocketAddr;

use translate_core::{ErrorKind, FilterKey, Request, Response, TranslateError};

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn request_for(addr: SocketAddr) -> Request {
    Request::new()
        .with_protocol("http")
        .with_host(addr.ip().to_string())
        .with_port(addr.port())
        .from_origin("integration-tests")
        .unwrap()
        .disable_logging()
}

#[test]
fn translate_lifecycle() {
    let addr = start_server();
    let request = request_for(addr);

    // Step 1: no locale, the subject comes back unchanged.
    let response = request.get("Hello").unwrap();
    assert_eq!(
        response,
        Response {
            original: "Hello".to_string(),
            translated: "Hello".to_string(),
            information: String::new(),
        }
    );

    // Step 2: localise.
    let response = request.localise("Hello", "fr").unwrap();
    assert_eq!(response.translated, "Bonjour");

    // Step 3: subject with characters that need escaping.
    let response = request.localise("Hello World", "fr").unwrap();
    assert_eq!(response.original, "Hello World");
    assert_eq!(response.translated, "Bonjour le monde");

    // Step 4: filters configured on the request itself.
    let german = request
        .clone()
        .with_locale("de")
        .with_filter(FilterKey::Origin, "tests");
    assert_eq!(german.get("Hello").unwrap().translated, "Hallo");

    // Step 5: unsupported locale is a remote error with the service's message.
    let failure = request.localise("Hello", "xx").unwrap_err();
    assert_eq!(
        failure.error,
        TranslateError::Remote {
            status: 404,
            message: "unsupported language".to_string(),
        }
    );
    assert_eq!(failure.partial.information, "unsupported language");

    // Step 6: the same request twice gives the same answer.
    assert_eq!(
        request.localise("Hello", "ja").unwrap(),
        request.localise("Hello", "ja").unwrap()
    );
}

#[test]
fn locales_are_decoded() {
    let addr = start_server();
    let response = request_for(addr).get_locales().unwrap();

    let locales: Vec<(&str, &str)> = response
        .locales
        .iter()
        .map(|l| (l.locale.as_str(), l.name.as_str()))
        .collect();
    assert_eq!(
        locales,
        [
            ("en", "English"),
            ("fr", "Français"),
            ("de", "Deutsch"),
            ("ja", "日本語"),
        ]
    );
    assert!(response.message.is_empty());
}

#[test]
fn connection_refused_is_network_error() {
    // Grab a free port and release it so nothing is listening there.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let request = request_for(addr);

    let failure = request.get("Hello").unwrap_err();
    assert_eq!(failure.kind(), ErrorKind::Network);
    assert!(!failure.partial.information.is_empty());

    let failure = request.get_locales().unwrap_err();
    assert_eq!(failure.kind(), ErrorKind::Network);
    assert!(!failure.partial.message.is_empty());
}
