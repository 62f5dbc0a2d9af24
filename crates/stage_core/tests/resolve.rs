use std::sync::Once;

use stage_core::{decode_ascii_literal, resolve_endpoint, STAGE_SOURCE};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(stage_logging::initialize_for_tests);
}

fn encode(plain: &str) -> String {
    plain.chars().map(|c| format!("%{:02X}", c as u32)).collect()
}

#[test]
fn decodes_triplets_left_to_right() {
    init_logging();
    assert_eq!(decode_ascii_literal("%68%69"), "hi");
    assert_eq!(decode_ascii_literal("a%62c"), "abc");
    assert_eq!(decode_ascii_literal(""), "");
}

#[test]
fn non_triplet_characters_pass_through() {
    init_logging();
    assert_eq!(decode_ascii_literal("plain text"), "plain text");
    assert_eq!(decode_ascii_literal("x%3Ay"), "x:y");
}

#[test]
fn invalid_hex_consumes_the_triplet() {
    init_logging();
    assert_eq!(decode_ascii_literal("a%zzb"), "ab");
    assert_eq!(decode_ascii_literal("%zz"), "");
}

#[test]
fn truncated_percent_passes_through() {
    init_logging();
    assert_eq!(decode_ascii_literal("abc%4"), "abc%4");
    assert_eq!(decode_ascii_literal("abc%"), "abc%");
}

#[test]
fn decoding_is_pure() {
    init_logging();
    let literal = encode("https://example.com/path?a=1");
    assert_eq!(decode_ascii_literal(&literal), decode_ascii_literal(&literal));
    assert_eq!(decode_ascii_literal(&literal), "https://example.com/path?a=1");
}

#[test]
fn round_trip_through_encoding_is_stable() {
    init_logging();
    let plain = "https://example.com/click?key=abc&t1={creo}";
    let decoded = decode_ascii_literal(&encode(plain));
    assert_eq!(decoded, plain);
    assert_eq!(decode_ascii_literal(&encode(&decoded)), plain);
}

#[test]
fn non_url_literal_resolves_to_none() {
    init_logging();
    assert_eq!(resolve_endpoint(&encode("not a url at all")), None);
    assert_eq!(resolve_endpoint("%20"), None);
}

#[test]
fn encoded_https_literal_resolves() {
    init_logging();
    let url = resolve_endpoint(&encode("https://example.com/landing")).expect("valid url");
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("example.com"));
}

#[test]
fn production_literal_resolves_to_https() {
    init_logging();
    let url = resolve_endpoint(STAGE_SOURCE).expect("production literal must resolve");
    assert_eq!(url.scheme(), "https");
    assert!(url.query().is_some());
}
