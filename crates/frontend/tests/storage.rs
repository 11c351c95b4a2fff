//! localStorage round-trips for the session token store

#![cfg(target_arch = "wasm32")]

use ris_frontend::session::storage;
use ris_http::types::TokenPair;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn pair() -> TokenPair {
    TokenPair {
        access: "access-abc".into(),
        refresh: "refresh-def".into(),
    }
}

#[wasm_bindgen_test]
fn stored_tokens_come_back() {
    storage::store_tokens(&pair());

    let session = storage::stored_session().unwrap();
    assert_eq!(session.access_token, "access-abc");
    assert_eq!(session.refresh_token.as_deref(), Some("refresh-def"));
    assert!(session.is_valid());
}

#[wasm_bindgen_test]
fn clearing_the_access_token_leaves_the_refresh_token() {
    storage::store_tokens(&pair());
    storage::clear_access_token();

    assert!(storage::access_token().is_none());
    assert!(storage::stored_session().is_none());
    assert_eq!(storage::refresh_token().as_deref(), Some("refresh-def"));
}
